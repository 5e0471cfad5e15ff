pub mod time;

pub use time::{ManualClock, fixed_now};
