pub mod sequence;
pub mod time;

pub use sequence::{AtomicSequence, ProcessSequence};
pub use time::SystemClock;
