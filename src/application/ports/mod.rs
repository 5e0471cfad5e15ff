pub mod sequence;
pub mod time;

pub use sequence::SequenceGenerator;
pub use time::Clock;
