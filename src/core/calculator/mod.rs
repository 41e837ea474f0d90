pub mod duration;

pub use duration::worked_minutes;
