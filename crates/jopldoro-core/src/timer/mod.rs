mod engine;
mod period;

pub use engine::{format_clock, PeriodTimer};
pub use period::Period;
