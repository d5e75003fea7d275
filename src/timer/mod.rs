//! Game clock: elapsed seconds and `mm:ss` formatting.

pub mod clock;

pub use clock::{format_clock, GameTimer};
