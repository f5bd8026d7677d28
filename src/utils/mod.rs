//! Utility functions module
//! 
//! Clock access and signal handling shared by the library and the binary.

pub mod clock;
pub mod signals;

// Re-export main items
pub use clock::{Clock, ManualClock, SystemClock};
pub use signals::shutdown_signal;
