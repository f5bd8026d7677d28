//! Background tasks module
//! 
//! This module contains the countdown task that runs alongside the controller.

pub mod countdown;

// Re-export main types
pub use countdown::{CountdownHandle, CountdownRenderer, Frame, DEFAULT_TICK};
