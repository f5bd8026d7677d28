//! Timer synchronization module
//! 
//! Form validation and the create/read/update/delete lifecycle against the
//! singleton backend resource.

pub mod controller;
pub mod validation;

// Re-export main types
pub use controller::{LoadOutcome, TimerController};
pub use validation::{validate_draft, NAME_MAX_CHARS, NAME_MIN_CHARS};
