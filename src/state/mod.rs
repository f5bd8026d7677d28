//! State module
//! 
//! Data carried between the backend, the form and the countdown.

pub mod timer;
pub mod remaining;
pub mod form_draft;

// Re-export main types
pub use timer::{Timer, TimerPayload};
pub use remaining::{time_remaining, RemainingDuration};
pub use form_draft::{parse_local_input, to_local_input, FormDraft, Mode, StatusKind, StatusMessage};
