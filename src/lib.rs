//! Countdown Timer - a terminal client for a singleton countdown resource
//! 
//! This library keeps a local form draft in sync with a single timer stored
//! on a REST backend and renders a live countdown to its target instant.

pub mod config;
pub mod error;
pub mod state;
pub mod api;
pub mod sync;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{SaveError, SyncError, ValidationError};
pub use api::{ApiError, HttpTimerApi, TimerApi};
pub use state::{FormDraft, Mode, RemainingDuration, Timer};
pub use sync::{LoadOutcome, TimerController};
pub use tasks::{CountdownHandle, CountdownRenderer, Frame};
pub use utils::signals::shutdown_signal;
