//! Backend API module
//! 
//! The transport contract for the singleton timer resource, its HTTP
//! implementation and the error categories it reports.

pub mod client;
pub mod error;
pub mod responses;

use async_trait::async_trait;

use crate::state::{Timer, TimerPayload};

pub use client::{HttpTimerApi, DEFAULT_API_URL, DEFAULT_TIMEOUT};
pub use error::ApiError;

/// Operations on the singleton timer resource
#[async_trait]
pub trait TimerApi: Send + Sync {
    /// Fetch the current timer
    async fn fetch(&self) -> Result<Timer, ApiError>;

    /// Create the timer, replacing any existing one
    async fn create(&self, payload: &TimerPayload) -> Result<Timer, ApiError>;

    /// Replace the existing timer
    async fn update(&self, payload: &TimerPayload) -> Result<Timer, ApiError>;

    /// Remove the timer
    async fn delete(&self) -> Result<(), ApiError>;
}
