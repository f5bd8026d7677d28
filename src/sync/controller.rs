//! Synchronization of the form draft with the singleton timer resource

use std::sync::{Arc, Mutex};
use tokio::sync::{watch, Mutex as AsyncMutex};
use tracing::{debug, info, warn};

use crate::{
    api::{ApiError, TimerApi},
    error::{SaveError, SyncError, ValidationError},
    state::{FormDraft, Mode, StatusMessage, Timer, TimerPayload},
    utils::Clock,
};
use super::validation::validate_draft;

const SAVED: &str = "Timer saved successfully!";
const RESET: &str = "Timer reset successfully.";
const SAVE_FAILED: &str = "Failed to save timer.";
const RESET_FAILED: &str = "Failed to reset timer.";

/// Result of the startup fetch
///
/// Both `Absent` and `Unreachable` leave the controller in creating mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Found(Timer),
    /// The backend confirmed there is no timer
    Absent,
    /// The backend could not be asked, or answered with another failure
    Unreachable(ApiError),
}

/// Owns the form draft and keeps it in step with the backend timer
///
/// Every successful mutation publishes the canonical timer (or `None`) on a
/// watch channel; see [`TimerController::subscribe`].
pub struct TimerController<A> {
    api: A,
    clock: Arc<dyn Clock>,
    draft: Mutex<FormDraft>,
    timer_tx: watch::Sender<Option<Timer>>,
    /// Single slot for outstanding requests
    in_flight: AsyncMutex<()>,
}

impl<A: TimerApi> TimerController<A> {
    /// Create a controller with an empty draft and no published timer
    pub fn new(api: A, clock: Arc<dyn Clock>) -> Self {
        let (timer_tx, _) = watch::channel(None);

        Self {
            api,
            clock,
            draft: Mutex::new(FormDraft::new()),
            timer_tx,
            in_flight: AsyncMutex::new(()),
        }
    }

    /// Receive the current timer and every later change
    pub fn subscribe(&self) -> watch::Receiver<Option<Timer>> {
        self.timer_tx.subscribe()
    }

    /// The last timer confirmed by the backend
    pub fn current_timer(&self) -> Option<Timer> {
        self.timer_tx.borrow().clone()
    }

    /// Snapshot of the form draft
    pub fn draft(&self) -> FormDraft {
        self.with_draft(|draft| draft.clone())
    }

    pub fn mode(&self) -> Mode {
        self.with_draft(|draft| draft.mode)
    }

    pub fn status(&self) -> Option<StatusMessage> {
        self.with_draft(|draft| draft.status.clone())
    }

    pub fn set_name(&self, name: impl Into<String>) {
        let name = name.into();
        self.with_draft(|draft| draft.name = name);
    }

    /// Set the target as a local `YYYY-MM-DDTHH:MM` value
    pub fn set_target_date(&self, input: impl Into<String>) {
        let input = input.into();
        self.with_draft(|draft| draft.target_date_local = input);
    }

    /// Fetch the existing timer and initialize the draft from it
    pub async fn load(&self) -> LoadOutcome {
        let _slot = self.in_flight.lock().await;

        match self.api.fetch().await {
            Ok(timer) => {
                info!("Loaded existing timer '{}', editing", timer.name);
                self.with_draft(|draft| draft.fill_from(&timer));
                self.publish(Some(timer.clone()));
                LoadOutcome::Found(timer)
            }
            Err(e) => {
                self.with_draft(|draft| draft.mode = Mode::Creating);
                self.publish(None);

                if e.is_not_found() {
                    info!("No timer stored yet, creating");
                    LoadOutcome::Absent
                } else {
                    warn!("Could not load timer, assuming none exists: {}", e);
                    LoadOutcome::Unreachable(e)
                }
            }
        }
    }

    /// Check the current draft, recording a failure status when it is invalid
    pub fn validate(&self) -> Result<TimerPayload, ValidationError> {
        let now = self.clock.now();
        self.with_draft(|draft| {
            validate_draft(draft, now).map_err(|e| {
                debug!("Draft rejected: {:?}", e);
                draft.status = Some(StatusMessage::failure(e.to_string()));
                e
            })
        })
    }

    /// Create or update the timer from the draft
    pub async fn save(&self) -> Result<Timer, SaveError> {
        let payload = self.validate()?;

        let Ok(_slot) = self.in_flight.try_lock() else {
            warn!("Save rejected, another request is in flight");
            return Err(self.fail(SAVE_FAILED, SyncError::Busy).into());
        };

        let mode = self.mode();
        let result = match mode {
            Mode::Editing => self.api.update(&payload).await,
            Mode::Creating => self.api.create(&payload).await,
        };

        match result {
            Ok(timer) => {
                info!("Timer '{}' saved ({} -> editing)", timer.name, mode);
                self.with_draft(|draft| {
                    draft.mode = Mode::Editing;
                    draft.status = Some(StatusMessage::success(SAVED));
                });
                self.publish(Some(timer.clone()));
                Ok(timer)
            }
            Err(e) => Err(self.fail(SAVE_FAILED, e.into()).into()),
        }
    }

    /// Delete the timer and clear the draft
    pub async fn reset(&self) -> Result<(), SyncError> {
        let Ok(_slot) = self.in_flight.try_lock() else {
            warn!("Reset rejected, another request is in flight");
            return Err(self.fail(RESET_FAILED, SyncError::Busy));
        };

        match self.api.delete().await {
            Ok(()) => {
                info!("Timer reset, creating");
                self.with_draft(|draft| {
                    draft.clear();
                    draft.status = Some(StatusMessage::success(RESET));
                });
                self.publish(None);
                Ok(())
            }
            Err(e) => Err(self.fail(RESET_FAILED, e.into())),
        }
    }

    fn fail(&self, summary: &str, error: SyncError) -> SyncError {
        warn!("{} {}", summary, error);
        let text = format!("{} {}", summary, error.user_message());
        self.with_draft(|draft| draft.status = Some(StatusMessage::failure(text)));
        error
    }

    // Receivers may already be gone; the value is still kept for current_timer().
    fn publish(&self, timer: Option<Timer>) {
        self.timer_tx.send_replace(timer);
    }

    fn with_draft<R>(&self, f: impl FnOnce(&mut FormDraft) -> R) -> R {
        let mut draft = self.draft.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut draft)
    }
}
