//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Notify;

use countdown_timer::{
    api::{ApiError, TimerApi},
    state::{Timer, TimerPayload},
};

/// In-memory singleton backend with failure injection
#[derive(Clone, Default)]
pub struct InMemoryApi {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    timer: Mutex<Option<Timer>>,
    calls: Mutex<Vec<&'static str>>,
    fail_with: Mutex<Option<ApiError>>,
    gate: Mutex<Option<Arc<Notify>>>,
    entered: Notify,
}

impl InMemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timer(timer: Timer) -> Self {
        let api = Self::new();
        *api.inner.timer.lock().unwrap() = Some(timer);
        api
    }

    pub fn stored(&self) -> Option<Timer> {
        self.inner.timer.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.inner.calls.lock().unwrap().clone()
    }

    /// Make every following call fail with `error`, or succeed again with `None`
    pub fn fail_with(&self, error: Option<ApiError>) {
        *self.inner.fail_with.lock().unwrap() = error;
    }

    /// Hold every following call until the returned gate is notified
    pub fn hold(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.inner.gate.lock().unwrap() = Some(Arc::clone(&gate));
        gate
    }

    /// Resolves once a held call has started
    pub async fn entered(&self) {
        self.inner.entered.notified().await;
    }

    async fn begin(&self, call: &'static str) -> Result<(), ApiError> {
        self.inner.calls.lock().unwrap().push(call);

        let gate = self.inner.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            self.inner.entered.notify_one();
            gate.notified().await;
        }

        match self.inner.fail_with.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn store(&self, payload: &TimerPayload) -> Timer {
        let mut timer = Timer::new(payload.name.clone(), payload.target_date);
        timer.id = Some("singleton".to_string());
        timer.updated_at = Some(Utc::now());
        *self.inner.timer.lock().unwrap() = Some(timer.clone());
        timer
    }
}

#[async_trait]
impl TimerApi for InMemoryApi {
    async fn fetch(&self) -> Result<Timer, ApiError> {
        self.begin("fetch").await?;
        self.stored().ok_or_else(|| ApiError::NotFound("No timer found.".to_string()))
    }

    async fn create(&self, payload: &TimerPayload) -> Result<Timer, ApiError> {
        self.begin("create").await?;
        Ok(self.store(payload))
    }

    async fn update(&self, payload: &TimerPayload) -> Result<Timer, ApiError> {
        self.begin("update").await?;
        if self.stored().is_none() {
            return Err(ApiError::NotFound("No timer found.".to_string()));
        }
        Ok(self.store(payload))
    }

    async fn delete(&self) -> Result<(), ApiError> {
        self.begin("delete").await?;
        *self.inner.timer.lock().unwrap() = None;
        Ok(())
    }
}
