//! HTTP client for the singleton timer resource

use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, RequestBuilder, Response};
use tracing::{debug, info, warn};

use crate::state::{Timer, TimerPayload};
use super::{error::ApiError, TimerApi};

/// Default location of the timer resource
pub const DEFAULT_API_URL: &str = "http://backend:8080/api/timer";
/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// `TimerApi` implementation speaking JSON over HTTP
#[derive(Debug, Clone)]
pub struct HttpTimerApi {
    client: Client,
    base_url: String,
}

impl HttpTimerApi {
    /// Build a client for the resource at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("countdown-timer/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and turn every non-success outcome into an `ApiError`
    async fn execute(&self, request: RequestBuilder, operation: &str) -> Result<Response, ApiError> {
        debug!("Sending {} request to {}", operation, self.base_url);

        let response = match request.header("Accept", "application/json").send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Network error during {}: {}", operation, e);
                return Err(ApiError::Unreachable(e.to_string()));
            }
        };

        let status = response.status();
        if status.is_success() {
            debug!("{} request succeeded with {}", operation, status);
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!("{} request failed: status={}, response={}", operation, status, body);
        Err(ApiError::from_response(status.as_u16(), &body))
    }

    async fn read_timer(response: Response) -> Result<Timer, ApiError> {
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Unreachable(e.to_string()))?;

        serde_json::from_str::<Timer>(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl TimerApi for HttpTimerApi {
    async fn fetch(&self) -> Result<Timer, ApiError> {
        let response = self.execute(self.client.get(&self.base_url), "fetch").await?;
        let timer = Self::read_timer(response).await?;
        info!("Fetched timer '{}' targeting {}", timer.name, timer.target_date);
        Ok(timer)
    }

    async fn create(&self, payload: &TimerPayload) -> Result<Timer, ApiError> {
        let request = self.client.post(&self.base_url).json(payload);
        let response = self.execute(request, "create").await?;
        let timer = Self::read_timer(response).await?;
        info!("Created timer '{}' targeting {}", timer.name, timer.target_date);
        Ok(timer)
    }

    async fn update(&self, payload: &TimerPayload) -> Result<Timer, ApiError> {
        let request = self.client.put(&self.base_url).json(payload);
        let response = self.execute(request, "update").await?;
        let timer = Self::read_timer(response).await?;
        info!("Updated timer '{}' targeting {}", timer.name, timer.target_date);
        Ok(timer)
    }

    async fn delete(&self) -> Result<(), ApiError> {
        self.execute(self.client.delete(&self.base_url), "delete").await?;
        info!("Deleted timer");
        Ok(())
    }
}
