//! Per-integration event delivery.
//!
//! A sink is the "global hook" an integration installs once its script has
//! loaded. Delivery is best-effort: the dispatcher logs and swallows sink
//! errors, so a sink may fail freely without affecting callers.

use crate::integration::Integration;
use lectern_core::error::AppError;
use lectern_core::events::AnalyticsEvent;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Delivers one event to one integration.
pub trait EventSink: Send + Sync {
    /// Attempts delivery. Errors are reported to the dispatcher, which logs
    /// them and moves on; they never reach the emitting caller.
    fn send(&self, event: &AnalyticsEvent) -> Result<(), AppError>;
}

/// Builds the sink installed when an integration finishes loading.
///
/// A seam rather than a constructor call so bootstrap can be tested with
/// recording sinks.
pub trait SinkFactory: Send + Sync {
    fn create(&self, integration: Integration, tag_id: &str) -> Arc<dyn EventSink>;
}

/// Production sink: posts the event as JSON to the integration's collection
/// endpoint from a detached task.
///
/// Delivery is fire-and-forget; `send` only fails when no runtime is
/// available to spawn on or the event cannot be serialized.
pub struct HttpCollectSink {
    client: Client,
    integration: Integration,
    tag_id: String,
}

impl HttpCollectSink {
    pub fn new(client: Client, integration: Integration, tag_id: &str) -> Self {
        Self {
            client,
            integration,
            tag_id: tag_id.to_string(),
        }
    }
}

impl EventSink for HttpCollectSink {
    fn send(&self, event: &AnalyticsEvent) -> Result<(), AppError> {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|_| AppError::Sink("no async runtime available".to_string()))?;

        let mut payload = serde_json::to_value(event)?;
        payload["tag_id"] = serde_json::Value::String(self.tag_id.clone());

        let client = self.client.clone();
        let integration = self.integration;
        let url = integration.collect_url();
        handle.spawn(async move {
            match client.post(url).json(&payload).send().await {
                Ok(resp) => debug!(
                    integration = %integration,
                    status = resp.status().as_u16(),
                    "event delivered"
                ),
                Err(e) => debug!(integration = %integration, error = %e, "event delivery failed"),
            }
        });
        Ok(())
    }
}

/// Factory producing [`HttpCollectSink`]s that share one HTTP client.
pub struct HttpSinkFactory {
    client: Client,
}

impl HttpSinkFactory {
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent("Lectern/0.1 (event-dispatch)")
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AppError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl SinkFactory for HttpSinkFactory {
    fn create(&self, integration: Integration, tag_id: &str) -> Arc<dyn EventSink> {
        Arc::new(HttpCollectSink::new(self.client.clone(), integration, tag_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_sink_without_runtime() {
        // Outside a runtime, delivery degrades to an error the dispatcher
        // will log, never a panic.
        let factory = HttpSinkFactory::new().unwrap();
        let sink = factory.create(Integration::AnalyticsSuite, "G-AB12CD34EF");
        let event = AnalyticsEvent::page_view("home", "/");
        let result = sink.send(&event);
        assert!(matches!(result, Err(AppError::Sink(_))));
    }

    #[tokio::test]
    async fn test_http_sink_spawns_inside_runtime() {
        let factory = HttpSinkFactory::new().unwrap();
        let sink = factory.create(Integration::SocialPixel, "42");
        let event = AnalyticsEvent::button_click("enroll", "Enroll Now");
        // Delivery itself is detached; send only reports spawn/serialize
        // problems.
        assert!(sink.send(&event).is_ok());
    }
}
