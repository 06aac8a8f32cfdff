//! Script-fetch seam for integration bootstrap.
//!
//! The browser's `<script src=...>` load becomes an explicit future per
//! integration. The trait boundary exists so bootstrap logic can be exercised
//! without the network.

use futures::future::BoxFuture;
use lectern_core::error::AppError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Fetches an integration's loader script.
///
/// Implementations must be cheap to clone behind an `Arc`: one loader serves
/// all four integrations concurrently.
pub trait ScriptLoader: Send + Sync + 'static {
    /// Resolves once the script endpoint answered. `Ok(())` corresponds to
    /// the script's onload signal, `Err` to its onerror signal.
    fn fetch(&self, url: &str) -> BoxFuture<'static, Result<(), AppError>>;
}

/// Production loader backed by `reqwest`.
#[derive(Clone)]
pub struct HttpScriptLoader {
    client: Client,
}

impl HttpScriptLoader {
    /// Creates a loader with the standard timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Client` if the HTTP client cannot be built.
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent("Lectern/0.1 (analytics-bootstrap)")
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AppError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl ScriptLoader for HttpScriptLoader {
    fn fetch(&self, url: &str) -> BoxFuture<'static, Result<(), AppError>> {
        let client = self.client.clone();
        let url = url.to_string();
        Box::pin(async move {
            let parsed = Url::parse(&url).map_err(|_| AppError::InvalidUrl(url.clone()))?;
            let resp = client
                .get(parsed)
                .send()
                .await
                .map_err(|e| AppError::Client(e.to_string()))?;
            let status = resp.status();
            if !status.is_success() {
                return Err(AppError::Client(format!(
                    "HTTP {} from {}",
                    status.as_u16(),
                    url
                )));
            }
            Ok(())
        })
    }
}
