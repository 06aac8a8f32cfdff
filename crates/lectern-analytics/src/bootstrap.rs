//! One-shot, fire-and-forget integration initialization.
//!
//! For every integration with a usable identifier, bootstrap performs the
//! `NotAttempted -> Attempting` transition and detaches a task that fetches
//! the loader script. Tasks are independent: a slow or failing integration
//! never delays another, and nothing awaits them on the startup path.

use crate::integration::Integration;
use crate::loader::ScriptLoader;
use crate::registry::AnalyticsRegistry;
use crate::sink::SinkFactory;
use lectern_core::config::{is_placeholder, AnalyticsSettings};
use lectern_core::events::AnalyticsEvent;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Page identity used for the initial page view some integrations fire on
/// load.
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    pub page_name: String,
    pub page_url: String,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            page_name: "app".to_string(),
            page_url: "/".to_string(),
        }
    }
}

/// Attempts to initialize every configured integration exactly once.
///
/// Skips are silent: an absent or placeholder identifier means the
/// integration was never meant to run, and an already-attempted slot means a
/// previous bootstrap got there first. Each remaining integration gets one
/// detached fetch task; its outcome lands in the registry as `Loaded` (sink
/// installed, initial page view fired where required) or `Failed` (one
/// warning, no retry).
///
/// The returned handles are already running and callers normally drop them;
/// they exist so tests can await completion. Must be called from within a
/// tokio runtime.
pub fn run_bootstrap(
    registry: &Arc<AnalyticsRegistry>,
    settings: &AnalyticsSettings,
    loader: &Arc<dyn ScriptLoader>,
    sinks: &Arc<dyn SinkFactory>,
    options: &BootstrapOptions,
) -> Vec<JoinHandle<()>> {
    let mut handles = Vec::new();

    for integration in Integration::ALL {
        let Some(tag_id) = integration.tag_id(settings) else {
            continue;
        };
        if is_placeholder(tag_id) {
            debug!(integration = %integration, "placeholder identifier, skipping");
            continue;
        }
        if !registry.begin_attempt(integration) {
            debug!(integration = %integration, "already attempted, skipping");
            continue;
        }

        let url = integration.loader_url(tag_id);
        let tag_id = tag_id.to_string();
        let registry = Arc::clone(registry);
        let loader = Arc::clone(loader);
        let sinks = Arc::clone(sinks);
        let options = options.clone();

        handles.push(tokio::spawn(async move {
            match loader.fetch(&url).await {
                Ok(()) => {
                    let sink = sinks.create(integration, &tag_id);
                    if integration.fires_initial_page_view() {
                        let event =
                            AnalyticsEvent::page_view(&options.page_name, &options.page_url);
                        if let Err(e) = sink.send(&event) {
                            warn!(integration = %integration, error = %e, "initial page view failed");
                        }
                    }
                    registry.mark_loaded(integration, sink);
                    info!(integration = %integration, "integration loaded");
                }
                Err(e) => {
                    warn!(integration = %integration, error = %e, "integration failed to load");
                    registry.mark_failed(integration);
                }
            }
        }));
    }

    handles
}
