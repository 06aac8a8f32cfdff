//! The tracking facade.
//!
//! `Dispatcher` is what the rest of the application holds. Its contract is
//! strict: no method returns an error, panics, or blocks on delivery,
//! whatever state the integrations are in. With nothing loaded it degrades
//! to a local debug log.

use crate::registry::AnalyticsRegistry;
use lectern_core::events::AnalyticsEvent;
use std::sync::Arc;
use tracing::{debug, warn};

/// Never-failing event emission facade over the registry.
///
/// # Examples
///
/// ```
/// use lectern_analytics::{AnalyticsRegistry, Dispatcher};
/// use std::sync::Arc;
///
/// let registry = Arc::new(AnalyticsRegistry::new());
/// let dispatcher = Dispatcher::new(registry);
/// // Nothing is loaded; the call still completes.
/// dispatcher.track_button_click("enroll-hero", "Enroll Now");
/// ```
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<AnalyticsRegistry>,
}

impl Dispatcher {
    /// Facade over a bootstrapped registry.
    pub fn new(registry: Arc<AnalyticsRegistry>) -> Self {
        Self { registry }
    }

    /// Inert facade for contexts where bootstrap never ran.
    ///
    /// Every method is callable and does nothing. Warns once here, at
    /// acquisition time, not per call.
    pub fn disconnected() -> Self {
        warn!("tracking facade acquired without bootstrap; events will be dropped");
        Self {
            registry: Arc::new(AnalyticsRegistry::new()),
        }
    }

    /// Dispatches an event to every loaded integration.
    ///
    /// Per-integration failures are logged and skipped; the remaining
    /// integrations are still attempted. Identical events are never
    /// deduplicated: each call is an independent dispatch.
    pub fn track_event(&self, event: &AnalyticsEvent) {
        let sinks = self.registry.loaded_sinks();
        if sinks.is_empty() {
            debug!(action = %event.action, "no integrations loaded, dropping event");
            return;
        }
        for (integration, sink) in sinks {
            if let Err(e) = sink.send(event) {
                warn!(integration = %integration, error = %e, "event dispatch failed");
            }
        }
    }

    pub fn track_page_view(&self, page_name: &str, url: &str) {
        self.track_event(&AnalyticsEvent::page_view(page_name, url));
    }

    pub fn track_button_click(&self, button_id: &str, button_label: &str) {
        self.track_event(&AnalyticsEvent::button_click(button_id, button_label));
    }

    pub fn track_video_play(&self, video_id: &str, video_title: &str) {
        self.track_event(&AnalyticsEvent::video_play(video_id, video_title));
    }

    pub fn track_form_submit(&self, form_name: &str, form_type: &str) {
        self.track_event(&AnalyticsEvent::form_submit(form_name, form_type));
    }

    pub fn track_course_enrollment(&self, course_id: &str, course_title: &str, price: f64) {
        self.track_event(&AnalyticsEvent::course_enrollment(
            course_id,
            course_title,
            price,
        ));
    }

    pub fn track_download(&self, file_type: &str, file_name: &str) {
        self.track_event(&AnalyticsEvent::download(file_type, file_name));
    }

    pub fn track_social_share(&self, platform: &str, content_type: &str, content_id: &str) {
        self.track_event(&AnalyticsEvent::social_share(
            platform,
            content_type,
            content_id,
        ));
    }
}
