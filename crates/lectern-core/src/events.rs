//! Analytics event types and canonical constructors.
//!
//! Events are transient: constructed, dispatched, and dropped. Categories are
//! a closed enum so a malformed category is unrepresentable, and every
//! convenience constructor produces the one canonical shape for its
//! interaction kind.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Separator used when assembling an event label from identifying fields.
pub const LABEL_DELIMITER: &str = ":";

/// Closed set of event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    PageView,
    Engagement,
    Video,
    Form,
    Ecommerce,
    Download,
    Social,
}

impl EventCategory {
    /// Wire name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::PageView => "page_view",
            EventCategory::Engagement => "engagement",
            EventCategory::Video => "video",
            EventCategory::Form => "form",
            EventCategory::Ecommerce => "ecommerce",
            EventCategory::Download => "download",
            EventCategory::Social => "social",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tracking event, dispatched to every loaded integration.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsEvent {
    pub category: EventCategory,
    pub action: String,
    pub label: Option<String>,
    /// Numeric payload; only enrollment events carry one (the course price)
    pub value: Option<f64>,
    /// True for events not caused by direct user interaction
    pub non_interaction: bool,
    pub timestamp: DateTime<Utc>,
}

impl AnalyticsEvent {
    /// Builds an event with the current timestamp and no label or value.
    pub fn new(category: EventCategory, action: impl Into<String>) -> Self {
        Self {
            category,
            action: action.into(),
            label: None,
            value: None,
            non_interaction: false,
            timestamp: Utc::now(),
        }
    }

    fn with_label(mut self, parts: &[&str]) -> Self {
        self.label = Some(parts.join(LABEL_DELIMITER));
        self
    }

    /// A page was rendered. Marked non-interaction: the user did not act.
    pub fn page_view(page_name: &str, url: &str) -> Self {
        let mut event = Self::new(EventCategory::PageView, "page_view").with_label(&[page_name, url]);
        event.non_interaction = true;
        event
    }

    /// A button or call-to-action was clicked.
    pub fn button_click(button_id: &str, button_label: &str) -> Self {
        Self::new(EventCategory::Engagement, "button_click").with_label(&[button_id, button_label])
    }

    /// An embedded video started playing.
    pub fn video_play(video_id: &str, video_title: &str) -> Self {
        Self::new(EventCategory::Video, "video_play").with_label(&[video_id, video_title])
    }

    /// A form was submitted.
    pub fn form_submit(form_name: &str, form_type: &str) -> Self {
        Self::new(EventCategory::Form, "form_submit").with_label(&[form_name, form_type])
    }

    /// An enrollment button was used. The only event carrying a value.
    pub fn course_enrollment(course_id: &str, course_title: &str, price: f64) -> Self {
        let mut event = Self::new(EventCategory::Ecommerce, "course_enrollment")
            .with_label(&[course_id, course_title]);
        event.value = Some(price);
        event
    }

    /// A downloadable asset was fetched.
    pub fn download(file_type: &str, file_name: &str) -> Self {
        Self::new(EventCategory::Download, "download").with_label(&[file_type, file_name])
    }

    /// Content was shared to a social platform.
    pub fn social_share(platform: &str, content_type: &str, content_id: &str) -> Self {
        Self::new(EventCategory::Social, "social_share")
            .with_label(&[platform, content_type, content_id])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_view_shape() {
        let event = AnalyticsEvent::page_view("home", "/");
        assert_eq!(event.category, EventCategory::PageView);
        assert_eq!(event.action, "page_view");
        assert_eq!(event.label.as_deref(), Some("home:/"));
        assert!(event.value.is_none());
        assert!(event.non_interaction);
    }

    #[test]
    fn test_button_click_label_join() {
        let event = AnalyticsEvent::button_click("enroll-hero", "Enroll Now");
        assert_eq!(event.label.as_deref(), Some("enroll-hero:Enroll Now"));
        assert!(!event.non_interaction);
    }

    #[test]
    fn test_enrollment_carries_price() {
        let event = AnalyticsEvent::course_enrollment("c1", "Intro to Risk", 499.0);
        assert_eq!(event.category, EventCategory::Ecommerce);
        assert_eq!(event.value, Some(499.0));
        assert_eq!(event.label.as_deref(), Some("c1:Intro to Risk"));
    }

    #[test]
    fn test_only_enrollment_has_value() {
        assert!(AnalyticsEvent::page_view("a", "b").value.is_none());
        assert!(AnalyticsEvent::button_click("a", "b").value.is_none());
        assert!(AnalyticsEvent::video_play("a", "b").value.is_none());
        assert!(AnalyticsEvent::form_submit("a", "b").value.is_none());
        assert!(AnalyticsEvent::download("a", "b").value.is_none());
        assert!(AnalyticsEvent::social_share("a", "b", "c").value.is_none());
    }

    #[test]
    fn test_social_share_three_part_label() {
        let event = AnalyticsEvent::social_share("linkedin", "course", "c1");
        assert_eq!(event.label.as_deref(), Some("linkedin:course:c1"));
    }

    #[test]
    fn test_category_wire_names() {
        assert_eq!(EventCategory::PageView.as_str(), "page_view");
        assert_eq!(EventCategory::Ecommerce.to_string(), "ecommerce");
    }

    #[test]
    fn test_event_serializes_to_json() {
        let event = AnalyticsEvent::download("pdf", "syllabus");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["category"], "download");
        assert_eq!(json["label"], "pdf:syllabus");
        assert_eq!(json["value"], serde_json::Value::Null);
    }
}
