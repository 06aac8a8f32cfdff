//! The closed set of third-party tracking integrations.

use lectern_core::config::AnalyticsSettings;
use std::fmt;

/// One third-party tracking platform.
///
/// The set is fixed: adding a platform is a code change, not configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Integration {
    /// General-purpose analytics suite (measurement id `G-...`)
    AnalyticsSuite,
    /// Tag manager container (container id `GTM-...`)
    TagManager,
    /// Social advertising pixel
    SocialPixel,
    /// Professional-network insight tag
    NetworkInsight,
}

impl Integration {
    /// All integrations, in bootstrap order. Order carries no semantics:
    /// attempts are independent and fire-and-forget.
    pub const ALL: [Integration; 4] = [
        Integration::AnalyticsSuite,
        Integration::TagManager,
        Integration::SocialPixel,
        Integration::NetworkInsight,
    ];

    /// Stable name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Integration::AnalyticsSuite => "analytics-suite",
            Integration::TagManager => "tag-manager",
            Integration::SocialPixel => "social-pixel",
            Integration::NetworkInsight => "network-insight",
        }
    }

    /// Dense index for registry slot storage.
    pub(crate) fn index(self) -> usize {
        match self {
            Integration::AnalyticsSuite => 0,
            Integration::TagManager => 1,
            Integration::SocialPixel => 2,
            Integration::NetworkInsight => 3,
        }
    }

    /// Loader endpoint for this integration's bootstrap script.
    pub fn loader_url(&self, tag_id: &str) -> String {
        match self {
            Integration::AnalyticsSuite => {
                format!("https://www.googletagmanager.com/gtag/js?id={}", tag_id)
            }
            Integration::TagManager => {
                format!("https://www.googletagmanager.com/gtm.js?id={}", tag_id)
            }
            Integration::SocialPixel => {
                "https://connect.facebook.net/en_US/fbevents.js".to_string()
            }
            Integration::NetworkInsight => {
                "https://snap.licdn.com/li.lms-analytics/insight.min.js".to_string()
            }
        }
    }

    /// Endpoint events are delivered to once the integration is loaded.
    pub fn collect_url(&self) -> &'static str {
        match self {
            Integration::AnalyticsSuite => "https://www.google-analytics.com/g/collect",
            Integration::TagManager => "https://www.googletagmanager.com/collect",
            Integration::SocialPixel => "https://www.facebook.com/tr",
            Integration::NetworkInsight => "https://px.ads.linkedin.com/collect",
        }
    }

    /// Whether loading this integration fires an immediate page view.
    pub fn fires_initial_page_view(&self) -> bool {
        matches!(self, Integration::AnalyticsSuite | Integration::SocialPixel)
    }

    /// The configured identifier for this integration, if any.
    pub fn tag_id<'a>(&self, settings: &'a AnalyticsSettings) -> Option<&'a str> {
        match self {
            Integration::AnalyticsSuite => settings.analytics_suite_id.as_deref(),
            Integration::TagManager => settings.tag_manager_id.as_deref(),
            Integration::SocialPixel => settings.social_pixel_id.as_deref(),
            Integration::NetworkInsight => settings.network_insight_id.as_deref(),
        }
    }
}

impl fmt::Display for Integration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle of one integration. `Loaded` and `Failed` are terminal for the
/// process lifetime; there is no retry and no teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationState {
    NotAttempted,
    Attempting,
    Loaded,
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_variant() {
        assert_eq!(Integration::ALL.len(), 4);
        let indices: Vec<usize> = Integration::ALL.iter().map(|i| i.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_loader_url_interpolates_id() {
        let url = Integration::AnalyticsSuite.loader_url("G-AB12CD34EF");
        assert!(url.ends_with("id=G-AB12CD34EF"));
        let url = Integration::TagManager.loader_url("GTM-K7QZP2");
        assert!(url.contains("gtm.js"));
    }

    #[test]
    fn test_static_loader_urls() {
        // Pixel and insight loaders are static; the id is used at init time.
        assert!(!Integration::SocialPixel.loader_url("123").contains("123"));
        assert!(!Integration::NetworkInsight.loader_url("123").contains("123"));
    }

    #[test]
    fn test_initial_page_view_set() {
        assert!(Integration::AnalyticsSuite.fires_initial_page_view());
        assert!(Integration::SocialPixel.fires_initial_page_view());
        assert!(!Integration::TagManager.fires_initial_page_view());
        assert!(!Integration::NetworkInsight.fires_initial_page_view());
    }

    #[test]
    fn test_tag_id_selection() {
        let settings = AnalyticsSettings {
            analytics_suite_id: Some("G-1".to_string()),
            tag_manager_id: None,
            social_pixel_id: Some("42".to_string()),
            network_insight_id: None,
        };
        assert_eq!(Integration::AnalyticsSuite.tag_id(&settings), Some("G-1"));
        assert_eq!(Integration::TagManager.tag_id(&settings), None);
        assert_eq!(Integration::SocialPixel.tag_id(&settings), Some("42"));
    }
}
