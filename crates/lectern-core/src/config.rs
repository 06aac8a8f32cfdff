//! Configuration types: analytics identifiers and catalog content loading.
//!
//! Catalog tables are authored in a TOML content file with `[[courses]]` and
//! `[[certificates]]` arrays. Analytics identifiers come from CLI flags or
//! environment variables; a value that still looks like a template sample is
//! treated as absent.

use crate::error::AppError;
use crate::models::{Certificate, Course};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Substring that marks a configuration value as a template sample.
pub const FILLER_MARKER: &str = "XXXX";

/// Returns true if `id` is a placeholder rather than a real account
/// identifier.
///
/// Three shapes count as placeholders: the empty string, a string that is one
/// repeated character (e.g. `"0000000000"`), and anything containing the
/// filler marker `XXXX`. Placeholders silently skip integration bootstrap.
pub fn is_placeholder(id: &str) -> bool {
    if id.is_empty() {
        return true;
    }
    if id.contains(FILLER_MARKER) {
        return true;
    }
    let mut chars = id.chars();
    let first = chars.next().unwrap_or_default();
    chars.all(|c| c == first)
}

/// Identifiers for the four third-party tracking integrations.
///
/// `None` and placeholder values are equivalent: the integration is skipped
/// without a warning.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsSettings {
    /// Analytics suite measurement id (e.g. `G-...`)
    pub analytics_suite_id: Option<String>,
    /// Tag manager container id (e.g. `GTM-...`)
    pub tag_manager_id: Option<String>,
    /// Social pixel id
    pub social_pixel_id: Option<String>,
    /// Professional-network insight partner id
    pub network_insight_id: Option<String>,
}

impl AnalyticsSettings {
    /// Number of integrations with a usable (non-placeholder) identifier.
    pub fn configured_count(&self) -> usize {
        [
            &self.analytics_suite_id,
            &self.tag_manager_id,
            &self.social_pixel_id,
            &self.network_insight_id,
        ]
        .into_iter()
        .filter(|id| matches!(id, Some(v) if !is_placeholder(v)))
        .count()
    }
}

/// Parsed catalog content file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
}

/// Loads and parses a catalog content file.
pub fn load_catalog(path: &Path) -> Result<CatalogFile, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let catalog: CatalogFile = toml::from_str(&raw)?;
    tracing::debug!(
        courses = catalog.courses.len(),
        certificates = catalog.certificates.len(),
        "catalog file loaded"
    );
    Ok(catalog)
}

/// Default catalog location under the user config directory:
/// `~/.config/lectern/catalog.toml` on Linux.
pub fn default_catalog_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lectern").join("catalog.toml"))
}
