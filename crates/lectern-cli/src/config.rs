use clap::{Parser, Subcommand};
use lectern_core::config::AnalyticsSettings;
use lectern_core::models::{DifficultyLevel, Track};
use std::path::PathBuf;

/// CLI configuration parsed from command line arguments and environment variables
#[derive(Parser, Debug)]
#[command(name = "lectern")]
#[command(
    author,
    version,
    about = "Catalog and analytics toolkit for the Lectern education platform"
)]
#[command(after_help = "Examples:
  lectern courses --category Risk
  lectern certificates --featured
  lectern show cert-ai-foundations
  lectern track page-view --name home --url /
  lectern stats")]
pub struct Config {
    /// Path to the catalog content file (TOML)
    #[arg(long, env = "LECTERN_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Analytics suite measurement id (G-...)
    #[arg(long, env = "ANALYTICS_SUITE_ID")]
    pub analytics_suite_id: Option<String>,

    /// Tag manager container id (GTM-...)
    #[arg(long, env = "TAG_MANAGER_ID")]
    pub tag_manager_id: Option<String>,

    /// Social pixel id
    #[arg(long, env = "SOCIAL_PIXEL_ID")]
    pub social_pixel_id: Option<String>,

    /// Professional-network insight partner id
    #[arg(long, env = "NETWORK_INSIGHT_ID")]
    pub network_insight_id: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Config {
    /// Collects the analytics identifiers into the settings struct the
    /// bootstrap consumes. Placeholder filtering happens downstream.
    pub fn analytics_settings(&self) -> AnalyticsSettings {
        AnalyticsSettings {
            analytics_suite_id: self.analytics_suite_id.clone(),
            tag_manager_id: self.tag_manager_id.clone(),
            social_pixel_id: self.social_pixel_id.clone(),
            network_insight_id: self.network_insight_id.clone(),
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List catalog courses
    #[command(after_help = "Examples:
  lectern courses
  lectern courses --category Risk --level beginner")]
    Courses {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by difficulty level
        #[arg(short, long)]
        level: Option<DifficultyLevel>,
    },
    /// List certificate programs
    Certificates {
        /// Filter by subject track
        #[arg(short, long)]
        track: Option<Track>,
        /// Only featured programs
        #[arg(long)]
        featured: bool,
    },
    /// Show one certificate: constituent courses and bundle pricing
    #[command(after_help = "Example: lectern show cert-ai-foundations")]
    Show {
        /// Certificate id
        certificate_id: String,
    },
    /// Dispatch one tracking event through the bootstrapped integrations
    Track {
        #[command(subcommand)]
        event: TrackCommand,
    },
    /// Show catalog statistics
    Stats,
}

/// One canonical tracking event per variant.
#[derive(Subcommand, Debug)]
pub enum TrackCommand {
    /// A page render
    PageView {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "/")]
        url: String,
    },
    /// A button click
    ButtonClick {
        #[arg(long)]
        id: String,
        #[arg(long)]
        label: String,
    },
    /// A video playback start
    VideoPlay {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: String,
    },
    /// A form submission
    FormSubmit {
        #[arg(long)]
        name: String,
        #[arg(long = "type")]
        form_type: String,
    },
    /// A course enrollment; title and price come from the catalog
    Enrollment {
        #[arg(long)]
        course_id: String,
    },
    /// An asset download
    Download {
        #[arg(long = "type")]
        file_type: String,
        #[arg(long)]
        name: String,
    },
    /// A social share
    SocialShare {
        #[arg(long)]
        platform: String,
        #[arg(long)]
        content_type: String,
        #[arg(long)]
        content_id: String,
    },
}
