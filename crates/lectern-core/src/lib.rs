//! Lectern Core - Domain types, events, error handling, and configuration.

pub mod config;
pub mod error;
pub mod events;
pub mod models;

pub use config::{
    default_catalog_path, is_placeholder, load_catalog, AnalyticsSettings, CatalogFile,
};
pub use error::AppError;
pub use events::{AnalyticsEvent, EventCategory};
pub use models::{
    Certificate, CertificateFormat, Course, CurriculumModule, DifficultyLevel, Faq, Testimonial,
    Track,
};
