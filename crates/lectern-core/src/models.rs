//! Catalog entity types.
//!
//! `Course` and `Certificate` are the two static tables the Catalog Index is
//! built from. Both are authored externally (TOML content files) and treated
//! as immutable for the lifetime of the process.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty tier of a single course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyLevel::Beginner => write!(f, "Beginner"),
            DifficultyLevel::Intermediate => write!(f, "Intermediate"),
            DifficultyLevel::Advanced => write!(f, "Advanced"),
        }
    }
}

impl FromStr for DifficultyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Ok(DifficultyLevel::Beginner),
            "intermediate" => Ok(DifficultyLevel::Intermediate),
            "advanced" => Ok(DifficultyLevel::Advanced),
            other => Err(format!("unknown difficulty level: {}", other)),
        }
    }
}

/// Subject track a certificate program belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Track {
    #[serde(rename = "AI")]
    Ai,
    Risk,
    Quant,
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Track::Ai => write!(f, "AI"),
            Track::Risk => write!(f, "Risk"),
            Track::Quant => write!(f, "Quant"),
        }
    }
}

impl FromStr for Track {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ai" => Ok(Track::Ai),
            "risk" => Ok(Track::Risk),
            "quant" => Ok(Track::Quant),
            other => Err(format!("unknown track: {}", other)),
        }
    }
}

/// Delivery format of a certificate program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CertificateFormat {
    #[serde(rename = "Self-Paced")]
    SelfPaced,
    #[serde(rename = "Cohort-Based")]
    CohortBased,
}

impl fmt::Display for CertificateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CertificateFormat::SelfPaced => write!(f, "Self-Paced"),
            CertificateFormat::CohortBased => write!(f, "Cohort-Based"),
        }
    }
}

/// One unit of a course curriculum, in teaching order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurriculumModule {
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// A frequently-asked question attached to a course page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// A student testimonial.
///
/// Source content uses `quote`/`text` and `author`/`name` interchangeably;
/// the aliases normalize both spellings to one canonical schema at the
/// deserialization boundary so downstream code never sees the ambiguity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(alias = "text")]
    pub quote: String,
    #[serde(alias = "name")]
    pub author: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// A single course in the catalog.
///
/// `id` must be unique across the course table. `related_course_ids` may
/// contain dangling references; they are filtered out at query time rather
/// than rejected at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier for the course
    pub id: String,
    /// Human-readable course title
    pub title: String,
    pub description: String,
    /// List price in whole currency units, non-negative
    pub price: f64,
    /// Free-form duration text, e.g. "6 weeks"
    pub duration: String,
    pub level: DifficultyLevel,
    pub module_count: u32,
    pub instructor: String,
    /// Average rating on a 0-5 scale
    pub rating: f64,
    pub student_count: u32,
    pub category: String,
    #[serde(default)]
    pub curriculum: Vec<CurriculumModule>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub related_course_ids: Vec<String>,
}

/// A certificate program bundling several courses.
///
/// `course_ids` is ordered: it is the curriculum sequence of the program and
/// must be preserved exactly by anything that resolves it. Ids that do not
/// resolve to a `Course` are dropped silently by the query layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    /// Unique identifier for the certificate program
    pub id: String,
    pub title: String,
    pub description: String,
    pub track: Track,
    /// Free-form duration text, e.g. "6 months"
    pub duration: String,
    pub format: CertificateFormat,
    /// Bundled price in whole currency units
    pub price: f64,
    /// Constituent course ids in curriculum order
    pub course_ids: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub outcomes: Vec<String>,
    #[serde(default)]
    pub recognized_by: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_level_round_trip() {
        assert_eq!(
            "intermediate".parse::<DifficultyLevel>().unwrap(),
            DifficultyLevel::Intermediate
        );
        assert_eq!(DifficultyLevel::Advanced.to_string(), "Advanced");
    }

    #[test]
    fn test_difficulty_level_unknown() {
        assert!("expert".parse::<DifficultyLevel>().is_err());
    }

    #[test]
    fn test_track_parse_case_insensitive() {
        assert_eq!("AI".parse::<Track>().unwrap(), Track::Ai);
        assert_eq!("quant".parse::<Track>().unwrap(), Track::Quant);
    }

    #[test]
    fn test_certificate_format_serde_rename() {
        let json = r#""Self-Paced""#;
        let format: CertificateFormat = serde_json::from_str(json).unwrap();
        assert_eq!(format, CertificateFormat::SelfPaced);
        assert_eq!(
            serde_json::to_string(&CertificateFormat::CohortBased).unwrap(),
            r#""Cohort-Based""#
        );
    }

    #[test]
    fn test_testimonial_canonical_fields() {
        let json = r#"{"quote": "Great course", "author": "Ada"}"#;
        let t: Testimonial = serde_json::from_str(json).unwrap();
        assert_eq!(t.quote, "Great course");
        assert_eq!(t.author, "Ada");
        assert!(t.role.is_none());
    }

    #[test]
    fn test_testimonial_alias_fields() {
        // Legacy content uses text/name instead of quote/author.
        let json = r#"{"text": "Changed my career", "name": "Grace", "role": "Analyst"}"#;
        let t: Testimonial = serde_json::from_str(json).unwrap();
        assert_eq!(t.quote, "Changed my career");
        assert_eq!(t.author, "Grace");
        assert_eq!(t.role.as_deref(), Some("Analyst"));
    }

    #[test]
    fn test_course_optional_fields_default() {
        let json = r#"{
            "id": "c1",
            "title": "Intro to Risk",
            "description": "Fundamentals",
            "price": 499.0,
            "duration": "6 weeks",
            "level": "Beginner",
            "module_count": 8,
            "instructor": "J. Doe",
            "rating": 4.7,
            "student_count": 1200,
            "category": "Risk"
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert!(course.curriculum.is_empty());
        assert!(course.faqs.is_empty());
        assert!(course.related_course_ids.is_empty());
    }

    #[test]
    fn test_certificate_deserialization() {
        let json = r#"{
            "id": "cert-1",
            "title": "AI Certificate",
            "description": "Program",
            "track": "AI",
            "duration": "6 months",
            "format": "Cohort-Based",
            "price": 2499.0,
            "course_ids": ["c1", "c2"],
            "featured": true
        }"#;
        let cert: Certificate = serde_json::from_str(json).unwrap();
        assert_eq!(cert.track, Track::Ai);
        assert_eq!(cert.course_ids, vec!["c1", "c2"]);
        assert!(cert.featured);
        assert!(cert.outcomes.is_empty());
    }
}
