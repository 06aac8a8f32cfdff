//! Catalog index over the static course and certificate tables.
//!
//! Tables keep declaration order; id lookups go through side maps. Unresolved
//! foreign keys (a certificate naming a course that does not exist, or a
//! dangling related-course id) degrade to omission: content edits that leave
//! a reference dangling must never take a page down.

use lectern_core::error::AppError;
use lectern_core::models::{Certificate, Course};
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

/// Derived pricing for one certificate bundle.
///
/// Always recomputed from the current tables, never stored, so it cannot go
/// stale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BundlePricing {
    /// Sum of à-la-carte prices of the resolvable constituent courses
    pub individual_total: f64,
    /// `individual_total` minus the bundled certificate price
    pub savings: f64,
    /// Savings as a rounded percentage of `individual_total`; 0 when the
    /// certificate has no resolvable courses (division guard)
    pub savings_percent: i64,
}

/// Aggregate counts over the catalog tables.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CatalogStats {
    pub total_courses: usize,
    pub total_certificates: usize,
    pub featured_certificates: usize,
    /// Courses referenced by at least one certificate
    pub bundled_courses: usize,
}

/// Read-only index over the course and certificate tables.
///
/// # Examples
///
/// ```
/// use lectern_catalog::CatalogIndex;
///
/// let index = CatalogIndex::new(Vec::new(), Vec::new());
/// assert!(index.all_courses().is_empty());
/// assert!(index.courses_for_certificate("anything").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    courses: Vec<Course>,
    certificates: Vec<Certificate>,
    course_by_id: HashMap<String, usize>,
    certificate_by_id: HashMap<String, usize>,
}

impl CatalogIndex {
    /// Builds the index from the two static tables.
    ///
    /// Duplicate ids within a table are an authoring mistake: the first
    /// declaration wins, later ones are dropped with a warning. Construction
    /// never fails.
    pub fn new(courses: Vec<Course>, certificates: Vec<Certificate>) -> Self {
        let mut kept_courses = Vec::with_capacity(courses.len());
        let mut course_by_id = HashMap::with_capacity(courses.len());
        for course in courses {
            if course_by_id.contains_key(&course.id) {
                warn!(id = %course.id, "duplicate course id, keeping first declaration");
                continue;
            }
            course_by_id.insert(course.id.clone(), kept_courses.len());
            kept_courses.push(course);
        }

        let mut kept_certificates = Vec::with_capacity(certificates.len());
        let mut certificate_by_id = HashMap::with_capacity(certificates.len());
        for certificate in certificates {
            if certificate_by_id.contains_key(&certificate.id) {
                warn!(id = %certificate.id, "duplicate certificate id, keeping first declaration");
                continue;
            }
            certificate_by_id.insert(certificate.id.clone(), kept_certificates.len());
            kept_certificates.push(certificate);
        }

        Self {
            courses: kept_courses,
            certificates: kept_certificates,
            course_by_id,
            certificate_by_id,
        }
    }

    /// All courses in declaration order.
    pub fn all_courses(&self) -> &[Course] {
        &self.courses
    }

    /// All certificates in declaration order.
    pub fn all_certificates(&self) -> &[Certificate] {
        &self.certificates
    }

    /// Point lookup for a course.
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.course_by_id.get(id).map(|&i| &self.courses[i])
    }

    /// Point lookup for a certificate.
    pub fn certificate(&self, id: &str) -> Option<&Certificate> {
        self.certificate_by_id
            .get(id)
            .map(|&i| &self.certificates[i])
    }

    /// Point lookup that surfaces a typed error for CLI use.
    pub fn require_certificate(&self, id: &str) -> Result<&Certificate, AppError> {
        self.certificate(id)
            .ok_or_else(|| AppError::CertificateNotFound(id.to_string()))
    }

    /// Resolves a certificate's constituent courses in curriculum order.
    ///
    /// An unknown certificate id yields an empty vec, not an error. Ids in
    /// `course_ids` that do not resolve are omitted; the declared order of
    /// the remaining ids is preserved exactly.
    pub fn courses_for_certificate(&self, certificate_id: &str) -> Vec<&Course> {
        let Some(certificate) = self.certificate(certificate_id) else {
            return Vec::new();
        };
        certificate
            .course_ids
            .iter()
            .filter_map(|id| self.course(id))
            .collect()
    }

    /// Every certificate whose bundle contains the given course.
    ///
    /// Full scan of the certificate table in declaration order.
    pub fn certificates_for_course(&self, course_id: &str) -> Vec<&Certificate> {
        self.certificates
            .iter()
            .filter(|certificate| certificate.course_ids.iter().any(|id| id == course_id))
            .collect()
    }

    /// Resolves a course's related-course references, dropping dangling ids
    /// and the course's own id.
    pub fn related_courses(&self, course_id: &str) -> Vec<&Course> {
        let Some(course) = self.course(course_id) else {
            return Vec::new();
        };
        course
            .related_course_ids
            .iter()
            .filter(|id| id.as_str() != course_id)
            .filter_map(|id| self.course(id))
            .collect()
    }

    /// Computes bundle pricing for a certificate.
    ///
    /// Unknown ids behave like a certificate with no resolvable courses:
    /// all-zero pricing, never an error.
    pub fn bundle_pricing(&self, certificate_id: &str) -> BundlePricing {
        let Some(certificate) = self.certificate(certificate_id) else {
            return BundlePricing {
                individual_total: 0.0,
                savings: 0.0,
                savings_percent: 0,
            };
        };

        let individual_total: f64 = self
            .courses_for_certificate(certificate_id)
            .iter()
            .map(|course| course.price)
            .sum();
        let savings = individual_total - certificate.price;
        let savings_percent = if individual_total == 0.0 {
            0
        } else {
            (savings / individual_total * 100.0).round() as i64
        };

        BundlePricing {
            individual_total,
            savings,
            savings_percent,
        }
    }

    /// Aggregate counts for the `stats` command.
    pub fn stats(&self) -> CatalogStats {
        let bundled_courses = self
            .courses
            .iter()
            .filter(|course| !self.certificates_for_course(&course.id).is_empty())
            .count();

        CatalogStats {
            total_courses: self.courses.len(),
            total_certificates: self.certificates.len(),
            featured_certificates: self.certificates.iter().filter(|c| c.featured).count(),
            bundled_courses,
        }
    }
}
