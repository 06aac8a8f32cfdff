use thiserror::Error;

/// Application-wide error types.
///
/// This enum represents all possible errors that can occur across the Lectern
/// crates. It uses the `thiserror` crate for ergonomic error handling and
/// automatic conversion from underlying library errors.
///
/// Catalog relationship queries never produce errors: unresolved foreign keys
/// degrade to omission by design. Only point lookups and I/O surface here.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration file could not be read.
    #[error("Configuration I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("Configuration error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// URL parsing failed, typically a malformed loader or collection endpoint.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP request to an external endpoint failed.
    #[error("API Client error: {0}")]
    Client(String),

    /// A per-integration event sink rejected an event.
    ///
    /// Never propagated out of the dispatcher; logged and swallowed there.
    #[error("Analytics sink error: {0}")]
    Sink(String),

    /// Point lookup for a course id found nothing.
    #[error("Course not found: {0}")]
    CourseNotFound(String),

    /// Point lookup for a certificate id found nothing.
    #[error("Certificate not found: {0}")]
    CertificateNotFound(String),

    /// JSON serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic application error for cases not covered by specific variants.
    ///
    /// Use this sparingly - prefer creating specific error variants
    /// for better error handling and debugging.
    #[error("Error: {0}")]
    Generic(String),
}

impl AppError {
    /// Returns a user-friendly error message suitable for CLI output.
    pub fn user_message(&self) -> String {
        match self {
            AppError::ConfigIo(e) => {
                format!(
                    "Cannot read catalog file: {}\n   Check the --catalog path or LECTERN_CATALOG.",
                    e
                )
            }
            AppError::ConfigParse(e) => {
                format!(
                    "Catalog file is not valid TOML: {}\n   Fix the content file and retry.",
                    e
                )
            }
            AppError::Client(msg) => {
                if msg.contains("timeout") || msg.contains("timed out") {
                    "Request timed out. The tracking endpoint may be slow or unreachable."
                        .to_string()
                } else if msg.contains("connect") {
                    format!(
                        "Cannot reach endpoint: {}\n   Check your internet connection.",
                        msg
                    )
                } else {
                    format!("API error: {}", msg)
                }
            }
            AppError::CourseNotFound(id) => {
                format!("No course with id '{}'.\n   Try: lectern courses", id)
            }
            AppError::CertificateNotFound(id) => {
                format!(
                    "No certificate with id '{}'.\n   Try: lectern certificates",
                    id
                )
            }
            _ => self.to_string(),
        }
    }

    /// Returns true if this error is transient and worth retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Client(_) | AppError::Sink(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::CertificateNotFound("cert-ai".to_string());
        assert_eq!(err.to_string(), "Certificate not found: cert-ai");
    }

    #[test]
    fn test_generic_error() {
        let err = AppError::Generic("Something went wrong".to_string());
        assert_eq!(err.to_string(), "Error: Something went wrong");
    }

    #[test]
    fn test_user_message_course_not_found() {
        let err = AppError::CourseNotFound("c-missing".to_string());
        let msg = err.user_message();
        assert!(msg.contains("c-missing"));
        assert!(msg.contains("lectern courses"));
    }

    #[test]
    fn test_user_message_client_timeout() {
        let err = AppError::Client("request timed out".to_string());
        assert!(err.user_message().contains("timed out"));
    }

    #[test]
    fn test_error_from_serde() {
        let json = "{ invalid json }";
        let result: Result<serde_json::Value, _> = serde_json::from_str(json);
        let serde_err = result.unwrap_err();
        let app_err: AppError = serde_err.into();
        assert!(matches!(app_err, AppError::Serialization(_)));
    }

    #[test]
    fn test_error_from_toml() {
        let result: Result<toml::Value, _> = toml::from_str("not [ valid");
        let app_err: AppError = result.unwrap_err().into();
        assert!(matches!(app_err, AppError::ConfigParse(_)));
        assert!(app_err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_is_retryable() {
        assert!(AppError::Client("reset".to_string()).is_retryable());
        assert!(AppError::Sink("closed".to_string()).is_retryable());
        assert!(!AppError::CourseNotFound("x".to_string()).is_retryable());
        assert!(!AppError::InvalidUrl("bad".to_string()).is_retryable());
    }
}
