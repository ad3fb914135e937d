//! Backend validation.

use super::model::Backend;

/// Validation error for backend configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Backend label is empty.
    EmptyLabel,
    /// Base URL is empty.
    EmptyBaseUrl,
    /// Base URL format is invalid.
    InvalidBaseUrl,
}

impl ValidationError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptyLabel => "Backend label is required",
            Self::EmptyBaseUrl => "Base URL is required",
            Self::InvalidBaseUrl => "Base URL must be an http(s) URL with a host",
        }
    }

    /// Get the field name this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyLabel => "label",
            Self::EmptyBaseUrl | Self::InvalidBaseUrl => "base_url",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating a backend.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Validate a backend configuration.
///
/// Returns `Ok(())` if valid, or `Err(Vec<ValidationError>)` with all errors.
///
/// # Errors
///
/// Returns a vector of `ValidationError` if any fields are invalid.
pub fn validate_backend(backend: &Backend) -> ValidationResult {
    let mut errors = Vec::new();

    if backend.label.trim().is_empty() {
        errors.push(ValidationError::EmptyLabel);
    }

    if backend.base_url.trim().is_empty() {
        errors.push(ValidationError::EmptyBaseUrl);
    } else if !is_valid_base_url(&backend.base_url) {
        errors.push(ValidationError::InvalidBaseUrl);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Basic base-URL validation: http(s) scheme, non-empty host, no whitespace.
fn is_valid_base_url(base_url: &str) -> bool {
    let base_url = base_url.trim();

    if base_url.chars().any(char::is_whitespace) {
        return false;
    }

    let Some(rest) = base_url
        .strip_prefix("https://")
        .or_else(|| base_url.strip_prefix("http://"))
    else {
        return false;
    };

    let host = rest.split(['/', ':']).next().unwrap_or_default();
    !host.is_empty()
}
