//! Backend model types.

use serde::{Deserialize, Serialize};

/// Unique identifier for a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BackendId(pub i64);

impl BackendId {
    /// Create a new backend ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BackendId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A configured message backend.
///
/// One record per remote endpoint the inbox aggregates from. Previews refer
/// to backends by index into the repository's stable listing order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Backend {
    /// Unique identifier (None for unsaved backends).
    pub id: Option<BackendId>,
    /// Display label for the backend.
    pub label: String,
    /// Base URL of the backend's REST API.
    pub base_url: String,
    /// Creation timestamp as stored by the database (None until saved and
    /// reloaded).
    pub created_at: Option<String>,
}

impl Backend {
    /// Create a new empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend for the given base URL, deriving the label from the
    /// host portion when none is given.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        let label = host_of(base_url).unwrap_or(base_url).to_string();
        Self {
            label,
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }
}

/// Extract the host portion of an http(s) URL, without port or path.
fn host_of(base_url: &str) -> Option<&str> {
    let rest = base_url
        .strip_prefix("https://")
        .or_else(|| base_url.strip_prefix("http://"))?;
    let host = rest.split(['/', ':']).next()?;
    if host.is_empty() { None } else { Some(host) }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod backend_id_tests {
        use super::*;

        #[test]
        fn new() {
            let id = BackendId::new(42);
            assert_eq!(id.0, 42);
        }

        #[test]
        fn display() {
            let id = BackendId::new(123);
            assert_eq!(format!("{id}"), "123");
        }
    }

    mod backend_tests {
        use super::*;

        #[test]
        fn new_creates_empty() {
            let backend = Backend::new();
            assert!(backend.id.is_none());
            assert!(backend.label.is_empty());
            assert!(backend.base_url.is_empty());
            assert!(backend.created_at.is_none());
        }

        #[test]
        fn with_base_url_derives_label_from_host() {
            let backend = Backend::with_base_url("https://sms.example.com/api");
            assert_eq!(backend.label, "sms.example.com");
            assert_eq!(backend.base_url, "https://sms.example.com/api");
        }

        #[test]
        fn with_base_url_strips_port() {
            let backend = Backend::with_base_url("http://127.0.0.1:8080");
            assert_eq!(backend.label, "127.0.0.1");
        }

        #[test]
        fn with_base_url_keeps_unparseable_value_as_label() {
            let backend = Backend::with_base_url("not a url");
            assert_eq!(backend.label, "not a url");
        }
    }
}
