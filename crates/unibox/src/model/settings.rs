//! Settings model.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Application settings that persist across sessions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AppSettings {
    /// Seconds between poll cycles.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

const fn default_poll_interval_secs() -> u64 {
    5
}

impl AppSettings {
    /// Poll interval as a duration. Clamped to at least one second so a
    /// hand-edited settings file can't spin the timer.
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_secs(if self.poll_interval_secs == 0 {
            1
        } else {
            self.poll_interval_secs
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_interval_is_five_seconds() {
        assert_eq!(AppSettings::default().poll_interval(), Duration::from_secs(5));
    }

    #[test]
    fn missing_field_falls_back_to_default() {
        let settings: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.poll_interval_secs, 5);
    }

    #[test]
    fn zero_interval_is_clamped() {
        let settings = AppSettings {
            poll_interval_secs: 0,
        };
        assert_eq!(settings.poll_interval(), Duration::from_secs(1));
    }
}
