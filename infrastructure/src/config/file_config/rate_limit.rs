//! Rate limit configuration from TOML (`[rate_limit]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw rate limit configuration from TOML
///
/// Requests under `/api/` are counted per client address in fixed windows.
///
/// # Example
///
/// ```toml
/// [rate_limit]
/// enabled = true
/// window_ms = 900000      # 15 minutes
/// max_requests = 100
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRateLimitConfig {
    pub enabled: bool,
    /// Window length in milliseconds (`RATE_LIMIT_WINDOW_MS`)
    pub window_ms: u64,
    /// Requests allowed per client and window (`RATE_LIMIT_MAX_REQUESTS`)
    pub max_requests: u32,
}

impl Default for FileRateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            window_ms: 15 * 60 * 1000,
            max_requests: 100,
        }
    }
}

impl FileRateLimitConfig {
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_is_fifteen_minutes() {
        assert_eq!(FileRateLimitConfig::default().window(), Duration::from_secs(900));
    }
}
