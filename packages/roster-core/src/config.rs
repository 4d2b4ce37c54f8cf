//! Service configuration.

/// Runtime configuration for the roster service.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    /// Timeout for reading a request body in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 5000,
        }
    }
}
