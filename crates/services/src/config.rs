use std::time::Duration;

/// Default pause on the submitted screen before moving to "my applications".
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_secs(3);

/// Tunables for the assessment flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowConfig {
    pub redirect_delay: Duration,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            redirect_delay: DEFAULT_REDIRECT_DELAY,
        }
    }
}

impl FlowConfig {
    #[must_use]
    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }
}
