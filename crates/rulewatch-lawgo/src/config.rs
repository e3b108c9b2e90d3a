//! Transport configuration

use rulewatch_core_types::Sensitive;
use std::time::Duration;

pub const LAW_SEARCH_URL: &str = "https://www.law.go.kr/DRF/lawSearch.do";
pub const LAW_SERVICE_URL: &str = "https://www.law.go.kr/DRF/lawService.do";
pub const ADMRUL_TARGET: &str = "admrul";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_ATTEMPTS: u32 = 4;

/// Exponential backoff with uniform jitter:
/// `base · 2^(attempt−1) + U[0, jitter)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackoffPolicy {
    pub base: Duration,
    pub jitter: Duration,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(600),
            jitter: Duration::from_millis(400),
        }
    }
}

impl BackoffPolicy {
    /// Delay before retrying after failed `attempt` (1-based). `unit` is a
    /// sample from `[0, 1)`.
    pub fn delay(&self, attempt: u32, unit: f64) -> Duration {
        let exp = attempt.saturating_sub(1).min(16);
        let base = self.base * 2u32.pow(exp);
        base + self.jitter.mul_f64(unit.clamp(0.0, 1.0))
    }
}

#[derive(Debug, Clone)]
pub struct LawGoConfig {
    pub oc: Sensitive<String>,
    pub search_url: String,
    pub service_url: String,
    pub timeout: Duration,
    pub max_attempts: u32,
    pub backoff: BackoffPolicy,
}

impl LawGoConfig {
    pub fn new(oc: Sensitive<String>) -> Self {
        Self {
            oc,
            search_url: LAW_SEARCH_URL.to_string(),
            service_url: LAW_SERVICE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: BackoffPolicy::default(),
        }
    }
}
