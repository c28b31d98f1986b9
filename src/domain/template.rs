use std::time::Duration;

use rand::Rng;
use serde_json::Value;

use super::HttpMethod;
use crate::template::VarSets;

/// Inclusive range of milliseconds to wait between two launches in a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DelayRange {
    min_ms: u64,
    max_ms: u64,
}

impl DelayRange {
    #[must_use]
    pub const fn new(min_ms: u64, max_ms: u64) -> Option<Self> {
        if min_ms > max_ms {
            return None;
        }
        Some(Self { min_ms, max_ms })
    }

    #[must_use]
    pub const fn min_ms(self) -> u64 {
        self.min_ms
    }

    #[must_use]
    pub const fn max_ms(self) -> u64 {
        self.max_ms
    }

    /// Draws a delay uniformly from the range.
    #[must_use]
    pub fn sample(self) -> Duration {
        if self.min_ms >= self.max_ms {
            return Duration::from_millis(self.min_ms);
        }
        let millis = rand::thread_rng().gen_range(self.min_ms..=self.max_ms);
        Duration::from_millis(millis)
    }
}

/// One declared request, validated and ready to expand.
#[derive(Debug, Clone)]
pub struct RequestTemplate {
    pub name: String,
    pub url: String,
    pub method: HttpMethod,
    pub url_vars: VarSets,
    pub payload: Option<Value>,
    pub payload_vars: VarSets,
    /// Tool flags in declaration order; an empty value emits only the key.
    pub options: Vec<(String, String)>,
    pub delay: DelayRange,
    /// How many times each URL combination is invoked.
    pub repetitions: usize,
    pub timeout: Option<Duration>,
}

impl RequestTemplate {
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            method: HttpMethod::Get,
            url_vars: VarSets::new(),
            payload: None,
            payload_vars: VarSets::new(),
            options: Vec::new(),
            delay: DelayRange::default(),
            repetitions: 1,
            timeout: None,
        }
    }

    #[must_use]
    pub fn has_option(&self, flag: &str) -> bool {
        self.options.iter().any(|(key, _)| key == flag)
    }
}
