use regex::Regex;

use crate::error::MetricsError;

pub const COMPLETED_LABEL: &str = "Complete requests:";
pub const FAILED_LABEL: &str = "Failed requests:";
pub const THROUGHPUT_LABEL: &str = "Requests per second:";

const INTEGER_PATTERN: &str = r"\d+";
const DECIMAL_PATTERN: &str = r"\d+(?:\.\d+)?";

/// Metrics reported by one tool invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParsedMetrics {
    pub completed: u64,
    pub failed: u64,
    /// Requests per second.
    pub throughput: f64,
}

/// Pulls [`ParsedMetrics`] out of `ab`'s report text.
#[derive(Debug, Clone)]
pub struct OutputParser {
    integer: Regex,
    decimal: Regex,
}

impl OutputParser {
    /// # Errors
    ///
    /// Returns an error if the number patterns fail to compile.
    pub fn new() -> Result<Self, MetricsError> {
        Ok(Self {
            integer: Regex::new(INTEGER_PATTERN)?,
            decimal: Regex::new(DECIMAL_PATTERN)?,
        })
    }

    /// Reads the first number following each metric label. Only the first
    /// line carrying a label is considered.
    ///
    /// # Errors
    ///
    /// Returns an error when the output is empty, a label is missing, or a
    /// label is not followed by a number.
    pub fn extract(&self, raw: &str) -> Result<ParsedMetrics, MetricsError> {
        if raw.trim().is_empty() {
            return Err(MetricsError::EmptyOutput);
        }

        let completed = self.integer_after(raw, COMPLETED_LABEL)?;
        let failed = self.integer_after(raw, FAILED_LABEL)?;

        let token = find_token(&self.decimal, raw, THROUGHPUT_LABEL)?;
        let throughput = token
            .parse::<f64>()
            .map_err(|err| MetricsError::InvalidNumber {
                label: THROUGHPUT_LABEL,
                value: token.to_owned(),
                source: err,
            })?;

        Ok(ParsedMetrics {
            completed,
            failed,
            throughput,
        })
    }

    fn integer_after(&self, raw: &str, label: &'static str) -> Result<u64, MetricsError> {
        let token = find_token(&self.integer, raw, label)?;
        token
            .parse::<u64>()
            .map_err(|err| MetricsError::InvalidInteger {
                label,
                value: token.to_owned(),
                source: err,
            })
    }
}

fn find_token<'raw>(
    pattern: &Regex,
    raw: &'raw str,
    label: &'static str,
) -> Result<&'raw str, MetricsError> {
    let tail = raw
        .lines()
        .find_map(|line| line.split_once(label).map(|(_, tail)| tail))
        .ok_or(MetricsError::MissingLine { label })?;
    pattern
        .find(tail)
        .map(|found| found.as_str())
        .ok_or_else(|| MetricsError::MissingNumber {
            label,
            line: tail.trim().to_owned(),
        })
}
