use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Output is empty.")]
    EmptyOutput,
    #[error("No '{label}' line in output.")]
    MissingLine { label: &'static str },
    #[error("No number after '{label}' (line: '{line}').")]
    MissingNumber { label: &'static str, line: String },
    #[error("Invalid integer '{value}' after '{label}': {source}")]
    InvalidInteger {
        label: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid number '{value}' after '{label}': {source}")]
    InvalidNumber {
        label: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("Invalid output pattern: {source}")]
    Pattern {
        #[from]
        source: regex::Error,
    },
}
