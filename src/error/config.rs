use super::ValueError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read request file '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML request file '{path}': {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to parse JSON request file '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unsupported request file extension '{ext}'. Use .json or .toml.")]
    UnsupportedExtension { ext: String },
    #[error("Request file must have .json or .toml extension.")]
    MissingExtension,
    #[error("Request '{request}' is malformed: {source}")]
    MalformedRequest {
        request: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Request file does not define any requests.")]
    NoRequests,
    #[error("No requests in the request file matched any of the names provided: {names}")]
    NoMatchingRequests { names: String },
    #[error("Request '{request}' has an invalid '{field}': {source}")]
    InvalidValue {
        request: String,
        field: String,
        #[source]
        source: ValueError,
    },
    #[error("Request '{request}' field '{field}' must not be negative (got {value}).")]
    NegativeValue {
        request: String,
        field: &'static str,
        value: i64,
    },
    #[error("Request '{request}' field 'delay' must be a [min, max] pair of milliseconds.")]
    DelayShape { request: String },
    #[error("Request '{request}' delay range is inverted: min {min}ms > max {max}ms.")]
    InvalidDelayRange { request: String, min: u64, max: u64 },
    #[error("Request '{request}' field 'num_per_run' must be >= 1 (got {value}).")]
    RepetitionsTooSmall { request: String, value: i64 },
    #[error("Request '{request}' field 'timeout_secs' must be a positive number of seconds.")]
    InvalidTimeout { request: String },
    #[error("Failed to create temp directory '{path}': {source}")]
    CreateTmpDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
}
