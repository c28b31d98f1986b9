use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    #[error("text")]
    Text,
    #[error("number")]
    Number,
    #[error("boolean")]
    Bool,
    #[error("null")]
    Null,
    #[error("object")]
    Object,
    #[error("array")]
    Array,
}

#[derive(Debug, Error)]
pub enum ValueError {
    #[error("Unsupported value type '{kind}'. Expected text or a number.")]
    Unsupported { kind: ValueKind },
    #[error("'{value}' is not an integer: {source}")]
    NotAnInteger {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("'{value}' is not a number: {source}")]
    NotANumber {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("Number {value} is out of range.")]
    OutOfRange { value: String },
}
