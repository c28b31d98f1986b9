//! Core library for the `fuzz-ab` CLI.
//!
//! Request templates with `{{name}}` placeholders are expanded over the
//! cartesian product of their variable sets into concrete ApacheBench
//! invocations. Each template becomes a group whose invocations are launched
//! with a random delay between them; groups run concurrently and the metrics
//! each invocation prints are parsed and summarized.
pub mod app;
pub mod args;
pub mod build;
pub mod config;
pub mod domain;
pub mod entry;
pub mod error;
pub mod exec;
pub mod logger;
pub mod metrics;
pub mod template;
