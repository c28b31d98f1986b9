//! Request file loading and validation.
mod convert;
mod loader;
pub mod types;


pub use loader::load_requests;

#[cfg(test)]
pub(crate) use convert::build_template;
#[cfg(test)]
pub(crate) use loader::{read_request_file, select_requests};
