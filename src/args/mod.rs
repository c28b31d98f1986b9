//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;

#[cfg(test)]
mod test_support;

pub use cli::CampaignArgs;

pub(crate) use defaults::{default_config_path, default_tmp_path};
