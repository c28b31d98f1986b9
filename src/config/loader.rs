use std::path::Path;
use std::time::Duration;

use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::RequestTemplate;
use crate::error::{AppError, AppResult, ConfigError};

use super::convert::build_template;
use super::types::RequestConfig;

/// Loads the request file and turns the selected entries into templates.
///
/// An empty `names` slice selects every request in the file.
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed, when no request
/// matches `names`, or when a selected request is invalid.
pub fn load_requests(
    path: &Path,
    names: &[String],
    default_timeout: Option<Duration>,
) -> AppResult<Vec<RequestTemplate>> {
    let entries = read_request_file(path)?;
    select_requests(entries, names)?
        .into_iter()
        .map(|(name, config)| build_template(name, config, default_timeout).map_err(AppError::from))
        .collect()
}

pub(crate) fn read_request_file(path: &Path) -> AppResult<Map<String, Value>> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadConfig {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some("toml") => toml::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::ParseToml {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some(ext) => Err(AppError::config(ConfigError::UnsupportedExtension {
            ext: ext.to_owned(),
        })),
        None => Err(AppError::config(ConfigError::MissingExtension)),
    }
}

/// Decodes only the requested entries, keeping file order when no names are
/// given and argument order otherwise.
pub(crate) fn select_requests(
    mut entries: Map<String, Value>,
    names: &[String],
) -> Result<Vec<(String, RequestConfig)>, ConfigError> {
    if entries.is_empty() {
        return Err(ConfigError::NoRequests);
    }

    let selected: Vec<(String, Value)> = if names.is_empty() {
        entries.into_iter().collect()
    } else {
        let mut picked = Vec::with_capacity(names.len());
        for name in names {
            match entries.remove(name) {
                Some(entry) => picked.push((name.clone(), entry)),
                None => warn!("Request '{}' is not defined in the request file.", name),
            }
        }
        if picked.is_empty() {
            return Err(ConfigError::NoMatchingRequests {
                names: names.join(","),
            });
        }
        picked
    };

    selected
        .into_iter()
        .map(
            |(name, entry)| match serde_json::from_value::<RequestConfig>(entry) {
                Ok(config) => Ok((name, config)),
                Err(err) => Err(ConfigError::MalformedRequest {
                    request: name,
                    source: err,
                }),
            },
        )
        .collect()
}
