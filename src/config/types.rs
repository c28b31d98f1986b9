use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::HttpMethod;

/// One request entry as written in the request file.
///
/// Numeric fields are kept as raw values so numbers and numeric text are
/// both accepted and validated with the rest of the template.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct RequestConfig {
    pub url: String,
    #[serde(default)]
    pub method: HttpMethod,
    #[serde(default, alias = "num-per-run")]
    pub num_per_run: Option<Value>,
    #[serde(default, rename = "url-vars", alias = "url_vars")]
    pub url_vars: BTreeMap<String, Vec<Value>>,
    #[serde(default, alias = "payload")]
    pub body: Option<Value>,
    #[serde(default, rename = "body-vars", alias = "body_vars")]
    pub body_vars: BTreeMap<String, Vec<Value>>,
    #[serde(default, rename = "ab-options", alias = "ab_options")]
    pub ab_options: Map<String, Value>,
    #[serde(default)]
    pub delay: Option<Value>,
    #[serde(default, alias = "timeout-secs")]
    pub timeout_secs: Option<Value>,
}
