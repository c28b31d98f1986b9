use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::{DEFAULT_CONTENT_TYPE, RequestTemplate};
use crate::error::{ConfigError, ValueError};
use crate::template::{Binding, CompiledTemplate, to_text};

const CONTENT_TYPE_FLAG: &str = "-T";
const METHOD_FLAG: &str = "-m";

/// A fully resolved tool invocation. The URL is always the last argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcreteRequest {
    args: Vec<String>,
}

impl ConcreteRequest {
    #[must_use]
    pub const fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    #[must_use]
    pub fn url(&self) -> &str {
        self.args.last().map_or("", String::as_str)
    }
}

/// Fills the compiled URL from `binding`. Variables without a slot are
/// ignored and slots without a variable render empty.
///
/// # Errors
///
/// Returns an error when a bound value used in the URL is not text or a
/// number.
pub fn render_url(compiled: &CompiledTemplate, binding: &Binding) -> Result<String, ValueError> {
    let mut values = BTreeMap::new();
    for (name, value) in binding {
        if compiled.fills(name) {
            values.insert(name.clone(), to_text(value)?);
        }
    }
    Ok(compiled.render(&values))
}

/// Builds the argument vector for one URL binding and optional payload file.
///
/// # Errors
///
/// Returns an error when a URL variable cannot be rendered as text.
pub fn materialize(
    template: &RequestTemplate,
    compiled: &CompiledTemplate,
    binding: &Binding,
    body: Option<&Path>,
) -> Result<ConcreteRequest, ConfigError> {
    let url = render_url(compiled, binding).map_err(|err| ConfigError::InvalidValue {
        request: template.name.clone(),
        field: "url-vars".to_owned(),
        source: err,
    })?;

    let mut args = Vec::with_capacity(template.options.len().saturating_mul(2).saturating_add(5));
    for (key, value) in &template.options {
        args.push(key.clone());
        if !value.is_empty() {
            args.push(value.clone());
        }
    }

    if let Some(method) = template.method.method_override()
        && !template.has_option(METHOD_FLAG)
    {
        args.push(METHOD_FLAG.to_owned());
        args.push(method.to_owned());
    }

    if let (Some(path), Some(flag)) = (body, template.method.body_flag()) {
        if !template.has_option(CONTENT_TYPE_FLAG) {
            args.push(CONTENT_TYPE_FLAG.to_owned());
            args.push(DEFAULT_CONTENT_TYPE.to_owned());
        }
        args.push(flag.to_owned());
        args.push(path.to_string_lossy().into_owned());
    }

    args.push(url);
    Ok(ConcreteRequest { args })
}
