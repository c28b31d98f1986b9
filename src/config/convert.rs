use std::time::Duration;

use serde_json::Value;

use crate::domain::{DelayRange, RequestTemplate};
use crate::error::{ConfigError, ValueError};
use crate::template::{to_float, to_int, to_text};

use super::types::RequestConfig;

/// Validates a decoded request entry and converts it into a template.
///
/// `default_timeout` applies when the entry sets no `timeout_secs` of its own.
pub(crate) fn build_template(
    name: String,
    config: RequestConfig,
    default_timeout: Option<Duration>,
) -> Result<RequestTemplate, ConfigError> {
    let options = config
        .ab_options
        .iter()
        .map(|(key, value)| {
            to_text(value)
                .map(|text| (key.clone(), text))
                .map_err(|err| invalid_value(&name, format!("ab-options.{}", key), err))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let delay = match config.delay.as_ref() {
        Some(value) => parse_delay(&name, value)?,
        None => DelayRange::default(),
    };

    let repetitions = match config.num_per_run.as_ref() {
        Some(value) => parse_repetitions(&name, value)?,
        None => 1,
    };

    let timeout = match config.timeout_secs.as_ref() {
        Some(value) => Some(parse_timeout(&name, value)?),
        None => default_timeout,
    };

    Ok(RequestTemplate {
        url: config.url,
        method: config.method,
        url_vars: config.url_vars,
        payload: config.body,
        payload_vars: config.body_vars,
        options,
        delay,
        repetitions,
        timeout,
        name,
    })
}

fn parse_delay(name: &str, value: &Value) -> Result<DelayRange, ConfigError> {
    let Value::Array(bounds) = value else {
        return Err(ConfigError::DelayShape {
            request: name.to_owned(),
        });
    };
    let [min, max] = bounds.as_slice() else {
        return Err(ConfigError::DelayShape {
            request: name.to_owned(),
        });
    };
    let min = non_negative(name, "delay", min)?;
    let max = non_negative(name, "delay", max)?;
    DelayRange::new(min, max).ok_or_else(|| ConfigError::InvalidDelayRange {
        request: name.to_owned(),
        min,
        max,
    })
}

fn parse_repetitions(name: &str, value: &Value) -> Result<usize, ConfigError> {
    let count = to_int(value).map_err(|err| invalid_value(name, "num_per_run".to_owned(), err))?;
    usize::try_from(count)
        .ok()
        .filter(|count| *count >= 1)
        .ok_or_else(|| ConfigError::RepetitionsTooSmall {
            request: name.to_owned(),
            value: count,
        })
}

fn parse_timeout(name: &str, value: &Value) -> Result<Duration, ConfigError> {
    let secs = to_float(value).map_err(|err| invalid_value(name, "timeout_secs".to_owned(), err))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(ConfigError::InvalidTimeout {
            request: name.to_owned(),
        });
    }
    Duration::try_from_secs_f64(secs).map_err(|_overflow| ConfigError::InvalidTimeout {
        request: name.to_owned(),
    })
}

fn non_negative(name: &str, field: &'static str, value: &Value) -> Result<u64, ConfigError> {
    let parsed = to_int(value).map_err(|err| invalid_value(name, field.to_owned(), err))?;
    u64::try_from(parsed).map_err(|_negative| ConfigError::NegativeValue {
        request: name.to_owned(),
        field,
        value: parsed,
    })
}

fn invalid_value(name: &str, field: String, source: ValueError) -> ConfigError {
    ConfigError::InvalidValue {
        request: name.to_owned(),
        field,
        source,
    }
}
