//! Turns request templates into groups of concrete tool invocations.
mod artifacts;
mod payload;
mod request;


use std::path::Path;
use std::time::Duration;

use tracing::{debug, error, warn};

use crate::domain::{DelayRange, RequestTemplate};
use crate::error::{AppError, AppResult};
use crate::template::{combination_count, compile, expand};

pub use artifacts::{ArtifactSink, PayloadArtifact, TempDirSink};
pub use payload::substitute_payload;
pub use request::{ConcreteRequest, materialize, render_url};

/// Every invocation derived from one template, plus its pacing and the
/// payload files the invocations point at.
#[derive(Debug)]
pub struct ExecutionGroup {
    pub name: String,
    pub requests: Vec<ConcreteRequest>,
    pub delay: DelayRange,
    pub timeout: Option<Duration>,
    /// Held so the payload files outlive every invocation of the group.
    pub artifacts: Vec<PayloadArtifact>,
}

/// Expands every template into an execution group.
///
/// A group whose payload files cannot be written is logged and left out so
/// the remaining groups still run.
///
/// # Errors
///
/// Returns an error when a template holds values that cannot be rendered.
pub fn build_requests(
    templates: &[RequestTemplate],
    sink: &dyn ArtifactSink,
) -> AppResult<Vec<ExecutionGroup>> {
    let mut groups = Vec::with_capacity(templates.len());
    for template in templates {
        match build_group(template, sink) {
            Ok(group) => groups.push(group),
            Err(AppError::Exec(err)) => {
                error!("Skipping request '{}': {}", template.name, err);
            }
            Err(err) => return Err(err),
        }
    }
    Ok(groups)
}

/// Expands one template.
///
/// Produces `url combinations x max(1, payload files) x repetitions`
/// requests.
///
/// # Errors
///
/// Returns a configuration error for values that cannot be rendered and an
/// execution error when a payload file cannot be written.
pub fn build_group(template: &RequestTemplate, sink: &dyn ArtifactSink) -> AppResult<ExecutionGroup> {
    let compiled = compile(&template.url);
    let url_bindings = expand(&template.url_vars);
    if url_bindings.is_empty() {
        warn!(
            "Request '{}' has a URL variable without values; no invocations generated.",
            template.name
        );
    }

    let artifacts = write_payloads(template, sink)?;
    let bodies: Vec<Option<&Path>> = if artifacts.is_empty() {
        vec![None]
    } else {
        artifacts.iter().map(|artifact| Some(artifact.path())).collect()
    };

    let capacity = url_bindings
        .len()
        .saturating_mul(bodies.len())
        .saturating_mul(template.repetitions);
    let mut requests = Vec::with_capacity(capacity);
    for binding in &url_bindings {
        for body in &bodies {
            let request = materialize(template, &compiled, binding, *body)?;
            for _ in 1..template.repetitions {
                requests.push(request.clone());
            }
            requests.push(request);
        }
    }
    debug!(
        "Request '{}': {} url combinations, {} payload files, {} invocations.",
        template.name,
        url_bindings.len(),
        artifacts.len(),
        requests.len()
    );

    Ok(ExecutionGroup {
        name: template.name.clone(),
        requests,
        delay: template.delay,
        timeout: template.timeout,
        artifacts,
    })
}

fn write_payloads(
    template: &RequestTemplate,
    sink: &dyn ArtifactSink,
) -> AppResult<Vec<PayloadArtifact>> {
    let Some(payload) = template.payload.as_ref() else {
        return Ok(Vec::new());
    };
    if !template.method.carries_body() {
        warn!(
            "Request '{}' declares a body but {} requests do not send one; ignoring it.",
            template.name,
            template.method.as_str()
        );
        return Ok(Vec::new());
    }
    if combination_count(&template.payload_vars) == 0 {
        warn!(
            "Request '{}' has a body variable without values; sending no body.",
            template.name
        );
        return Ok(Vec::new());
    }

    expand(&template.payload_vars)
        .iter()
        .enumerate()
        .map(|(index, binding)| {
            let resolved = substitute_payload(payload, binding);
            sink.allocate(&template.name, index, &resolved)
                .map_err(AppError::from)
        })
        .collect()
}
