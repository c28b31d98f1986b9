use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::*;
use crate::build::{ConcreteRequest, ExecutionGroup};
use crate::domain::DelayRange;
use crate::error::ExecError;
use crate::exec::{GroupOutcome, ToolRunner};
use crate::metrics::OutputParser;

fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}

fn ab_output(completed: u64, failed: u64, throughput: &str) -> String {
    format!(
        "Concurrency Level:      1\nComplete requests:      {}\nFailed requests:        {}\nRequests per second:    {} [#/sec] (mean)\n",
        completed, failed, throughput
    )
}

fn close(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

/// Answers every call with canned `ab` output keyed by the URL argument.
struct CannedRunner;

#[async_trait]
impl ToolRunner for CannedRunner {
    async fn invoke(
        &self,
        args: &[String],
        _timeout: Option<Duration>,
    ) -> Result<String, ExecError> {
        match args.last().map(String::as_str) {
            Some("http://svc/fast") => Ok(ab_output(10, 0, "40.0")),
            Some("http://svc/slow") => Ok(ab_output(10, 1, "20.0")),
            Some("http://svc/garbled") => Ok("Benchmarking svc (be patient)".to_owned()),
            _ => Err(ExecError::Spawn {
                program: "canned".to_owned(),
                source: std::io::Error::other("no canned answer"),
            }),
        }
    }
}

fn group(name: &str, urls: &[&str]) -> ExecutionGroup {
    ExecutionGroup {
        name: name.to_owned(),
        requests: urls
            .iter()
            .map(|url| ConcreteRequest::new(vec!["-n".to_owned(), "10".to_owned(), (*url).to_owned()]))
            .collect(),
        delay: DelayRange::default(),
        timeout: None,
        artifacts: Vec::new(),
    }
}

#[test]
fn aggregate_excludes_unparsable_outputs() -> Result<(), String> {
    let parser = OutputParser::new().map_err(|err| err.to_string())?;
    let outcomes = vec![GroupOutcome {
        name: "users".to_owned(),
        outputs: vec![
            ab_output(100, 2, "50.5"),
            String::new(),
            ab_output(50, 0, "49.5"),
        ],
    }];

    let report = aggregate(&parser, outcomes);
    if report.unparsable != 1 {
        return Err(format!("Expected 1 unparsable, got {}", report.unparsable));
    }
    if report.summary.completed != 150
        || report.summary.failed != 2
        || !close(report.summary.throughput, 50.0)
    {
        return Err(format!("Unexpected summary: {:?}", report.summary));
    }
    let invocations = report
        .groups
        .first()
        .map(|group| group.invocations.len())
        .unwrap_or(0);
    if invocations != 3 {
        return Err(format!("Expected 3 invocations, got {}", invocations));
    }
    Ok(())
}

#[test]
fn aggregate_of_nothing_is_zero() -> Result<(), String> {
    let parser = OutputParser::new().map_err(|err| err.to_string())?;
    let report = aggregate(&parser, Vec::new());
    if report.unparsable != 0 || report.summary.completed != 0 || report.summary.failed != 0 {
        return Err(format!("Unexpected report: {:?}", report));
    }
    Ok(())
}

#[test]
fn run_campaign_collects_every_group() -> Result<(), String> {
    run_async_test(async {
        let groups = vec![
            group("fast", &["http://svc/fast", "http://svc/fast"]),
            group("mixed", &["http://svc/slow", "http://svc/garbled", "http://svc/down"]),
        ];
        let report = run_campaign(groups, Arc::new(CannedRunner))
            .await
            .map_err(|err| err.to_string())?;

        if report.groups.len() != 2 {
            return Err(format!("Expected 2 groups, got {}", report.groups.len()));
        }
        if report.unparsable != 2 {
            return Err(format!("Expected 2 unparsable, got {}", report.unparsable));
        }
        if report.summary.completed != 30 || report.summary.failed != 1 {
            return Err(format!("Unexpected summary: {:?}", report.summary));
        }
        let expected_mean = (40.0 + 40.0 + 20.0) / 3.0;
        if !close(report.summary.throughput, expected_mean) {
            return Err(format!("Unexpected mean: {}", report.summary.throughput));
        }
        Ok(())
    })
}

#[test]
fn report_lines_show_invocations_and_summary() -> Result<(), String> {
    let parser = OutputParser::new().map_err(|err| err.to_string())?;
    let report = aggregate(
        &parser,
        vec![GroupOutcome {
            name: "users".to_owned(),
            outputs: vec![ab_output(100, 2, "50.5"), String::new()],
        }],
    );
    let lines = report_lines(&report);

    let expected = [
        "Group 1 (users): 2 invocations",
        "Group 1 - Complete: 100 Failed: 2 Per Second: 50.50",
        "Group 1 - unparsable (Output is empty.)",
        "Complete requests: 100",
        "Failed requests: 2",
        "Average requests per second: 50.50",
        "1 invocations unparsable",
    ];
    for line in expected {
        if !lines.iter().any(|candidate| candidate == line) {
            return Err(format!("Missing line '{}' in {:?}", line, lines));
        }
    }
    Ok(())
}

#[test]
fn report_lines_omit_unparsable_count_when_clean() -> Result<(), String> {
    let parser = OutputParser::new().map_err(|err| err.to_string())?;
    let report = aggregate(
        &parser,
        vec![GroupOutcome {
            name: "users".to_owned(),
            outputs: vec![ab_output(1, 0, "1")],
        }],
    );
    if report_lines(&report)
        .iter()
        .any(|line| line.contains("unparsable"))
    {
        return Err("Clean report mentions unparsable outputs".to_owned());
    }
    Ok(())
}

#[test]
fn plan_lines_list_each_invocation() -> Result<(), String> {
    let groups = vec![group("users", &["http://svc/1", "http://svc/2"])];
    let lines = plan_lines("ab", &groups);
    let expected = vec![
        "users #0: ab -n 10 http://svc/1".to_owned(),
        "users #1: ab -n 10 http://svc/2".to_owned(),
    ];
    if lines != expected {
        return Err(format!("Unexpected plan: {:?}", lines));
    }
    Ok(())
}
