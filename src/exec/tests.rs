use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{Instant, sleep};

use super::*;
use crate::build::{ConcreteRequest, ExecutionGroup};
use crate::domain::DelayRange;
use crate::error::ExecError;

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

/// Echoes the last argument back after a latency encoded in the argument
/// before it. Arguments starting with `fail` produce an error.
struct ScriptedRunner;

#[async_trait]
impl ToolRunner for ScriptedRunner {
    async fn invoke(
        &self,
        args: &[String],
        _timeout: Option<Duration>,
    ) -> Result<String, ExecError> {
        let latency_ms = args
            .first()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(0);
        sleep(Duration::from_millis(latency_ms)).await;
        let label = args.last().cloned().unwrap_or_default();
        if label.starts_with("fail") {
            return Err(ExecError::Spawn {
                program: "scripted".to_owned(),
                source: std::io::Error::other("scripted failure"),
            });
        }
        Ok(label)
    }
}

fn group(name: &str, specs: &[(u64, &str)], delay: DelayRange) -> ExecutionGroup {
    ExecutionGroup {
        name: name.to_owned(),
        requests: specs
            .iter()
            .map(|(latency, label)| ConcreteRequest::new(vec![latency.to_string(), (*label).to_owned()]))
            .collect(),
        delay,
        timeout: None,
        artifacts: Vec::new(),
    }
}

#[test]
fn group_outputs_keep_launch_slots() -> Result<(), String> {
    run_async_test(async {
        let specs = [
            (120, "slot-0"),
            (10, "slot-1"),
            (80, "slot-2"),
            (0, "slot-3"),
            (40, "slot-4"),
        ];
        let outcome = run_group(
            group("users", &specs, DelayRange::default()),
            Arc::new(ScriptedRunner),
        )
        .await;
        let expected: Vec<String> = (0..5).map(|slot| format!("slot-{}", slot)).collect();
        if outcome.outputs != expected {
            return Err(format!("Unexpected outputs: {:?}", outcome.outputs));
        }
        if outcome.name != "users" {
            return Err(format!("Unexpected name: {}", outcome.name));
        }
        Ok(())
    })
}

#[test]
fn failed_invocation_leaves_empty_slot() -> Result<(), String> {
    run_async_test(async {
        let specs = [(5, "ok-0"), (0, "fail-1"), (1, "ok-2")];
        let outcome = run_group(
            group("mixed", &specs, DelayRange::default()),
            Arc::new(ScriptedRunner),
        )
        .await;
        let expected = ["ok-0".to_owned(), String::new(), "ok-2".to_owned()];
        if outcome.outputs != expected {
            return Err(format!("Unexpected outputs: {:?}", outcome.outputs));
        }
        Ok(())
    })
}

#[test]
fn launches_are_paced_by_the_delay_range() -> Result<(), String> {
    run_async_test(async {
        let delay = DelayRange::new(30, 30).ok_or("bad range")?;
        let specs = [(0, "a"), (0, "b"), (0, "c")];
        let started = Instant::now();
        let outcome = run_group(group("paced", &specs, delay), Arc::new(ScriptedRunner)).await;
        let elapsed = started.elapsed();
        if elapsed < Duration::from_millis(60) {
            return Err(format!("Launches were not paced: {:?}", elapsed));
        }
        if outcome.outputs.len() != 3 {
            return Err(format!("Unexpected outputs: {:?}", outcome.outputs));
        }
        Ok(())
    })
}

#[test]
fn launches_wait_at_least_the_range_minimum() -> Result<(), String> {
    run_async_test(async {
        let delay = DelayRange::new(20, 40).ok_or("bad range")?;
        let specs = [(0, "a"), (0, "b"), (0, "c"), (0, "d")];
        let started = Instant::now();
        let outcome = run_group(group("jittered", &specs, delay), Arc::new(ScriptedRunner)).await;
        let elapsed = started.elapsed();
        if elapsed < Duration::from_millis(60) {
            return Err(format!("Three pauses of >= 20ms took only {:?}", elapsed));
        }
        let expected = ["a", "b", "c", "d"].map(str::to_owned);
        if outcome.outputs != expected {
            return Err(format!("Unexpected outputs: {:?}", outcome.outputs));
        }
        Ok(())
    })
}

#[test]
fn empty_group_yields_no_outputs() -> Result<(), String> {
    run_async_test(async {
        let outcome = run_group(
            group("empty", &[], DelayRange::default()),
            Arc::new(ScriptedRunner),
        )
        .await;
        if !outcome.outputs.is_empty() {
            return Err(format!("Unexpected outputs: {:?}", outcome.outputs));
        }
        Ok(())
    })
}

#[test]
fn all_groups_complete_with_their_own_order() -> Result<(), String> {
    run_async_test(async {
        let groups = vec![
            group("slow", &[(60, "s0"), (0, "s1")], DelayRange::default()),
            group("fast", &[(0, "f0"), (20, "f1"), (5, "f2")], DelayRange::default()),
            group("single", &[(10, "x0")], DelayRange::default()),
        ];
        let mut outcomes = run_groups(groups, Arc::new(ScriptedRunner)).await;
        outcomes.sort_by(|left, right| left.name.cmp(&right.name));
        let summary: Vec<(String, Vec<String>)> = outcomes
            .into_iter()
            .map(|outcome| (outcome.name, outcome.outputs))
            .collect();
        let expected = vec![
            ("fast".to_owned(), vec!["f0".to_owned(), "f1".to_owned(), "f2".to_owned()]),
            ("single".to_owned(), vec!["x0".to_owned()]),
            ("slow".to_owned(), vec!["s0".to_owned(), "s1".to_owned()]),
        ];
        if summary != expected {
            return Err(format!("Unexpected outcomes: {:?}", summary));
        }
        Ok(())
    })
}

#[test]
fn missing_program_is_a_spawn_error() -> Result<(), String> {
    run_async_test(async {
        let runner = ProcessRunner::new("fuzz-ab-definitely-not-installed".to_owned());
        match runner.invoke(&[], None).await {
            Err(ExecError::Spawn { .. }) => Ok(()),
            other => Err(format!("Unexpected result: {:?}", other)),
        }
    })
}

#[cfg(unix)]
#[test]
fn process_runner_captures_stdout() -> Result<(), String> {
    run_async_test(async {
        let runner = ProcessRunner::new("sh".to_owned());
        let args = ["-c".to_owned(), "echo 'Complete requests: 3'".to_owned()];
        let output = runner
            .invoke(&args, Some(Duration::from_secs(5)))
            .await
            .map_err(|err| err.to_string())?;
        if output != "Complete requests: 3\n" {
            return Err(format!("Unexpected output: {:?}", output));
        }
        Ok(())
    })
}

#[cfg(unix)]
#[test]
fn process_runner_reports_exit_status() -> Result<(), String> {
    run_async_test(async {
        let runner = ProcessRunner::new("sh".to_owned());
        let args = ["-c".to_owned(), "echo oops >&2; exit 3".to_owned()];
        match runner.invoke(&args, None).await {
            Err(ExecError::ExitStatus { status, stderr, .. })
                if status.code() == Some(3) && stderr == "oops" =>
            {
                Ok(())
            }
            other => Err(format!("Unexpected result: {:?}", other)),
        }
    })
}

#[cfg(unix)]
#[test]
fn process_runner_enforces_timeout() -> Result<(), String> {
    run_async_test(async {
        let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
        let marker = dir.path().join("finished");
        let runner = ProcessRunner::new("sh".to_owned());
        let args = [
            "-c".to_owned(),
            format!("sleep 1; touch '{}'", marker.display()),
        ];
        let started = Instant::now();
        match runner.invoke(&args, Some(Duration::from_millis(100))).await {
            Err(ExecError::Timeout { .. }) => {}
            other => return Err(format!("Unexpected result: {:?}", other)),
        }
        if started.elapsed() > Duration::from_millis(900) {
            return Err("Timeout did not cut the invocation short".to_owned());
        }

        sleep(Duration::from_millis(1500)).await;
        if marker.exists() {
            return Err("Timed out child kept running".to_owned());
        }
        Ok(())
    })
}

#[test]
fn runner_reports_its_program() -> Result<(), String> {
    let runner: Arc<dyn ToolRunner> = Arc::new(ProcessRunner::new("/opt/ab-2.3".to_owned()));
    if runner.program() != "/opt/ab-2.3" {
        return Err(format!("Unexpected program: {}", runner.program()));
    }
    let scripted: Arc<dyn ToolRunner> = Arc::new(ScriptedRunner);
    if scripted.program() != DEFAULT_TOOL {
        return Err(format!("Unexpected default program: {}", scripted.program()));
    }
    Ok(())
}
