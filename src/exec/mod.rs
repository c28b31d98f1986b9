//! Concurrent execution of request groups against the benchmarking tool.
mod group;
mod runner;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{error, info};

use crate::build::ExecutionGroup;

pub use group::{GroupOutcome, run_group};
pub use runner::{DEFAULT_TOOL, ProcessRunner, ToolRunner};

/// Runs all groups concurrently.
///
/// Groups are returned in the order they finish, so only the order of
/// outputs inside a group is deterministic.
pub async fn run_groups(
    groups: Vec<ExecutionGroup>,
    runner: Arc<dyn ToolRunner>,
) -> Vec<GroupOutcome> {
    let total = groups
        .iter()
        .fold(0usize, |total, group| total.saturating_add(group.requests.len()));
    info!("{} {} calls to make", total, runner.program());

    let mut running = JoinSet::new();
    let group_count = groups.len();
    for group in groups {
        running.spawn(run_group(group, Arc::clone(&runner)));
    }

    let mut finished = Vec::with_capacity(group_count);
    while let Some(joined) = running.join_next().await {
        match joined {
            Ok(outcome) => finished.push(outcome),
            Err(err) => error!("Request group task failed: {}", err),
        }
    }
    finished
}
