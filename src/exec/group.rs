use std::sync::Arc;

use tokio::task::JoinSet;
use tokio::time::sleep;
use tracing::{debug, error};

use crate::build::ExecutionGroup;

use super::runner::ToolRunner;

/// Raw outputs of one group, indexed by launch slot.
///
/// A slot whose invocation failed holds empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupOutcome {
    pub name: String,
    pub outputs: Vec<String>,
}

/// Launches every request of `group` in slot order, pausing a random delay
/// from the group's range between launches, then waits for all of them.
///
/// Completion order does not matter: each output lands in the slot of the
/// request that produced it.
pub async fn run_group(group: ExecutionGroup, runner: Arc<dyn ToolRunner>) -> GroupOutcome {
    let ExecutionGroup {
        name,
        requests,
        delay,
        timeout,
        artifacts,
    } = group;

    let total = requests.len();
    let mut in_flight = JoinSet::new();
    let mut pending = requests.into_iter().enumerate().peekable();

    while let Some((slot, request)) = pending.next() {
        let runner = Arc::clone(&runner);
        let group_name = name.clone();
        debug!("Launching {} #{}: {:?}", group_name, slot, request.args());
        in_flight.spawn(async move {
            let output = match runner.invoke(request.args(), timeout).await {
                Ok(output) => output,
                Err(err) => {
                    error!("{} #{} failed: {}", group_name, slot, err);
                    String::new()
                }
            };
            (slot, output)
        });

        if pending.peek().is_some() {
            let pause = delay.sample();
            if !pause.is_zero() {
                sleep(pause).await;
            }
        }
    }

    let mut outputs = vec![String::new(); total];
    while let Some(joined) = in_flight.join_next().await {
        match joined {
            Ok((slot, output)) => {
                if let Some(entry) = outputs.get_mut(slot) {
                    *entry = output;
                }
            }
            Err(err) => error!("{} invocation task failed: {}", name, err),
        }
    }

    drop(artifacts);
    GroupOutcome { name, outputs }
}
