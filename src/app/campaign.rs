use std::sync::Arc;

use tracing::warn;

use crate::build::ExecutionGroup;
use crate::error::{AppResult, MetricsError};
use crate::exec::{GroupOutcome, ToolRunner, run_groups};
use crate::metrics::{CampaignSummary, OutputParser, ParsedMetrics, summarize};

/// Parsed results of one group, in launch-slot order.
#[derive(Debug)]
pub struct GroupReport {
    pub name: String,
    pub invocations: Vec<Result<ParsedMetrics, MetricsError>>,
}

#[derive(Debug)]
pub struct CampaignReport {
    /// Groups in the order they finished.
    pub groups: Vec<GroupReport>,
    pub summary: CampaignSummary,
    /// Invocations whose output did not carry the expected metrics.
    pub unparsable: usize,
}

/// Runs every group through `runner` and aggregates the outputs.
///
/// # Errors
///
/// Returns an error if the output parser cannot be built.
pub async fn run_campaign(
    groups: Vec<ExecutionGroup>,
    runner: Arc<dyn ToolRunner>,
) -> AppResult<CampaignReport> {
    let parser = OutputParser::new()?;
    let outcomes = run_groups(groups, runner).await;
    Ok(aggregate(&parser, outcomes))
}

/// Parses every raw output. Unparsable outputs are logged, counted and left
/// out of the summary.
#[must_use]
pub fn aggregate(parser: &OutputParser, outcomes: Vec<GroupOutcome>) -> CampaignReport {
    let mut unparsable = 0usize;
    let mut groups = Vec::with_capacity(outcomes.len());

    for outcome in outcomes {
        let GroupOutcome { name, outputs } = outcome;
        let mut invocations = Vec::with_capacity(outputs.len());
        for (slot, output) in outputs.iter().enumerate() {
            let parsed = parser.extract(output);
            if let Err(err) = &parsed {
                warn!("{} #{} output unparsable: {}", name, slot, err);
                unparsable = unparsable.saturating_add(1);
            }
            invocations.push(parsed);
        }
        groups.push(GroupReport { name, invocations });
    }

    let parsed: Vec<ParsedMetrics> = groups
        .iter()
        .flat_map(|group| group.invocations.iter())
        .filter_map(|invocation| invocation.as_ref().ok().copied())
        .collect();

    CampaignReport {
        summary: summarize(&parsed),
        groups,
        unparsable,
    }
}
