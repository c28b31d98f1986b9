use super::ParsedMetrics;

/// Campaign-wide totals over every parsed invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CampaignSummary {
    pub completed: u64,
    pub failed: u64,
    /// Mean requests per second across invocations; zero when there are none.
    pub throughput: f64,
}

#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "Mean throughput is a floating point ratio"
)]
pub fn summarize(metrics: &[ParsedMetrics]) -> CampaignSummary {
    let mut summary = CampaignSummary::default();
    if metrics.is_empty() {
        return summary;
    }

    for record in metrics {
        summary.completed = summary.completed.saturating_add(record.completed);
        summary.failed = summary.failed.saturating_add(record.failed);
    }
    let throughput_sum: f64 = metrics.iter().map(|record| record.throughput).sum();
    summary.throughput = throughput_sum / metrics.len() as f64;
    summary
}
