//! Extraction of metrics from benchmarking tool output and their roll-up.
mod extract;
mod summary;


pub use extract::{
    COMPLETED_LABEL, FAILED_LABEL, OutputParser, ParsedMetrics, THROUGHPUT_LABEL,
};
pub use summary::{CampaignSummary, summarize};
