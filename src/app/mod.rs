//! Campaign orchestration: run the groups, parse what the tool printed and
//! report the results.
mod campaign;
mod report;

#[cfg(test)]
mod tests;

pub use campaign::{CampaignReport, GroupReport, aggregate, run_campaign};
pub use report::{plan_lines, print_plan, print_report, report_lines};
