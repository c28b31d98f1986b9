use crate::build::ExecutionGroup;

use super::CampaignReport;

#[must_use]
pub fn report_lines(report: &CampaignReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (index, group) in report.groups.iter().enumerate() {
        let number = index.saturating_add(1);
        lines.push(format!(
            "Group {} ({}): {} invocations",
            number,
            group.name,
            group.invocations.len()
        ));
        for invocation in &group.invocations {
            match invocation {
                Ok(metrics) => lines.push(format!(
                    "Group {} - Complete: {} Failed: {} Per Second: {:.2}",
                    number, metrics.completed, metrics.failed, metrics.throughput
                )),
                Err(err) => lines.push(format!("Group {} - unparsable ({})", number, err)),
            }
        }
    }

    lines.push(String::new());
    lines.push("Summary".to_owned());
    lines.push(format!("Complete requests: {}", report.summary.completed));
    lines.push(format!("Failed requests: {}", report.summary.failed));
    lines.push(format!(
        "Average requests per second: {:.2}",
        report.summary.throughput
    ));
    if report.unparsable > 0 {
        lines.push(format!("{} invocations unparsable", report.unparsable));
    }
    lines
}

pub fn print_report(report: &CampaignReport) {
    for line in report_lines(report) {
        println!("{}", line);
    }
}

/// One line per invocation that would run, as the shell would see it.
#[must_use]
pub fn plan_lines(program: &str, groups: &[ExecutionGroup]) -> Vec<String> {
    let mut lines = Vec::new();
    for group in groups {
        for (slot, request) in group.requests.iter().enumerate() {
            lines.push(format!(
                "{} #{}: {} {}",
                group.name,
                slot,
                program,
                request.args().join(" ")
            ));
        }
    }
    lines
}

pub fn print_plan(program: &str, groups: &[ExecutionGroup]) {
    for line in plan_lines(program, groups) {
        println!("{}", line);
    }
}
