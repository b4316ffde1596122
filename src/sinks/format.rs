use std::collections::BTreeMap;

use crate::metrics::Summary;

const HEADER: &str = "Seed\tRate\tAvg(ms)\tP50(ms)\tP95(ms)\tP99(ms)\tThroughput\tErrors";

/// Renders records grouped by operation (alphabetical), each group sorted by rate.
#[must_use]
pub fn render_summary_table(records: &[Summary]) -> String {
    let mut groups: BTreeMap<&str, Vec<&Summary>> = BTreeMap::new();
    for record in records {
        groups.entry(record.operation.as_str()).or_default().push(record);
    }

    let mut lines = Vec::new();
    for (operation, mut group) in groups {
        group.sort_by_key(|record| record.rate);
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("Operation: {}", operation));
        lines.push(HEADER.to_owned());
        lines.extend(group.into_iter().map(format_row));
    }
    lines.join("\n")
}

fn format_row(record: &Summary) -> String {
    format!(
        "{}\t{}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.1}\t{}",
        record.seed,
        record.rate,
        record.avg_ms,
        record.p50_ms,
        record.p95_ms,
        record.p99_ms,
        record.throughput,
        record.errors
    )
}
