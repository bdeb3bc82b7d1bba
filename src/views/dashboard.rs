use axum::response::Html;

use super::{escape, layout};
use crate::db::SeverityCount;

pub fn dashboard_page(user: &str, total: i64, counts: &[SeverityCount]) -> Html<String> {
    let rows: String = counts
        .iter()
        .map(|c| {
            format!(
                "<tr><td>{}</td><td>{}</td></tr>\n",
                escape(&c.severity),
                c.count
            )
        })
        .collect();
    let table = if counts.is_empty() {
        "<p>No reports recorded yet.</p>".to_string()
    } else {
        format!(
            "<table>\n<thead><tr><th>Severity</th><th>Reports</th></tr></thead>\n<tbody>\n{rows}</tbody>\n</table>"
        )
    };
    let body = format!("<p>Total reports: <strong>{total}</strong></p>\n{table}");
    layout("ADR Dashboard", Some(user), &body)
}
