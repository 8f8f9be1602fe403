//! Standalone HTML rendering of a [`Report`].

use askama::Template;

use crate::report::{format_usd, Report, ReportRow, RowStatus};

#[derive(Template)]
#[template(path = "report.html")]
struct ReportPage<'a> {
    generated_at: String,
    model: &'a str,
    calls_per_session: u64,
    sessions_per_week: u64,
    rows: Vec<RowView<'a>>,
    total_before: usize,
    total_after: usize,
    total_saved: i64,
    cost_lines: Vec<CostLine>,
}

/// View model for one table row.
struct RowView<'a> {
    file: &'a str,
    before: usize,
    after: usize,
    saved: i64,
    potential: u32,
    class: &'static str,
    status: String,
}

impl<'a> RowView<'a> {
    fn from_row(row: &'a ReportRow) -> Self {
        let (class, status) = match &row.status {
            RowStatus::Compressible => ("ok", "ok".to_string()),
            RowStatus::NoBenefit => ("none", "no benefit".to_string()),
            RowStatus::Error(e) => ("error", format!("error: {e}")),
        };
        Self {
            file: &row.file,
            before: row.original_tokens,
            after: row.effective_tokens(),
            saved: row.savings_percent,
            potential: row.potential,
            class,
            status,
        }
    }
}

struct CostLine {
    label: &'static str,
    amount: String,
}

impl<'a> ReportPage<'a> {
    fn new(report: &'a Report) -> Self {
        let cost = report.cost.as_ref();
        let cost_lines = [
            ("Monthly before", cost.map(|c| c.monthly_before)),
            ("Monthly after", cost.map(|c| c.monthly_after)),
            ("Monthly saved", cost.map(|c| c.monthly_savings())),
            ("Yearly saved", cost.map(|c| c.yearly_savings())),
        ]
        .into_iter()
        .map(|(label, amount)| CostLine {
            label,
            amount: format_usd(amount),
        })
        .collect();

        Self {
            generated_at: report.generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            model: &report.model,
            calls_per_session: report.usage.calls_per_session,
            sessions_per_week: report.usage.sessions_per_week,
            rows: report.rows.iter().map(RowView::from_row).collect(),
            total_before: report.total_original,
            total_after: report.total_compressed,
            total_saved: report.savings_percent,
            cost_lines,
        }
    }
}

pub fn render_html(report: &Report) -> askama::Result<String> {
    ReportPage::new(report).render()
}
