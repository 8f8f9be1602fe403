//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::report::{format_usd, Report, RowStatus};

/// Width of the file name column in tables.
pub const FILE_COLUMN: usize = 28;

/// Cut `s` to at most `max` terminal columns, ending in `…` when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    let budget = max.saturating_sub(1);
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

/// Right-pad to a visual width. `{:<n}` counts chars, which misaligns wide glyphs.
pub fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - visual))
    }
}

/// File name cell: truncated and padded to [`FILE_COLUMN`].
pub fn file_cell(name: &str) -> String {
    pad_right(&truncate(name, FILE_COLUMN), FILE_COLUMN)
}

/// Savings colored by size: green when worthwhile, yellow when marginal.
pub fn savings_colored(percent: i64) -> ColoredString {
    let text = format!("{percent}%");
    match percent {
        p if p >= 20 => text.green(),
        p if p > 0 => text.yellow(),
        _ => text.dimmed(),
    }
}

pub fn potential_colored(score: u32) -> ColoredString {
    let text = format!("{score}/100");
    match score {
        s if s >= 60 => text.green(),
        s if s >= 30 => text.yellow(),
        _ => text.dimmed(),
    }
}

pub fn print_header(title: &str, width: usize) {
    println!("{}", title.bold());
    println!("{}", "═".repeat(width));
}

pub fn print_report(report: &Report) {
    print_header("Context Compression Report", 78);
    println!();

    if report.rows.is_empty() {
        println!("{}", "No context files found.".dimmed());
        return;
    }

    println!(
        "{:<28} {:>10} {:>10} {:>8} {:>10}  {}",
        "File", "Before", "After", "Saved", "Potential", "Status"
    );
    println!("{}", "─".repeat(78));

    for row in &report.rows {
        let status = match &row.status {
            RowStatus::Compressible => "ok".green(),
            RowStatus::NoBenefit => "no benefit".dimmed(),
            RowStatus::Error(e) => format!("error: {e}").red(),
        };
        println!(
            "{} {:>10} {:>10} {:>8} {:>10}  {}",
            file_cell(&row.file),
            row.original_tokens,
            row.effective_tokens(),
            savings_colored(row.savings_percent),
            potential_colored(row.potential),
            status
        );
    }

    println!("{}", "─".repeat(78));
    println!(
        "{:<28} {:>10} {:>10} {:>8}",
        "Total".bold(),
        report.total_original,
        report.total_compressed,
        savings_colored(report.savings_percent)
    );
    println!();

    let usage = &report.usage;
    println!(
        "{} {} ({} calls/session, {} sessions/week)",
        "Model:".bold(),
        report.model.cyan(),
        usage.calls_per_session,
        usage.sessions_per_week
    );
    let cost = report.cost.as_ref();
    println!("  Monthly before: {}", format_usd(cost.map(|c| c.monthly_before)));
    println!("  Monthly after:  {}", format_usd(cost.map(|c| c.monthly_after)));
    println!(
        "  Monthly saved:  {}",
        format_usd(cost.map(|c| c.monthly_savings())).green()
    );
    println!(
        "  Yearly saved:   {}",
        format_usd(cost.map(|c| c.yearly_savings())).green().bold()
    );

    if report.errors() > 0 {
        println!();
        println!("{} {} file(s) could not be read", "!".yellow(), report.errors());
    }
}
