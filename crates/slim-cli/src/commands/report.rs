//! `tokslim report`: savings summary without touching files.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use super::{file_label, Workspace};
use crate::html::render_html;
use crate::output::print_report;
use crate::report::{Report, ReportRow};

pub fn build(ws: &Workspace, model: Option<&str>) -> Result<Report> {
    let files = ws.files(None)?;
    let rows = files
        .iter()
        .map(|path| {
            let name = file_label(path);
            match ws.analyze(path) {
                Ok(analysis) => ReportRow::from_analysis(name, &analysis),
                Err(e) => {
                    tracing::warn!(file = %name, error = %e, "skipping unreadable file");
                    ReportRow::failed(name, e)
                }
            }
        })
        .collect();
    let model = model.unwrap_or(&ws.config.usage.model);
    Ok(Report::build(rows, model, &ws.config.usage, &ws.catalog))
}

pub fn execute(
    ws: &Workspace,
    html: Option<&Path>,
    json: bool,
    model: Option<&str>,
) -> Result<()> {
    let report = build(ws, model)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if let Some(path) = html {
        let page = render_html(&report).context("Failed to render HTML report")?;
        std::fs::write(path, page)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        if !json {
            println!();
            println!("{} {}", "HTML report:".bold(), path.display());
        }
        tracing::info!(path = %path.display(), "wrote HTML report");
    }
    Ok(())
}
