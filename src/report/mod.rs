//! Before/after size reports

pub mod csv;
pub mod html;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::cli::ReportFormat;
use crate::error::ReportError;
use crate::job::FileOutcome;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with binary units and one decimal, e.g. `"1.5 MB"`
pub fn human_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    for unit in UNITS {
        if value < 1024.0 {
            return format!("{:.1} {}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.1} PB", value)
}

/// Aggregate figures over a batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    pub files: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Bytes before compression, successful files only
    pub before: u64,
    /// Bytes after compression, successful files only
    pub after: u64,
    pub saved_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub created_at: DateTime<Local>,
    pub totals: Totals,
    pub rows: Vec<FileOutcome>,
}

impl Report {
    pub fn new(rows: Vec<FileOutcome>) -> Self {
        let totals = compute_totals(&rows);
        Self {
            created_at: Local::now(),
            totals,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Plain-text results table for the terminal
    pub fn render_table(&self) -> String {
        let headers = ["File", "Before", "After", "Saved %", "Status", "Note"];
        let rows: Vec<[String; 6]> = self
            .rows
            .iter()
            .map(|row| {
                [
                    row.file.display().to_string(),
                    human_size(row.before),
                    human_size(row.after),
                    format!("{:.1}", row.saved_pct),
                    row.status.to_string(),
                    row.note.clone(),
                ]
            })
            .collect();

        let mut widths = headers.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let format_line = |cells: &[String]| {
            cells
                .iter()
                .zip(widths.iter())
                .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut out = String::new();
        out.push_str(&format_line(&headers.map(String::from)[..]));
        out.push('\n');
        let rule_width = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
        out.push_str(&"-".repeat(rule_width));
        out.push('\n');
        for row in &rows {
            out.push_str(&format_line(row.as_slice()));
            out.push('\n');
        }

        let t = &self.totals;
        out.push_str(&format!(
            "\n{} file(s): {} OK, {} failed. {} -> {} ({:.1}% saved)\n",
            t.files,
            t.succeeded,
            t.failed,
            human_size(t.before),
            human_size(t.after),
            t.saved_pct
        ));
        out
    }

    /// Render the report in `format`
    pub fn to_format(&self, format: ReportFormat) -> Result<String, ReportError> {
        Ok(match format {
            ReportFormat::Csv => csv::to_csv(&self.rows),
            ReportFormat::Json => serde_json::to_string_pretty(self)?,
            ReportFormat::Html => html::to_html(self)?,
        })
    }

    /// Write `<dir>/report_<unix-seconds>.<ext>`, creating `dir` if needed
    pub fn save(&self, dir: &Path, format: ReportFormat) -> Result<PathBuf, ReportError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!(
            "report_{}.{}",
            self.created_at.timestamp(),
            format.extension()
        ));
        fs::write(&path, self.to_format(format)?)?;
        log::info!("Report saved: {}", path.display());
        Ok(path)
    }
}

fn compute_totals(rows: &[FileOutcome]) -> Totals {
    let ok: Vec<&FileOutcome> = rows.iter().filter(|r| r.is_ok()).collect();
    let before: u64 = ok.iter().map(|r| r.before).sum();
    let after: u64 = ok.iter().map(|r| r.after).sum();

    Totals {
        files: rows.len(),
        succeeded: ok.len(),
        failed: rows.len() - ok.len(),
        before,
        after,
        saved_pct: crate::job::saved_percent(before, after),
    }
}
