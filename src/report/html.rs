//! Standalone HTML page with the results table

use std::fmt::{self, Write};

use html_escape::encode_text;

use super::{human_size, Report};
use crate::job::Status;

const STYLE: &str = "body{font-family:sans-serif;margin:2em}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ccc;padding:4px 8px;text-align:left}\
th{background:#f0f0f0}td.num{text-align:right}\
tr.error td{background:#fdecea}tfoot td{font-weight:bold}";

pub fn to_html(report: &Report) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let created = report.created_at.format("%Y-%m-%d %H:%M:%S").to_string();

    write!(
        out,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>PDF compression report {created}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>PDF compression report</h1>\n<p>Generated {created}</p>\n<table>\n\
         <thead><tr><th>File</th><th>Before</th><th>After</th><th>Saved %</th>\
         <th>Status</th><th>Note</th><th>Output</th><th>Backup</th></tr></thead>\n<tbody>\n"
    )?;

    for row in &report.rows {
        let class = if row.status == Status::Error {
            " class=\"error\""
        } else {
            ""
        };
        let file = row.file.display().to_string();
        let output = row
            .output
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let backup = row
            .backup
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        writeln!(
            out,
            "<tr{}><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td>\
             <td class=\"num\">{:.1}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            class,
            encode_text(&file),
            human_size(row.before),
            human_size(row.after),
            row.saved_pct,
            row.status,
            encode_text(&row.note),
            encode_text(&output),
            encode_text(&backup),
        )?;
    }

    let t = &report.totals;
    write!(
        out,
        "</tbody>\n<tfoot><tr><td>{} file(s), {} OK, {} failed</td><td class=\"num\">{}</td>\
         <td class=\"num\">{}</td><td class=\"num\">{:.1}</td><td colspan=\"4\"></td></tr></tfoot>\n\
         </table>\n</body>\n</html>\n",
        t.files,
        t.succeeded,
        t.failed,
        human_size(t.before),
        human_size(t.after),
        t.saved_pct,
    )?;

    Ok(out)
}
