//! CSV report rows with raw byte counts

use std::path::Path;

use crate::job::FileOutcome;

pub const HEADER: &str = "file,before,after,saved_pct,status,note,output,backup";

/// Quote a field when it contains a delimiter, quote or line break
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn path_field(path: Option<&Path>) -> String {
    path.map(|p| escape_field(&p.display().to_string()))
        .unwrap_or_default()
}

pub fn to_csv(rows: &[FileOutcome]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');

    for row in rows {
        let fields = [
            escape_field(&row.file.display().to_string()),
            row.before.to_string(),
            row.after.to_string(),
            format!("{:.1}", row.saved_pct),
            row.status.to_string(),
            escape_field(&row.note),
            path_field(row.output.as_deref()),
            path_field(row.backup.as_deref()),
        ];
        out.push_str(&fields.join(","));
        out.push('\n');
    }

    out
}
