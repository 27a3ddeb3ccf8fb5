//! Compressing a single file
//!
//! Every failure is turned into an error row so one bad file never stops a
//! batch.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::TempPath;

use crate::backend::{ocr, Backend};
use crate::config::Settings;
use crate::error::CompressError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "ERROR")]
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "OK"),
            Status::Error => write!(f, "ERROR"),
        }
    }
}

/// Result of compressing one file; one row of the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileOutcome {
    pub file: PathBuf,
    /// Size in bytes before compression
    pub before: u64,
    /// Size in bytes after compression (equal to `before` on error)
    pub after: u64,
    /// Percentage saved, rounded to one decimal; negative if the file grew
    pub saved_pct: f64,
    pub status: Status,
    pub note: String,
    pub output: Option<PathBuf>,
    pub backup: Option<PathBuf>,
}

impl FileOutcome {
    pub fn succeeded(
        file: PathBuf,
        before: u64,
        after: u64,
        output: PathBuf,
        backup: Option<PathBuf>,
    ) -> Self {
        Self {
            file,
            before,
            after,
            saved_pct: saved_percent(before, after),
            status: Status::Ok,
            note: String::new(),
            output: Some(output),
            backup,
        }
    }

    pub fn failed(file: PathBuf, before: u64, note: String, backup: Option<PathBuf>) -> Self {
        Self {
            file,
            before,
            after: before,
            saved_pct: 0.0,
            status: Status::Error,
            note,
            output: None,
            backup,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

/// Percentage of `before` saved, rounded to one decimal place
pub fn saved_percent(before: u64, after: u64) -> f64 {
    if before == 0 {
        return 0.0;
    }
    let ratio = (before as f64 - after as f64) / before as f64 * 100.0;
    (ratio * 10.0).round() / 10.0
}

/// Compress one PDF according to `settings`.
///
/// Batches should plan output names with [`Settings::output_paths_for`] and
/// call [`compress_to`] so same-named files from different folders do not
/// overwrite each other.
pub fn compress_one(source: &Path, settings: &Settings, backend: &Backend) -> FileOutcome {
    let output = settings.output_path_for(source);
    compress_to(source, output.as_deref(), settings, backend)
}

/// Compress one PDF into `output`.
///
/// `None` means no output name could be derived for `source`, which is
/// reported as an error row.
pub fn compress_to(
    source: &Path,
    output: Option<&Path>,
    settings: &Settings,
    backend: &Backend,
) -> FileOutcome {
    log::info!("Compressing {}", source.display());

    let mut backup = None;
    let before = match fs::metadata(source) {
        Ok(meta) => meta.len(),
        Err(e) => {
            log::warn!("Cannot read {}: {}", source.display(), e);
            return FileOutcome::failed(source.to_path_buf(), 0, e.to_string(), None);
        }
    };

    let written = output
        .ok_or_else(|| CompressError::InvalidFileName(source.to_path_buf()))
        .and_then(|output| try_compress(source, output, settings, backend, &mut backup))
        .and_then(|output| Ok((fs::metadata(&output)?.len(), output)));

    match written {
        Ok((after, output)) => {
            log::info!(
                "Compressed {}: {} -> {} bytes",
                source.display(),
                before,
                after
            );
            FileOutcome::succeeded(source.to_path_buf(), before, after, output, backup)
        }
        Err(e) => {
            log::warn!("Failed to compress {}: {}", source.display(), e);
            FileOutcome::failed(source.to_path_buf(), before, e.to_string(), backup)
        }
    }
}

fn try_compress(
    source: &Path,
    output: &Path,
    settings: &Settings,
    backend: &Backend,
    backup: &mut Option<PathBuf>,
) -> Result<PathBuf, CompressError> {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| CompressError::InvalidFileName(source.to_path_buf()))?;

    if settings.takes_backups() {
        *backup = Some(backup_file(source, &stem, &settings.backup_dir)?);
    }

    // Temporaries live beside the destination so the final move is a rename
    let work_dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&work_dir)?;

    let compressed = temp_pdf(&work_dir, &stem)?;
    backend.compress(source, &compressed, settings.preset, settings.dpi)?;

    let result = if settings.ocr {
        let searchable = temp_pdf(&work_dir, &stem)?;
        ocr::run_ocr(
            &settings.ocr_program,
            &compressed,
            &searchable,
            &settings.ocr_language,
        )?;
        searchable
    } else {
        compressed
    };

    // Temporaries are created owner-only; the output keeps the source's mode
    fs::set_permissions(&result, fs::metadata(source)?.permissions())?;
    result.persist(output).map_err(|e| e.error)?;

    Ok(output.to_path_buf())
}

fn temp_pdf(dir: &Path, stem: &str) -> io::Result<TempPath> {
    let file = tempfile::Builder::new()
        .prefix(&format!("tmp_{}_", stem))
        .suffix(".pdf")
        .tempfile_in(dir)?;
    Ok(file.into_temp_path())
}

/// Copy `source` to `<backup_dir>/<stem>_<unix-seconds>.pdf`.
///
/// A numeric suffix is added when that name is already taken.
fn backup_file(source: &Path, stem: &str, backup_dir: &Path) -> Result<PathBuf, CompressError> {
    fs::create_dir_all(backup_dir)?;
    let timestamp = chrono::Utc::now().timestamp();

    let mut attempt = 0u32;
    loop {
        let name = if attempt == 0 {
            format!("{}_{}.pdf", stem, timestamp)
        } else {
            format!("{}_{}_{}.pdf", stem, timestamp, attempt)
        };
        let candidate = backup_dir.join(name);

        match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(_) => {
                if let Err(e) = fs::copy(source, &candidate) {
                    if let Err(cleanup) = fs::remove_file(&candidate) {
                        log::warn!("Cannot remove {}: {}", candidate.display(), cleanup);
                    }
                    return Err(e.into());
                }
                log::debug!("Backed up {} to {}", source.display(), candidate.display());
                return Ok(candidate);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(e.into()),
        }
    }
}
