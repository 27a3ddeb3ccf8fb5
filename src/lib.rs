pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod job;
pub mod pool;
pub mod report;
pub mod scan;

pub use backend::Backend;
pub use cli::{Preset, ReportFormat};
pub use config::{Settings, WritePolicy};
pub use error::{BatchError, CompressError, ConfigError, ReportError};
pub use job::{compress_one, compress_to, FileOutcome, Status};
pub use pool::{run_batch, Progress};
pub use report::{human_size, Report};
pub use scan::{scan_pdfs, ScanIssue, ScanResult};

/// Everything a batch produced
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub scan: ScanResult,
    pub backend: Option<Backend>,
    pub report: Report,
}

/// High-level API for compressing a selection of files and folders.
///
/// This is the recommended entry point for library consumers. It scans
/// `settings.paths`, picks a backend, compresses every PDF found on the
/// worker pool and aggregates the results.
///
/// Configuration problems (bad ranges, a missing Ghostscript when it was
/// explicitly requested, a missing OCR tool when OCR is on) are returned as
/// errors. Per-file failures are not: they appear as error rows in the report.
/// When the scan finds nothing, no backend is probed and the report is empty.
///
/// # Example
///
/// ```no_run
/// use std::path::PathBuf;
/// use pdf_folder_compressor::{compress_paths, Preset, Settings};
///
/// let settings = Settings {
///     paths: vec![PathBuf::from("scans")],
///     preset: Preset::Aggressive,
///     ..Default::default()
/// };
///
/// let outcome = compress_paths(&settings, |p| {
///     eprintln!("[{}/{}] {}", p.done, p.total, p.file.display());
/// })
/// .unwrap();
///
/// print!("{}", outcome.report.render_table());
/// ```
pub fn compress_paths<F>(settings: &Settings, on_progress: F) -> Result<BatchOutcome, BatchError>
where
    F: Fn(Progress<'_>) + Sync,
{
    settings.validate()?;

    let scan = scan_pdfs(&settings.paths, settings.recursive);
    if scan.files.is_empty() {
        return Ok(BatchOutcome {
            scan,
            backend: None,
            report: Report::new(Vec::new()),
        });
    }

    backend::check_ocr(settings)?;
    let backend = Backend::detect(settings)?;

    let rows = run_batch(&scan.files, settings, &backend, on_progress)?;

    Ok(BatchOutcome {
        scan,
        backend: Some(backend),
        report: Report::new(rows),
    })
}
