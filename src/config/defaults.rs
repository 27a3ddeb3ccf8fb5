/// Image resolution used by the custom preset when none is given
pub const DEFAULT_DPI: u32 = 150;

/// Lowest accepted custom DPI
pub const MIN_DPI: u32 = 72;

/// Highest accepted custom DPI
pub const MAX_DPI: u32 = 300;

/// Default size of the worker pool
pub const DEFAULT_WORKERS: usize = 4;

/// Upper bound on the worker pool
pub const MAX_WORKERS: usize = 16;

/// Where compressed copies go in suffix mode
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Where originals are copied before being overwritten
pub const DEFAULT_BACKUP_DIR: &str = "backups";

/// Where batch reports are saved
pub const DEFAULT_REPORT_DIR: &str = "reports";

/// Appended to the file stem of compressed copies
pub const COMPRESSED_SUFFIX: &str = "_compressed";

/// Number of files listed by the scan diagnostics
pub const PREVIEW_LIMIT: usize = 50;

/// Tesseract language passed to the OCR tool
pub const DEFAULT_OCR_LANGUAGE: &str = "eng";

/// OCR executable looked up on PATH
pub const DEFAULT_OCR_PROGRAM: &str = "ocrmypdf";

/// Ghostscript executable looked up on PATH
#[cfg(windows)]
pub const DEFAULT_GS_PROGRAM: &str = "gswin64c";

/// Ghostscript executable looked up on PATH
#[cfg(not(windows))]
pub const DEFAULT_GS_PROGRAM: &str = "gs";
