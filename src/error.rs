use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("DPI must be between {min} and {max}, got {value}")]
    InvalidDpi { value: u32, min: u32, max: u32 },

    #[error("Worker count must be between 1 and {max}, got {value}")]
    InvalidWorkers { value: usize, max: usize },

    #[error("No input paths given")]
    NoPaths,

    #[error("Ghostscript executable '{0}' not found or not runnable")]
    GhostscriptUnavailable(String),

    #[error("OCR executable '{0}' not found or not runnable")]
    OcrUnavailable(String),
}

#[derive(Error, Debug)]
pub enum CompressError {
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    ToolFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("PDF processing error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Encrypted PDFs are not supported by the lopdf backend")]
    Encrypted,

    #[error("File has no usable name: {0}")]
    InvalidFileName(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to render report")]
    Format(#[from] std::fmt::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum BatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
