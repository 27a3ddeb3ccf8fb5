use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::defaults::{
    DEFAULT_BACKUP_DIR, DEFAULT_OCR_LANGUAGE, DEFAULT_OUTPUT_DIR, DEFAULT_REPORT_DIR,
};

#[derive(Parser, Debug)]
#[command(name = "pdf-folder-compressor")]
#[command(
    author,
    version,
    about = "Batch-compress PDF files and folders with Ghostscript, lopdf and optional OCR"
)]
pub struct Args {
    /// PDF files or folders (comma-separated lists are accepted)
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Compression preset
    #[arg(short = 'p', long, value_enum, default_value = "balanced")]
    pub preset: Preset,

    /// Image resolution for the custom preset
    #[arg(long, default_value = "150", value_parser = clap::value_parser!(u32).range(72..=300))]
    pub dpi: u32,

    /// Overwrite the source files, keeping a backup copy of each
    #[arg(long)]
    pub overwrite: bool,

    /// Directory for compressed files (suffix mode)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Only scan the top level of each folder
    #[arg(long)]
    pub no_recursive: bool,

    /// Number of files compressed in parallel
    #[arg(short = 'j', long, default_value = "4", value_parser = clap::value_parser!(u8).range(1..=16))]
    pub workers: u8,

    /// Compression backend
    #[arg(long, value_enum, default_value = "auto")]
    pub backend: BackendChoice,

    /// Ghostscript executable
    #[arg(long = "gs", env = "PDF_COMPRESSOR_GS")]
    pub gs_program: Option<String>,

    /// Add a searchable text layer with OCR after compressing
    #[arg(long)]
    pub ocr: bool,

    /// OCR language(s), e.g. "eng" or "eng+deu"
    #[arg(long, default_value = DEFAULT_OCR_LANGUAGE)]
    pub ocr_language: String,

    /// OCR executable
    #[arg(long = "ocrmypdf", env = "PDF_COMPRESSOR_OCRMYPDF")]
    pub ocr_program: Option<String>,

    /// Directory for backups when overwriting
    #[arg(long, default_value = DEFAULT_BACKUP_DIR)]
    pub backup_dir: PathBuf,

    /// Directory for saved reports
    #[arg(long, default_value = DEFAULT_REPORT_DIR)]
    pub report_dir: PathBuf,

    /// Report file format (repeatable)
    #[arg(long = "report-format", value_enum, default_values_t = vec![ReportFormat::Csv])]
    pub report_formats: Vec<ReportFormat>,

    /// List what would be processed and exit
    #[arg(long)]
    pub scan_only: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Compression preset, mapped onto Ghostscript flags
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum Preset {
    /// Balanced quality and size (/printer)
    #[default]
    Balanced,
    /// Keep image quality (/default)
    Lossless,
    /// Smallest output (/screen)
    Aggressive,
    /// Downsample images to a chosen DPI
    Custom,
}

impl Preset {
    /// Value for Ghostscript's `-dPDFSETTINGS`, if the preset uses one
    pub fn pdf_settings(&self) -> Option<&'static str> {
        match self {
            Preset::Lossless => Some("/default"),
            Preset::Balanced => Some("/printer"),
            Preset::Aggressive => Some("/screen"),
            Preset::Custom => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum BackendChoice {
    /// Ghostscript when installed, lopdf otherwise
    #[default]
    Auto,
    Ghostscript,
    Lopdf,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Csv,
    Json,
    Html,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
            ReportFormat::Html => "html",
        }
    }
}

impl Args {
    /// Input paths after splitting comma lists and expanding `~`
    pub fn input_paths(&self) -> Vec<PathBuf> {
        parse_path_list(&self.paths)
    }

    /// Check if folders should be walked recursively
    pub fn recursive(&self) -> bool {
        !self.no_recursive
    }
}

/// Split comma-separated path lists into individual paths.
///
/// Whitespace and surrounding quotes are stripped from every item, a leading
/// `~` is expanded to the home directory, and empty items are dropped.
pub fn parse_path_list<S: AsRef<str>>(items: &[S]) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    for item in items {
        for part in item.as_ref().split(',') {
            let part = part.trim().trim_matches(|c| c == '"' || c == '\'').trim();
            if part.is_empty() {
                continue;
            }

            let expanded = shellexpand::tilde(part);
            paths.push(PathBuf::from(expanded.as_ref()));
        }
    }

    paths
}
