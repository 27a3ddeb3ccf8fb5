use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::cli::{Args, BackendChoice, Preset, ReportFormat};
use crate::error::ConfigError;

use super::defaults::*;

/// How compressed output is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WritePolicy {
    /// Write `<stem>_compressed.pdf` into the output directory
    #[default]
    Suffix,
    /// Replace the source file after copying it to the backup directory
    OverwriteWithBackup,
}

/// Runtime settings for a compression batch
#[derive(Debug, Clone)]
pub struct Settings {
    // Inputs
    pub paths: Vec<PathBuf>,
    pub recursive: bool,

    // Compression
    pub preset: Preset,
    pub dpi: u32,
    pub backend: BackendChoice,
    pub gs_program: String,

    // OCR
    pub ocr: bool,
    pub ocr_language: String,
    pub ocr_program: String,

    // Output
    pub write_policy: WritePolicy,
    pub output_dir: PathBuf,
    pub backup_dir: PathBuf,
    pub report_dir: PathBuf,
    pub report_formats: Vec<ReportFormat>,

    pub workers: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            recursive: true,

            preset: Preset::Balanced,
            dpi: DEFAULT_DPI,
            backend: BackendChoice::Auto,
            gs_program: DEFAULT_GS_PROGRAM.to_string(),

            ocr: false,
            ocr_language: DEFAULT_OCR_LANGUAGE.to_string(),
            ocr_program: DEFAULT_OCR_PROGRAM.to_string(),

            write_policy: WritePolicy::Suffix,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            backup_dir: PathBuf::from(DEFAULT_BACKUP_DIR),
            report_dir: PathBuf::from(DEFAULT_REPORT_DIR),
            report_formats: vec![ReportFormat::Csv],

            workers: DEFAULT_WORKERS,
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Self {
        let write_policy = if args.overwrite {
            WritePolicy::OverwriteWithBackup
        } else {
            WritePolicy::Suffix
        };

        Self {
            paths: args.input_paths(),
            recursive: args.recursive(),
            preset: args.preset,
            dpi: args.dpi,
            backend: args.backend,
            gs_program: args
                .gs_program
                .clone()
                .unwrap_or_else(|| DEFAULT_GS_PROGRAM.to_string()),
            ocr: args.ocr,
            ocr_language: args.ocr_language.clone(),
            ocr_program: args
                .ocr_program
                .clone()
                .unwrap_or_else(|| DEFAULT_OCR_PROGRAM.to_string()),
            write_policy,
            output_dir: args.output_dir.clone(),
            backup_dir: args.backup_dir.clone(),
            report_dir: args.report_dir.clone(),
            report_formats: args.report_formats.clone(),
            workers: usize::from(args.workers),
        }
    }

    /// Check ranges the CLI enforces, for settings built in code
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_DPI..=MAX_DPI).contains(&self.dpi) {
            return Err(ConfigError::InvalidDpi {
                value: self.dpi,
                min: MIN_DPI,
                max: MAX_DPI,
            });
        }

        if !(1..=MAX_WORKERS).contains(&self.workers) {
            return Err(ConfigError::InvalidWorkers {
                value: self.workers,
                max: MAX_WORKERS,
            });
        }

        if self.paths.is_empty() {
            return Err(ConfigError::NoPaths);
        }

        Ok(())
    }

    /// Where the compressed version of `source` is written
    pub fn output_path_for(&self, source: &Path) -> Option<PathBuf> {
        match self.write_policy {
            WritePolicy::OverwriteWithBackup => Some(source.to_path_buf()),
            WritePolicy::Suffix => {
                let stem = source.file_stem()?.to_string_lossy();
                Some(
                    self.output_dir
                        .join(format!("{}{}.pdf", stem, COMPRESSED_SUFFIX)),
                )
            }
        }
    }

    /// Output paths for a whole batch, in the order of `sources`.
    ///
    /// With the suffix policy, sources from different folders that share a
    /// stem get `_1`, `_2`, ... appended so no two outputs collide. Names are
    /// compared case-insensitively.
    pub fn output_paths_for(&self, sources: &[PathBuf]) -> Vec<Option<PathBuf>> {
        if self.write_policy == WritePolicy::OverwriteWithBackup {
            return sources.iter().map(|s| self.output_path_for(s)).collect();
        }

        let mut taken = HashSet::new();
        sources
            .iter()
            .map(|source| {
                let stem = source.file_stem()?.to_string_lossy();
                let mut attempt = 0u32;
                loop {
                    let name = if attempt == 0 {
                        format!("{}{}.pdf", stem, COMPRESSED_SUFFIX)
                    } else {
                        format!("{}{}_{}.pdf", stem, COMPRESSED_SUFFIX, attempt)
                    };
                    if taken.insert(name.to_lowercase()) {
                        return Some(self.output_dir.join(name));
                    }
                    attempt += 1;
                }
            })
            .collect()
    }

    /// Check if a backup copy is taken before writing
    pub fn takes_backups(&self) -> bool {
        self.write_policy == WritePolicy::OverwriteWithBackup
    }
}
