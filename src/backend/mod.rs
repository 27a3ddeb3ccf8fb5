//! Compression backends
//!
//! Ghostscript does the actual recompression. When it is missing, lopdf
//! performs a structural cleanup instead. OCR is an optional extra pass.

pub mod ghostscript;
pub mod ocr;
pub mod process;
pub mod structural;

use std::fmt;
use std::path::Path;

use crate::cli::{BackendChoice, Preset};
use crate::config::Settings;
use crate::error::{CompressError, ConfigError};

pub use ghostscript::ghostscript_args;
pub use ocr::ocr_args;
pub use structural::optimize_pdf;

/// The tool that performs compression for a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Ghostscript { program: String },
    Lopdf,
}

impl Backend {
    /// Pick the backend for a batch, probing Ghostscript once
    pub fn detect(settings: &Settings) -> Result<Self, ConfigError> {
        match settings.backend {
            BackendChoice::Lopdf => Ok(Backend::Lopdf),
            BackendChoice::Ghostscript => {
                if ghostscript::is_available(&settings.gs_program) {
                    Ok(Backend::Ghostscript {
                        program: settings.gs_program.clone(),
                    })
                } else {
                    Err(ConfigError::GhostscriptUnavailable(
                        settings.gs_program.clone(),
                    ))
                }
            }
            BackendChoice::Auto => {
                if ghostscript::is_available(&settings.gs_program) {
                    Ok(Backend::Ghostscript {
                        program: settings.gs_program.clone(),
                    })
                } else {
                    log::warn!(
                        "Ghostscript ('{}') not found, falling back to lopdf stream compression",
                        settings.gs_program
                    );
                    Ok(Backend::Lopdf)
                }
            }
        }
    }

    /// Compress `src` into `dst`
    pub fn compress(
        &self,
        src: &Path,
        dst: &Path,
        preset: Preset,
        dpi: u32,
    ) -> Result<(), CompressError> {
        match self {
            Backend::Ghostscript { program } => {
                ghostscript::run_ghostscript(program, src, dst, preset, dpi)
            }
            Backend::Lopdf => optimize_pdf(src, dst),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Ghostscript { program } => write!(f, "Ghostscript ({})", program),
            Backend::Lopdf => write!(f, "lopdf"),
        }
    }
}

/// Fail early when OCR is requested but the tool cannot run
pub fn check_ocr(settings: &Settings) -> Result<(), ConfigError> {
    if settings.ocr && !ocr::is_available(&settings.ocr_program) {
        return Err(ConfigError::OcrUnavailable(settings.ocr_program.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING: &str = "pdf-folder-compressor-no-such-tool";

    #[test]
    fn test_explicit_lopdf() {
        let settings = Settings {
            backend: BackendChoice::Lopdf,
            ..Default::default()
        };
        assert_eq!(Backend::detect(&settings).unwrap(), Backend::Lopdf);
    }

    #[test]
    fn test_auto_falls_back_to_lopdf() {
        let settings = Settings {
            gs_program: MISSING.to_string(),
            ..Default::default()
        };
        assert_eq!(Backend::detect(&settings).unwrap(), Backend::Lopdf);
    }

    #[test]
    fn test_explicit_ghostscript_must_exist() {
        let settings = Settings {
            backend: BackendChoice::Ghostscript,
            gs_program: MISSING.to_string(),
            ..Default::default()
        };
        assert!(matches!(
            Backend::detect(&settings),
            Err(ConfigError::GhostscriptUnavailable(_))
        ));
    }

    #[test]
    fn test_check_ocr() {
        let mut settings = Settings {
            ocr_program: MISSING.to_string(),
            ..Default::default()
        };
        assert!(check_ocr(&settings).is_ok());

        settings.ocr = true;
        assert!(matches!(
            check_ocr(&settings),
            Err(ConfigError::OcrUnavailable(_))
        ));
    }
}
