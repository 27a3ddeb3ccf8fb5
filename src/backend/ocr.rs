//! OCR text layer via OCRmyPDF

use std::ffi::OsString;
use std::path::Path;

use crate::error::CompressError;

use super::process::{probe, run_tool};

/// Build the OCRmyPDF argument list. Pages that already carry text are skipped.
pub fn ocr_args(src: &Path, dst: &Path, language: &str) -> Vec<OsString> {
    vec![
        "--skip-text".into(),
        "--output-type".into(),
        "pdf".into(),
        "-l".into(),
        language.into(),
        src.as_os_str().to_os_string(),
        dst.as_os_str().to_os_string(),
    ]
}

/// Add a searchable text layer to `src`, writing the result to `dst`
pub fn run_ocr(program: &str, src: &Path, dst: &Path, language: &str) -> Result<(), CompressError> {
    run_tool(program, ocr_args(src, dst, language))?;
    Ok(())
}

/// Check if the OCR tool can be run
pub fn is_available(program: &str) -> bool {
    probe(program, "--version")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ocr_args() {
        let args = ocr_args(Path::new("a.pdf"), Path::new("b.pdf"), "eng+deu");
        let args: Vec<_> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(
            args,
            vec!["--skip-text", "--output-type", "pdf", "-l", "eng+deu", "a.pdf", "b.pdf"]
        );
    }
}
