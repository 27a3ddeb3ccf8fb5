//! Ghostscript `pdfwrite` recompression

use std::ffi::OsString;
use std::path::Path;

use crate::cli::Preset;
use crate::error::CompressError;

use super::process::{probe, run_tool};

/// Build the Ghostscript argument list for one file.
pub fn ghostscript_args(src: &Path, dst: &Path, preset: Preset, dpi: u32) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "-sDEVICE=pdfwrite".into(),
        "-dCompatibilityLevel=1.5".into(),
    ];

    match preset.pdf_settings() {
        Some(settings) => args.push(format!("-dPDFSETTINGS={}", settings).into()),
        None => {
            args.push(format!("-dColorImageResolution={}", dpi).into());
            args.push(format!("-dGrayImageResolution={}", dpi).into());
        }
    }

    args.extend(
        ["-dDetectDuplicateImages=true", "-dNOPAUSE", "-dQUIET", "-dBATCH"]
            .into_iter()
            .map(OsString::from),
    );

    let mut output_flag = OsString::from("-sOutputFile=");
    output_flag.push(dst.as_os_str());
    args.push(output_flag);
    args.push(src.as_os_str().to_os_string());

    args
}

/// Recompress `src` into `dst` with the given preset
pub fn run_ghostscript(
    program: &str,
    src: &Path,
    dst: &Path,
    preset: Preset,
    dpi: u32,
) -> Result<(), CompressError> {
    run_tool(program, ghostscript_args(src, dst, preset, dpi))?;
    Ok(())
}

/// Check if Ghostscript can be run
pub fn is_available(program: &str) -> bool {
    probe(program, "-v")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn test_balanced_args() {
        let args = strings(&ghostscript_args(
            Path::new("in.pdf"),
            Path::new("out.pdf"),
            Preset::Balanced,
            150,
        ));
        assert_eq!(
            args,
            vec![
                "-sDEVICE=pdfwrite",
                "-dCompatibilityLevel=1.5",
                "-dPDFSETTINGS=/printer",
                "-dDetectDuplicateImages=true",
                "-dNOPAUSE",
                "-dQUIET",
                "-dBATCH",
                "-sOutputFile=out.pdf",
                "in.pdf",
            ]
        );
    }

    #[test]
    fn test_preset_settings_flags() {
        for (preset, flag) in [
            (Preset::Lossless, "-dPDFSETTINGS=/default"),
            (Preset::Aggressive, "-dPDFSETTINGS=/screen"),
        ] {
            let args = strings(&ghostscript_args(
                Path::new("in.pdf"),
                Path::new("out.pdf"),
                preset,
                150,
            ));
            assert!(args.contains(&flag.to_string()));
            assert!(!args.iter().any(|a| a.contains("ImageResolution")));
        }
    }

    #[test]
    fn test_custom_preset_uses_dpi() {
        let args = strings(&ghostscript_args(
            Path::new("in.pdf"),
            Path::new("out.pdf"),
            Preset::Custom,
            96,
        ));
        assert!(args.contains(&"-dColorImageResolution=96".to_string()));
        assert!(args.contains(&"-dGrayImageResolution=96".to_string()));
        assert!(!args.iter().any(|a| a.starts_with("-dPDFSETTINGS")));
    }

    #[test]
    fn test_paths_with_spaces_stay_single_arguments() {
        let args = ghostscript_args(
            Path::new("My Scans/in file.pdf"),
            Path::new("out dir/out.pdf"),
            Preset::Balanced,
            150,
        );
        assert_eq!(args.last().unwrap(), "My Scans/in file.pdf");
        assert_eq!(args[args.len() - 2], "-sOutputFile=out dir/out.pdf");
    }
}
