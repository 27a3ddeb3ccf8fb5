use anyhow::{Context, Result};
use clap::Parser;

use pdf_folder_compressor::cli::Args;
use pdf_folder_compressor::config::defaults::PREVIEW_LIMIT;
use pdf_folder_compressor::config::Settings;
use pdf_folder_compressor::{compress_paths, human_size, scan_pdfs, ScanResult, Status};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    let settings = Settings::from_args(&args);
    settings.validate().context("Invalid settings")?;

    if args.scan_only {
        let scan = scan_pdfs(&settings.paths, settings.recursive);
        print_diagnostics(&settings, &scan);
        return Ok(());
    }

    let outcome = compress_paths(&settings, |p| {
        eprintln!(
            "[{}/{}] {:>3.0}% {} {} ({} -> {})",
            p.done,
            p.total,
            p.fraction() * 100.0,
            p.outcome.status,
            p.file.display(),
            human_size(p.outcome.before),
            human_size(p.outcome.after),
        );
    })
    .context("Compression batch failed")?;

    for issue in &outcome.scan.issues {
        eprintln!("warning: {}", issue);
    }

    if outcome.report.is_empty() {
        eprintln!("No files to process. Check the paths given.");
        return Ok(());
    }

    if let Some(backend) = &outcome.backend {
        log::info!("Backend used: {}", backend);
    }

    print!("{}", outcome.report.render_table());

    for format in &settings.report_formats {
        let path = outcome
            .report
            .save(&settings.report_dir, *format)
            .with_context(|| {
                format!(
                    "Failed to write report to {}",
                    settings.report_dir.display()
                )
            })?;
        println!("Report saved: {}", path.display());
    }

    let failed = outcome
        .report
        .rows
        .iter()
        .filter(|r| r.status == Status::Error)
        .count();
    if failed > 0 {
        log::warn!("{} file(s) could not be compressed", failed);
    }

    Ok(())
}

fn print_diagnostics(settings: &Settings, scan: &ScanResult) {
    println!("Scan paths:");
    for path in &settings.paths {
        println!("  {}", path.display());
    }

    println!("Files found: {}", scan.files.len());
    for file in scan.files.iter().take(PREVIEW_LIMIT) {
        println!("  {}", file.display());
    }
    if scan.files.len() > PREVIEW_LIMIT {
        println!("  ... and {} more", scan.files.len() - PREVIEW_LIMIT);
    }

    if !scan.issues.is_empty() {
        println!("Issues:");
        for issue in &scan.issues {
            println!("  - {}", issue);
        }
    }
}
