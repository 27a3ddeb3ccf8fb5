//! Bounded worker pool for a batch of files

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::backend::Backend;
use crate::config::{Settings, WritePolicy};
use crate::job::{compress_to, FileOutcome};

/// Progress after one more file has finished
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    pub done: usize,
    pub total: usize,
    pub file: &'a Path,
    pub outcome: &'a FileOutcome,
}

impl Progress<'_> {
    /// Completed fraction in `0.0..=1.0`
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.done as f64 / self.total as f64
        }
    }
}

/// Compress `files` on `settings.workers` threads.
///
/// Output names are planned for the whole batch up front. `on_progress` runs
/// once per finished file, from whichever worker finished it. Results come
/// back in the same order as `files`.
pub fn run_batch<F>(
    files: &[PathBuf],
    settings: &Settings,
    backend: &Backend,
    on_progress: F,
) -> std::io::Result<Vec<FileOutcome>>
where
    F: Fn(Progress<'_>) + Sync,
{
    if files.is_empty() {
        return Ok(Vec::new());
    }

    if settings.write_policy == WritePolicy::Suffix {
        fs::create_dir_all(&settings.output_dir)?;
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(settings.workers.max(1))
        .thread_name(|i| format!("compress-{}", i))
        .build()
        .map_err(std::io::Error::other)?;

    log::info!(
        "Compressing {} file(s) with {} worker(s) using {}",
        files.len(),
        settings.workers,
        backend
    );

    let total = files.len();
    let done = AtomicUsize::new(0);
    let outputs = settings.output_paths_for(files);

    let outcomes: Vec<FileOutcome> = pool.install(|| {
        files
            .par_iter()
            .zip(outputs.par_iter())
            .map(|(file, output)| {
                let outcome = compress_to(file, output.as_deref(), settings, backend);
                let finished = done.fetch_add(1, Ordering::SeqCst) + 1;
                on_progress(Progress {
                    done: finished,
                    total,
                    file,
                    outcome: &outcome,
                });
                outcome
            })
            .collect()
    });

    Ok(outcomes)
}
