//! Structural cleanup with lopdf
//!
//! Used when Ghostscript is not installed. Nothing is resampled; the document
//! is only tidied and its streams recompressed.

use std::path::Path;

use lopdf::Document;

use crate::error::CompressError;

/// Optimize a PDF's object graph and compress its streams.
///
/// Zero-length streams and unreachable objects are dropped, the remaining
/// objects renumbered, and every stream Flate-compressed before saving.
pub fn optimize_pdf(src: &Path, dst: &Path) -> Result<(), CompressError> {
    let mut doc = Document::load(src)?;

    if doc.is_encrypted() {
        return Err(CompressError::Encrypted);
    }

    let empty = doc.delete_zero_length_streams();
    let pruned = doc.prune_objects();
    log::debug!(
        "{}: removed {} empty stream(s), pruned {} object(s)",
        src.display(),
        empty.len(),
        pruned.len()
    );

    doc.renumber_objects();
    doc.compress();

    doc.save(dst)?;

    Ok(())
}
