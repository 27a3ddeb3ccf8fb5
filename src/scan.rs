//! Input discovery
//!
//! Turns the user's file and folder selection into a de-duplicated list of
//! PDF files, collecting anything unusable as issues instead of failing.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// A path that could not be scanned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanIssue {
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for ScanIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Files found by a scan, plus the paths that were skipped
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub files: Vec<PathBuf>,
    pub issues: Vec<ScanIssue>,
}

/// Check if a path has a `.pdf` extension, ignoring case
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Collect PDF files from a mix of file and folder paths.
///
/// Folders are walked in file-name order, recursively unless `recursive` is
/// false. Results are canonicalized and de-duplicated, keeping the first
/// occurrence.
pub fn scan_pdfs(paths: &[PathBuf], recursive: bool) -> ScanResult {
    let mut found = Vec::new();
    let mut issues = Vec::new();

    for path in paths {
        if path.is_file() && is_pdf(path) {
            found.push(path.clone());
        } else if path.is_dir() {
            let max_depth = if recursive { usize::MAX } else { 1 };
            let walker = WalkDir::new(path)
                .max_depth(max_depth)
                .sort_by_file_name();

            for entry in walker {
                match entry {
                    // `Path::is_file` follows symlinks; `file_type` does not
                    Ok(entry) if entry.path().is_file() && is_pdf(entry.path()) => {
                        found.push(entry.into_path());
                    }
                    Ok(_) => {}
                    Err(e) => {
                        let issue_path = e.path().unwrap_or(path.as_path()).to_path_buf();
                        log::warn!("Skipping {}: {}", issue_path.display(), e);
                        issues.push(ScanIssue {
                            path: issue_path,
                            message: e.to_string(),
                        });
                    }
                }
            }
        } else {
            log::warn!("Path not found or not accessible: {}", path.display());
            issues.push(ScanIssue {
                path: path.clone(),
                message: "Path not found or not accessible".to_string(),
            });
        }
    }

    let mut seen = HashSet::new();
    let mut files = Vec::with_capacity(found.len());
    for file in found {
        let resolved = match file.canonicalize() {
            Ok(p) => p,
            Err(e) => {
                issues.push(ScanIssue {
                    path: file,
                    message: e.to_string(),
                });
                continue;
            }
        };
        if seen.insert(resolved.clone()) {
            files.push(resolved);
        }
    }

    log::info!(
        "Scanned {} path(s): {} PDF(s), {} issue(s)",
        paths.len(),
        files.len(),
        issues.len()
    );

    ScanResult { files, issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"%PDF-1.5\n").unwrap();
    }

    #[test]
    fn test_is_pdf() {
        assert!(is_pdf(Path::new("a.pdf")));
        assert!(is_pdf(Path::new("A.PDF")));
        assert!(!is_pdf(Path::new("a.pdf.txt")));
        assert!(!is_pdf(Path::new("pdf")));
    }

    #[test]
    fn test_scan_recursive_and_flat() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("b.pdf"));
        touch(&dir.path().join("a.PDF"));
        touch(&dir.path().join("notes.txt"));
        touch(&dir.path().join("nested/c.pdf"));

        let all = scan_pdfs(&[dir.path().to_path_buf()], true);
        assert_eq!(all.files.len(), 3);
        assert!(all.issues.is_empty());

        let flat = scan_pdfs(&[dir.path().to_path_buf()], false);
        let names: Vec<_> = flat
            .files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.PDF", "b.pdf"]);
    }

    #[test]
    fn test_scan_deduplicates() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("doc.pdf");
        touch(&file);

        let result = scan_pdfs(&[file.clone(), dir.path().to_path_buf(), file], true);
        assert_eq!(result.files.len(), 1);
    }

    #[test]
    fn test_scan_reports_missing_and_non_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let text = dir.path().join("readme.txt");
        fs::write(&text, "hi").unwrap();
        let missing = dir.path().join("missing");

        let result = scan_pdfs(&[missing.clone(), text], true);
        assert!(result.files.is_empty());
        assert_eq!(result.issues.len(), 2);
        assert_eq!(result.issues[0].path, missing);
        assert!(result.issues[0].to_string().contains("not found"));
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_follows_symlinked_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("elsewhere/real.pdf");
        touch(&target);
        let folder = dir.path().join("inbox");
        fs::create_dir_all(&folder).unwrap();
        std::os::unix::fs::symlink(&target, folder.join("link.pdf")).unwrap();

        let result = scan_pdfs(&[folder], true);
        assert!(result.issues.is_empty());
        assert_eq!(result.files, vec![target.canonicalize().unwrap()]);
    }
}
