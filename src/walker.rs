use anyhow::{bail, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;
use walkdir::WalkDir;

use crate::models::ArchiveFile;

/// Recursively enumerate regular files under `root`.
///
/// Returns one [`ArchiveFile`] per file, with the relative path expressed
/// with `/` separators regardless of host platform. Paths matching
/// `exclude_globs` are skipped. Fails if `root` does not exist or is not a
/// directory. Results are sorted lexicographically by relative path so the
/// report ordering is reproducible across runs.
pub fn walk_files(root: &Path, exclude_globs: &[String]) -> Result<Vec<ArchiveFile>> {
    if !root.is_dir() {
        bail!("scan root does not exist or is not a directory: {}", root.display());
    }

    let exclude_set = build_globset(exclude_globs)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let rel_str = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if exclude_set.is_match(&rel_str) {
            continue;
        }

        files.push(ArchiveFile {
            relative_path: rel_str,
            absolute_path: path.to_path_buf(),
        });
    }

    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    Ok(files)
}

/// Keep only files whose name ends in `.{extension}`.
pub fn filter_extension(files: Vec<ArchiveFile>, extension: &str) -> Vec<ArchiveFile> {
    let suffix = format!(".{}", extension);
    files
        .into_iter()
        .filter(|f| f.relative_path.ends_with(&suffix))
        .collect()
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}
