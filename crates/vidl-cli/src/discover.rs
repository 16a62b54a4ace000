// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Input discovery.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use walkdir::WalkDir;

/// Extensions of the C and C++ files picked up from directories.
pub const SOURCE_EXTENSIONS: &[&str] = &["h", "hh", "hpp", "hxx", "c", "cc", "cpp", "cxx"];

/// Expand `inputs` into the ordered list of files to scan.
///
/// Files are taken as given. Directories are walked recursively for
/// [`SOURCE_EXTENSIONS`], sorted by path so output is reproducible.
pub fn discover(inputs: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_file() {
            files.push(input.clone());
        } else if input.is_dir() {
            files.extend(walk(input)?);
        } else {
            bail!("input `{}` does not exist", input.display());
        }
    }
    Ok(files)
}

fn walk(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.with_context(|| format!("walking {}", root.display()))?;
        if entry.file_type().is_file() && is_source(entry.path()) {
            paths.push(entry.into_path());
        }
    }
    paths.sort();
    tracing::debug!(root = %root.display(), files = paths.len(), "discovered sources");
    Ok(paths)
}

fn is_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}
