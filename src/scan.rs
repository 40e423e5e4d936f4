//! Discovery and parallel loading of `.ts` files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use colored::Colorize;
use glob::Pattern;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::catalog::Catalog;

/// A catalog file that loaded successfully.
#[derive(Debug)]
pub struct LoadedCatalog {
    pub file_path: String,
    /// Locale from the `<TS language>` attribute, else from the file name.
    pub locale: String,
    pub catalog: Catalog,
}

/// A catalog file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub file_path: String,
    pub line: Option<usize>,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct CatalogScan {
    pub catalogs: Vec<LoadedCatalog>,
    pub failures: Vec<LoadFailure>,
    pub skipped_count: usize,
}

impl CatalogScan {
    pub fn files_checked(&self) -> usize {
        self.catalogs.len() + self.failures.len()
    }
}

/// Extracts a locale from a file name, dropping the configured prefix.
///
/// Examples:
/// - ("teamtalk_nl.ts", "teamtalk") -> "nl"
/// - ("nl_BE.ts", "") -> "nl_BE"
/// - ("/path/to/teamtalk_pt_BR.ts", "teamtalk") -> "pt_BR"
pub fn locale_from_path(path: impl AsRef<Path>, file_prefix: &str) -> Option<String> {
    let stem = path.as_ref().file_stem()?.to_str()?;
    let locale = if file_prefix.is_empty() {
        stem
    } else {
        stem.strip_prefix(file_prefix)
            .and_then(|rest| rest.strip_prefix('_'))
            .unwrap_or(stem)
    };
    Some(locale.to_string())
}

/// Find `.ts` files below `dir`, sorted by path.
pub fn find_ts_files(dir: &Path, ignores: &[String], verbose: bool) -> Result<(Vec<PathBuf>, usize)> {
    if !dir.exists() {
        bail!(
            "Translations directory '{}' does not exist.\n\
             Hint: Check your .tscatrc.json 'translationsDir' setting.",
            dir.display()
        );
    }
    if !dir.is_dir() {
        bail!("'{}' is not a directory.", dir.display());
    }

    let patterns: Vec<Pattern> = ignores
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
                None
            }
        })
        .collect();

    let mut files = Vec::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(dir) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        let path_str = path.to_string_lossy();

        if patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("ts") {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok((files, skipped_count))
}

/// Load the given files in parallel. Results keep the input order.
pub fn load_catalogs(paths: &[PathBuf], file_prefix: &str) -> CatalogScan {
    let results: Vec<Result<LoadedCatalog, LoadFailure>> = paths
        .par_iter()
        .map(|path| load_catalog_file(path, file_prefix))
        .collect();

    let mut scan = CatalogScan::default();
    for result in results {
        match result {
            Ok(loaded) => scan.catalogs.push(loaded),
            Err(failure) => scan.failures.push(failure),
        }
    }
    scan
}

/// Find and load every catalog below `dir`.
pub fn scan_translations(
    dir: &Path,
    file_prefix: &str,
    ignores: &[String],
    verbose: bool,
) -> Result<CatalogScan> {
    let (files, skipped_count) = find_ts_files(dir, ignores, verbose)?;
    let mut scan = load_catalogs(&files, file_prefix);
    scan.skipped_count = skipped_count;
    Ok(scan)
}

pub fn load_catalog_file(path: &Path, file_prefix: &str) -> Result<LoadedCatalog, LoadFailure> {
    let file_path = path.to_string_lossy().to_string();

    let bytes = fs::read(path).map_err(|e| LoadFailure {
        file_path: file_path.clone(),
        line: None,
        error: format!("Failed to read file: {}", e),
    })?;

    let catalog = Catalog::load(&bytes).map_err(|e| LoadFailure {
        file_path: file_path.clone(),
        line: e.line(),
        error: e.to_string(),
    })?;

    let locale = catalog
        .language()
        .map(str::to_string)
        .or_else(|| locale_from_path(path, file_prefix))
        .unwrap_or_default();

    Ok(LoadedCatalog {
        file_path,
        locale,
        catalog,
    })
}
