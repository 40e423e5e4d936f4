//! Shared setup for commands that scan a project's catalogs.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use super::args::CommonArgs;
use crate::{
    config::{Config, load_config},
    scan::{CatalogScan, scan_translations},
};

pub struct CheckContext {
    pub root: PathBuf,
    pub config: Config,
    pub config_from_file: bool,
    /// Translations directory resolved against `root`.
    pub translations_dir: PathBuf,
    pub verbose: bool,
}

impl CheckContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        Self::from_root(
            &common.path,
            common.translations_dir.as_deref(),
            common.verbose,
        )
    }

    pub fn from_root(root: &Path, translations_dir: Option<&Path>, verbose: bool) -> Result<Self> {
        let loaded = load_config(root)?;
        let translations_dir = resolve_dir(
            root,
            translations_dir.unwrap_or(Path::new(&loaded.config.translations_dir)),
        );
        debug!(
            root = %root.display(),
            translations_dir = %translations_dir.display(),
            from_file = loaded.from_file,
            "Resolved check context"
        );

        Ok(Self {
            root: root.to_path_buf(),
            config: loaded.config,
            config_from_file: loaded.from_file,
            translations_dir,
            verbose,
        })
    }

    pub fn scan(&self) -> Result<CatalogScan> {
        scan_translations(
            &self.translations_dir,
            &self.config.file_prefix,
            &self.config.ignores,
            self.verbose,
        )
    }
}

/// Relative directories are taken as-is when the root is the current directory,
/// so reported paths stay short (`./translations/app_nl.ts`).
fn resolve_dir(root: &Path, dir: &Path) -> PathBuf {
    if dir.is_absolute() || root == Path::new(".") {
        dir.to_path_buf()
    } else {
        root.join(dir)
    }
}
