use anyhow::{Context, Result};
use std::path::PathBuf;

const DB_FILE: &str = "spendlog.db";

/// Resolved startup settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) db_path: PathBuf,
    /// Command-line arguments with the global flags removed.
    pub(crate) args: Vec<String>,
}

impl Config {
    /// Pull `--db <path>` out of `args`, falling back to the platform data
    /// directory.
    pub(crate) fn from_args(args: &[String]) -> Result<Self> {
        let (db_override, rest) = split_db_flag(args)?;
        let db_path = match db_override {
            Some(path) => PathBuf::from(crate::run::shellexpand(&path)),
            None => default_db_path()?,
        };
        Ok(Self {
            db_path,
            args: rest,
        })
    }

    pub(crate) fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.db_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
        }
        Ok(())
    }
}

fn split_db_flag(args: &[String]) -> Result<(Option<String>, Vec<String>)> {
    let mut db = None;
    let mut rest = Vec::with_capacity(args.len());
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--db" {
            let path = iter
                .next()
                .ok_or_else(|| anyhow::anyhow!("--db requires a path"))?;
            db = Some(path.clone());
        } else if let Some(path) = arg.strip_prefix("--db=") {
            db = Some(path.to_string());
        } else {
            rest.push(arg.clone());
        }
    }
    Ok((db, rest))
}

fn default_db_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "spendlog", "spendlog")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().join(DB_FILE))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
