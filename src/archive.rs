use anyhow::{Context, Result};
use chrono::Local;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Move a pre-existing results file out of the way before a new run.
///
/// Returns the backup path, or `None` when there was nothing to archive.
/// The backup keeps the original file stem and gains a second-resolution
/// timestamp, e.g. `jobs_backup_20250114_093012.csv`.
pub fn archive_existing(results_file: &Path, backup_dir: &Path) -> Result<Option<PathBuf>> {
    if !results_file.exists() {
        return Ok(None);
    }

    fs::create_dir_all(backup_dir)
        .with_context(|| format!("Failed to create backup directory {}", backup_dir.display()))?;

    let stem = results_file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("results");
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");

    // Second-resolution timestamps collide when runs are close together;
    // never overwrite an earlier backup.
    let mut backup_path = backup_dir.join(format!("{}_backup_{}.csv", stem, timestamp));
    let mut attempt = 1;
    while backup_path.exists() {
        attempt += 1;
        backup_path = backup_dir.join(format!("{}_backup_{}_{}.csv", stem, timestamp, attempt));
    }

    fs::rename(results_file, &backup_path).with_context(|| {
        format!(
            "Failed to move {} to {}",
            results_file.display(),
            backup_path.display()
        )
    })?;

    info!(
        "Archived {} to {}",
        results_file.display(),
        backup_path.display()
    );

    Ok(Some(backup_path))
}
