use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

pub const REPORT_PREFIX: &str = "git-bugreport";

/// Path of the report for a run at `now`: `<dir>/git-bugreport-YYYY-MM-DD.txt`.
///
/// The date is always taken in UTC, so the name depends only on `now`.
pub fn report_path(output_dir: Option<&Path>, now: DateTime<Utc>) -> PathBuf {
    let file_name = format!("{REPORT_PREFIX}-{}.txt", now.format("%F"));
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Writes `contents` to `path` in one go, replacing any previous report.
///
/// Missing leading directories are created first.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(path, contents)
        .with_context(|| format!("Failed to write report file {}", path.display()))?;
    tracing::debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
