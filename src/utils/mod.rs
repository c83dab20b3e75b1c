use anyhow::Result;
use chrono::Utc;
use std::path::{Path, PathBuf};

use crate::builders::editor::{EditorLauncher, SystemEditor};
use crate::builders::storage;
use crate::core::engine::ReportEngine;
use crate::core::git::{Git2Client, GitClient};

/// Builds the report, writes it and opens it for review. Returns the path
/// of the written report.
pub fn create_bug_report(output_dir: Option<&Path>) -> Result<PathBuf> {
    let git = Git2Client::discover();
    let editor = SystemEditor::resolve(git.editor(), |name| std::env::var(name).ok());
    generate_report(&git, output_dir, &editor)
}

pub fn generate_report(
    git: &dyn GitClient,
    output_dir: Option<&Path>,
    editor: &dyn EditorLauncher,
) -> Result<PathBuf> {
    let report = ReportEngine::new(git).build();
    let path = storage::report_path(output_dir, Utc::now());
    storage::write_report(&path, &report.render())?;

    eprintln!("Created new report at '{}'.", path.display());
    editor.launch(&path)?;
    Ok(path)
}
