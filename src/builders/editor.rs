use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Opens a file for the user to review, blocking until they are done.
pub trait EditorLauncher {
    fn launch(&self, path: &Path) -> Result<()>;
}

/// Launches the user's editor, picked the same way git picks it.
pub struct SystemEditor {
    editor: String,
}

impl SystemEditor {
    pub fn new(editor: impl Into<String>) -> Self {
        Self {
            editor: editor.into(),
        }
    }

    /// `GIT_EDITOR`, then `core.editor`, then `VISUAL`, then `EDITOR`, then `vi`.
    pub fn resolve<F>(core_editor: Option<String>, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        let editor = non_empty(env("GIT_EDITOR"))
            .or_else(|| non_empty(core_editor))
            .or_else(|| non_empty(env("VISUAL")))
            .or_else(|| non_empty(env("EDITOR")))
            .unwrap_or_else(|| "vi".to_string());
        Self { editor }
    }

    pub fn editor(&self) -> &str {
        &self.editor
    }

    fn command(&self, path: &Path) -> Command {
        // Editor strings may carry arguments ("code --wait"), so let the shell split them.
        if cfg!(unix) {
            let mut cmd = Command::new("sh");
            cmd.arg("-c")
                .arg(format!("{} \"$@\"", self.editor))
                .arg(&self.editor)
                .arg(path);
            cmd
        } else {
            let mut cmd = Command::new(&self.editor);
            cmd.arg(path);
            cmd
        }
    }
}

impl EditorLauncher for SystemEditor {
    fn launch(&self, path: &Path) -> Result<()> {
        // ":" is git's way of saying "don't open an editor".
        if self.editor == ":" {
            return Ok(());
        }

        tracing::debug!("launching editor {}", self.editor);
        let status = self
            .command(path)
            .status()
            .with_context(|| format!("Failed to launch editor: {}", self.editor))?;

        if !status.success() {
            anyhow::bail!("Editor '{}' exited with status: {}", self.editor, status);
        }
        Ok(())
    }
}
