use anyhow::{Context, Result};
use git2::{Config, Repository};
use std::path::{Path, PathBuf};

use crate::core::config::{self, ConfigEntry, ConfigScope};

/// Trait defining the repository queries the report needs.
/// This abstraction allows for easier testing and decoupling from specific git implementations.
pub trait GitClient {
    /// Returns the git directory, or `None` when not run from a repository.
    fn git_dir(&self) -> Option<PathBuf>;

    /// Returns the object store root (`$GIT_DIR/objects` unless overridden).
    fn object_dir(&self) -> Option<PathBuf>;

    /// Returns the directory hooks are looked up in.
    fn hooks_dir(&self) -> Option<PathBuf>;

    /// Every configuration entry visible to this invocation, in iteration order.
    fn config_entries(&self) -> Result<Vec<ConfigEntry>>;

    /// The configured editor (`core.editor`), if any.
    fn editor(&self) -> Option<String> {
        None
    }
}

/// Concrete implementation of GitClient using the git2 crate.
pub struct Git2Client {
    repo: Option<Repository>,
}

impl Git2Client {
    /// Discovers the repository the way git does, honouring `GIT_DIR` and
    /// friends. Not being inside a repository is not an error.
    pub fn discover() -> Self {
        let repo = match Repository::open_from_env() {
            Ok(repo) => Some(repo),
            Err(err) => {
                tracing::debug!("not inside a repository: {}", err.message());
                None
            }
        };
        Self { repo }
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::open(path.as_ref())
            .with_context(|| format!("Failed to open repository at {}", path.as_ref().display()))?;
        Ok(Self { repo: Some(repo) })
    }

    /// A client with no repository context.
    pub fn outside_repository() -> Self {
        Self { repo: None }
    }

    fn config(&self) -> Result<Config> {
        let config = match &self.repo {
            Some(repo) => repo.config().context("Failed to read repository config")?,
            None => Config::open_default().context("Failed to read default config")?,
        };
        Ok(config)
    }

    fn common_dir(&self) -> Option<PathBuf> {
        self.repo.as_ref().map(|repo| repo.commondir().to_path_buf())
    }
}

impl GitClient for Git2Client {
    fn git_dir(&self) -> Option<PathBuf> {
        self.repo.as_ref().map(|repo| repo.path().to_path_buf())
    }

    fn object_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = std::env::var_os("GIT_OBJECT_DIRECTORY")
            && !dir.is_empty()
        {
            return Some(PathBuf::from(dir));
        }
        self.common_dir().map(|dir| dir.join("objects"))
    }

    fn hooks_dir(&self) -> Option<PathBuf> {
        let repo = self.repo.as_ref()?;
        let hooks_path = self
            .config()
            .ok()
            .and_then(|config| config.get_path("core.hooksPath").ok());

        match hooks_path {
            Some(path) if path.is_absolute() => Some(path),
            // Relative hook paths are resolved against the working tree, or the
            // git directory for bare repositories.
            Some(path) => Some(repo.workdir().unwrap_or(repo.path()).join(path)),
            None => self.common_dir().map(|dir| dir.join("hooks")),
        }
    }

    fn config_entries(&self) -> Result<Vec<ConfigEntry>> {
        let config = self.config()?;
        let mut entries = Vec::new();

        let mut iter = config.entries(None).context("Failed to iterate config")?;
        while let Some(entry) = iter.next() {
            let entry = entry.context("Failed to read config entry")?;
            let Some(key) = entry.name() else {
                continue;
            };
            // A key with no value ("[core] symlinks") is an implicit true.
            let value = if entry.has_value() {
                String::from_utf8_lossy(entry.value_bytes()).into_owned()
            } else {
                "true".to_string()
            };
            entries.push(ConfigEntry::new(key, ConfigScope::from(entry.level()), value));
        }

        entries.extend(config::command_line_entries(|name| std::env::var(name).ok()));
        Ok(entries)
    }

    fn editor(&self) -> Option<String> {
        self.config().ok()?.get_string("core.editor").ok()
    }
}

/// Whether `path` is a regular file git would run as a hook.
pub fn is_executable(path: &Path) -> bool {
    let Ok(metadata) = std::fs::metadata(path) else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        true
    }
}
