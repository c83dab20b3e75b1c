use std::collections::HashSet;
use std::fmt;

/// Configuration keys that are safe to include in a bug report.
///
/// Keys are stored in git's canonical form: section and variable name in
/// lowercase. Nothing that can carry a credential, URL or personal identity
/// belongs in this list.
pub const SAFELIST: &[&str] = &[
    "core.autocrlf",
    "core.bare",
    "core.checkstat",
    "core.compression",
    "core.eol",
    "core.filemode",
    "core.fsmonitor",
    "core.ignorecase",
    "core.logallrefupdates",
    "core.multipackindex",
    "core.precomposeunicode",
    "core.preloadindex",
    "core.repositoryformatversion",
    "core.safecrlf",
    "core.sparsecheckout",
    "core.splitindex",
    "core.symlinks",
    "core.untrackedcache",
    "diff.algorithm",
    "extensions.objectformat",
    "extensions.worktreeconfig",
    "feature.experimental",
    "feature.manyfiles",
    "fetch.negotiationalgorithm",
    "fetch.parallel",
    "fetch.prune",
    "fetch.writecommitgraph",
    "gc.auto",
    "gc.writecommitgraph",
    "http.version",
    "index.threads",
    "index.version",
    "merge.conflictstyle",
    "pack.threads",
    "pack.usesparse",
    "protocol.version",
    "pull.ff",
    "pull.rebase",
    "push.default",
    "rebase.autosquash",
    "status.showuntrackedfiles",
    "submodule.recurse",
    "transfer.fsckobjects",
];

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    System,
    Global,
    Local,
    Worktree,
    Command,
    Unknown,
}

impl fmt::Display for ConfigScope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ConfigScope::System => "system",
            ConfigScope::Global => "global",
            ConfigScope::Local => "local",
            ConfigScope::Worktree => "worktree",
            ConfigScope::Command => "command",
            ConfigScope::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

impl From<git2::ConfigLevel> for ConfigScope {
    fn from(level: git2::ConfigLevel) -> Self {
        match level {
            git2::ConfigLevel::ProgramData | git2::ConfigLevel::System => ConfigScope::System,
            git2::ConfigLevel::XDG | git2::ConfigLevel::Global => ConfigScope::Global,
            git2::ConfigLevel::Local => ConfigScope::Local,
            git2::ConfigLevel::Worktree => ConfigScope::Worktree,
            git2::ConfigLevel::App | git2::ConfigLevel::Highest => ConfigScope::Unknown,
        }
    }
}

/// A single `key = value` pair as seen during configuration iteration.
///
/// The same key may show up several times (once per file that sets it); every
/// occurrence is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub scope: ConfigScope,
    pub value: String,
}

impl ConfigEntry {
    pub fn new(key: impl Into<String>, scope: ConfigScope, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            scope,
            value: value.into(),
        }
    }
}

/// Exact, case-sensitive membership set over configuration keys.
#[derive(Debug, Default)]
pub struct KeySet {
    keys: HashSet<String>,
}

impl KeySet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: HashSet::with_capacity(capacity),
        }
    }

    /// Builds the set from the static [`SAFELIST`].
    pub fn safelist() -> Self {
        let mut set = Self::with_capacity(SAFELIST.len());
        for key in SAFELIST {
            set.insert(key);
        }
        set
    }

    /// Adds `key`, returning `true` if it was already present.
    pub fn insert(&mut self, key: &str) -> bool {
        !self.keys.insert(key.to_string())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Renders every entry whose key is in `safelist`, in iteration order.
pub fn filter_config(entries: &[ConfigEntry], safelist: &KeySet) -> String {
    let mut out = String::new();
    for entry in entries.iter().filter(|e| safelist.contains(&e.key)) {
        out.push_str(&format!("{} ({}) : {}\n", entry.key, entry.scope, entry.value));
    }
    out
}

/// Collects the "Safelisted Config Info" section.
///
/// The key set lives only for the duration of this call.
pub fn safelisted_config_info(entries: &[ConfigEntry]) -> String {
    let mut safelist = KeySet::safelist();
    let out = filter_config(entries, &safelist);
    safelist.clear();
    out
}

/// Canonical form of a configuration key: section and variable name are
/// lowercased, a subsection (if any) is kept verbatim.
pub fn canonical_key(key: &str) -> String {
    let key = key.trim();
    match (key.find('.'), key.rfind('.')) {
        (Some(first), Some(last)) if first != last => format!(
            "{}{}{}",
            key[..first].to_ascii_lowercase(),
            &key[first..last],
            key[last..].to_ascii_lowercase()
        ),
        _ => key.to_ascii_lowercase(),
    }
}

/// Reads `-c`/`--config-env` overrides passed down through the
/// `GIT_CONFIG_COUNT` / `GIT_CONFIG_KEY_<n>` / `GIT_CONFIG_VALUE_<n>` environment.
pub fn command_line_entries<F>(lookup: F) -> Vec<ConfigEntry>
where
    F: Fn(&str) -> Option<String>,
{
    let count = match lookup("GIT_CONFIG_COUNT").and_then(|c| c.trim().parse::<usize>().ok()) {
        Some(count) => count,
        None => return Vec::new(),
    };

    let mut entries = Vec::new();
    for i in 0..count {
        let Some(key) = lookup(&format!("GIT_CONFIG_KEY_{i}")) else {
            tracing::warn!("missing GIT_CONFIG_KEY_{i}, ignoring remaining overrides");
            break;
        };
        let value = lookup(&format!("GIT_CONFIG_VALUE_{i}")).unwrap_or_default();
        entries.push(ConfigEntry::new(canonical_key(&key), ConfigScope::Command, value));
    }
    entries
}
