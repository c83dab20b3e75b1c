use std::path::{Path, PathBuf};

use crate::core::git::{GitClient, is_executable};

/// Every hook name git documents, in the order githooks(5) lists them.
///
/// There is no way to enumerate the hooks a future git might run, so this list
/// is maintained by hand.
pub const HOOK_NAMES: &[&str] = &[
    "applypatch-msg",
    "pre-applypatch",
    "post-applypatch",
    "pre-commit",
    "pre-merge-commit",
    "prepare-commit-msg",
    "commit-msg",
    "post-commit",
    "pre-rebase",
    "post-checkout",
    "post-merge",
    "pre-push",
    "pre-receive",
    "update",
    "proc-receive",
    "post-receive",
    "post-update",
    "reference-transaction",
    "push-to-checkout",
    "pre-auto-gc",
    "post-rewrite",
    "sendemail-validate",
    "fsmonitor-watchman",
    "p4-changelist",
    "p4-prepare-changelist",
    "p4-post-changelist",
    "p4-pre-submit",
    "post-index-change",
];

pub const NO_REPOSITORY: &str = "not run from a git repository - no hooks to show\n";

/// Collects the "Configured Hooks" section: the name of every enabled hook.
pub fn configured_hooks(git: &dyn GitClient) -> String {
    if git.git_dir().is_none() {
        return NO_REPOSITORY.to_string();
    }
    let Some(hooks_dir) = git.hooks_dir() else {
        return String::new();
    };

    let mut out = String::new();
    for hook in HOOK_NAMES {
        if find_hook(&hooks_dir, hook).is_some() {
            tracing::debug!("found enabled hook {hook}");
            out.push_str(hook);
            out.push('\n');
        }
    }
    out
}

/// Returns the path of an enabled hook called `name` in `hooks_dir`.
pub fn find_hook(hooks_dir: &Path, name: &str) -> Option<PathBuf> {
    let path = hooks_dir.join(name);
    is_executable(&path).then_some(path)
}
