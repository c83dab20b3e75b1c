use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;
use walkdir::WalkDir;

/// Name of the file listing additional object stores.
pub const ALTERNATES: &str = "info/alternates";

pub const NO_ALTERNATES: &str = "No alternates file found.\n";

fn is_loose_object_dir(name: &str) -> bool {
    name.len() == 2 && name.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Collects the "Loose Object Counts" section.
///
/// Only two-hex-digit fan-out directories are considered, and only regular
/// files inside them are counted. Order follows the directory listing.
pub fn loose_object_counts(object_dir: &Path) -> String {
    let entries = match fs::read_dir(object_dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!("cannot read {}: {err}", object_dir.display());
            return format!("could not open object directory '{}'\n", object_dir.display());
        }
    };

    let mut out = String::new();
    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !is_loose_object_dir(name) || !entry.file_type().is_ok_and(|t| t.is_dir()) {
            continue;
        }

        let count = match fs::read_dir(entry.path()) {
            Ok(objects) => objects
                .flatten()
                .filter(|object| object.file_type().is_ok_and(|t| t.is_file()))
                .count(),
            Err(err) => {
                tracing::warn!("cannot read {}: {err}", entry.path().display());
                0
            }
        };
        out.push_str(&format!("{name}: {count}\n"));
    }
    out
}

/// Collects the "Packed Object Summary" section: one full path per entry of
/// the pack directory.
pub fn packed_object_summary(object_dir: &Path) -> String {
    let pack_dir = object_dir.join("pack");
    let entries = match fs::read_dir(&pack_dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!("cannot read {}: {err}", pack_dir.display());
            return format!("could not open pack directory '{}'\n", pack_dir.display());
        }
    };

    let mut out = String::new();
    for entry in entries.flatten() {
        out.push_str(&format!("{}\n", entry.path().display()));
    }
    out
}

/// Collects the "Object Info Summary" section: everything under the object
/// store's `info` directory, depth first.
///
/// Symlinks are listed but never followed.
pub fn object_info_summary(object_dir: &Path) -> String {
    let info_dir = object_dir.join("info");
    let mut out = String::new();

    for entry in WalkDir::new(&info_dir).min_depth(1).follow_links(false) {
        match entry {
            Ok(entry) => out.push_str(&format!("{}\n", entry.path().display())),
            Err(err) if err.depth() == 0 => {
                tracing::warn!("cannot read {}: {err}", info_dir.display());
                return format!("could not open info directory '{}'\n", info_dir.display());
            }
            Err(err) => tracing::warn!("skipping unreadable info entry: {err}"),
        }
    }
    out
}

/// Collects the "Alternates" section: how many alternate object stores are
/// listed and how many of them can actually be reached.
pub fn alternates_summary(object_dir: &Path) -> String {
    let path = object_dir.join(ALTERNATES);
    let file = match fs::File::open(&path) {
        Ok(file) => file,
        Err(_) => return NO_ALTERNATES.to_string(),
    };

    let mut working = 0usize;
    let mut broken = 0usize;
    for line in BufReader::new(file).lines() {
        let Ok(line) = line else {
            tracing::warn!("stopped reading {} at an unreadable line", path.display());
            break;
        };
        let alternate = line.trim_end();
        if alternate.is_empty() || alternate.starts_with('#') {
            continue;
        }

        // Relative entries are relative to the object directory itself.
        if object_dir.join(alternate).exists() {
            working += 1;
        } else {
            tracing::debug!("broken alternate {alternate}");
            broken += 1;
        }
    }

    format!(
        "{} alternates found ({working} working, {broken} broken)\n",
        working + broken
    )
}
