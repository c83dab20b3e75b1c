// This file is the module declaration file for the `core` module.
// It declares the submodules contained within `src/core/` and exposes them
// to the rest of the crate.

// `config` module:
// The configuration safelist, the key set used to filter live configuration
// against it, and the model for a single configuration entry and its scope.
pub mod config;

// `engine` module:
// Assembles the report by running every collector in a fixed order.
pub mod engine;

// `git` module:
// The `GitClient` trait and its `git2`-backed implementation: repository
// discovery, object store and hooks locations, configuration enumeration.
pub mod git;

// `version` module:
// The system information collector (versions, uname, libc, shell, HTTP helper).
pub mod version;
