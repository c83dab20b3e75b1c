// This file is the module declaration file for the `builders` module.
// It declares and makes public all the sub-modules within the `src/builders`
// directory. Each one builds a piece of the final report or handles it once built.

// `editor` module:
// Opens the written report in the user's editor via the `EditorLauncher` trait.
pub mod editor;

// `hooks` module:
// The list of known hook names and the collector reporting which are enabled.
pub mod hooks;

// `objects` module:
// Collectors describing the object store: loose object counts, pack directory
// contents, the info directory and the alternates file.
pub mod objects;

// `reporter` module:
// The `Report` and `Section` types, the guidance template and the rendering
// of the final text.
pub mod reporter;

// `storage` module:
// Computes the dated report path and writes the report to disk.
pub mod storage;
