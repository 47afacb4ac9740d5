// src/config/loader.rs

use std::path::Path;

use crate::config::model::{ProjectFile, RawProjectFile};
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};

/// Load a project file from a given path and return the raw `RawProjectFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (cycles, duplicate ids, etc.). Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawProjectFile> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    let project: RawProjectFile = toml::from_str(&contents)?;
    Ok(project)
}

/// Load a project file from path and run validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for duplicate ids, self-dependencies, cycles and layout sanity.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ProjectFile> {
    load_with_fs(&RealFileSystem, path.as_ref())
}

/// Same as [`load_and_validate`], reading through the given filesystem.
pub fn load_with_fs(fs: &dyn FileSystem, path: &Path) -> Result<ProjectFile> {
    let contents = fs.read_to_string(path)?;
    parse_project(&contents)
}

/// Parse and validate project TOML that has already been read.
pub fn parse_project(contents: &str) -> Result<ProjectFile> {
    let raw: RawProjectFile = toml::from_str(contents)?;
    ProjectFile::try_from(raw)
}
