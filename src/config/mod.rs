// src/config/mod.rs

//! Project snapshot loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a project file from disk (`loader.rs`).
//! - Validate invariants like acyclic dependencies (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_with_fs, parse_project};
pub use model::{
    DependencyRecord, GridSection, LayoutSection, ProjectFile, RawProjectFile, WorkConfig,
};
pub use validate::validate_raw_project;
