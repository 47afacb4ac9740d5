// src/dag/mod.rs

//! Work dependency graph.
//!
//! - [`graph`] indexes dependency records by successor and predecessor.
//! - [`constraints`] joins those records with work dates and runs the
//!   constraint evaluator per work.

pub mod constraints;
pub mod graph;

pub use constraints::{
    constraints_for, evaluate_all, evaluate_work, index_dates, DateIndex, WorkReport,
};
pub use graph::DependencyGraph;
