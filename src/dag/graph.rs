// src/dag/graph.rs

use std::collections::HashMap;

use crate::config::model::{DependencyRecord, ProjectFile};
use crate::types::WorkId;

/// Dependency records indexed by both endpoints.
///
/// Acyclicity is checked in `config::validate`; here we only keep adjacency
/// for constraint assembly and arrow synthesis. Records may name works the
/// project does not know; lookups for those simply come back empty.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    records: Vec<DependencyRecord>,
    /// successor -> indices into `records`
    incoming: HashMap<WorkId, Vec<usize>>,
    /// predecessor -> indices into `records`
    outgoing: HashMap<WorkId, Vec<usize>>,
}

impl DependencyGraph {
    pub fn from_records(records: Vec<DependencyRecord>) -> Self {
        let mut incoming: HashMap<WorkId, Vec<usize>> = HashMap::new();
        let mut outgoing: HashMap<WorkId, Vec<usize>> = HashMap::new();

        for (idx, record) in records.iter().enumerate() {
            incoming.entry(record.work_id).or_default().push(idx);
            outgoing
                .entry(record.depends_on_work_id)
                .or_default()
                .push(idx);
        }

        Self {
            records,
            incoming,
            outgoing,
        }
    }

    /// Build from a validated [`ProjectFile`].
    pub fn from_project(project: &ProjectFile) -> Self {
        Self::from_records(project.dependency.clone())
    }

    /// All records, in source order.
    pub fn records(&self) -> &[DependencyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records where `work` is the successor.
    pub fn dependencies_of(&self, work: WorkId) -> impl Iterator<Item = &DependencyRecord> {
        self.select(self.incoming.get(&work))
    }

    /// Records where `work` is the predecessor.
    pub fn dependents_of(&self, work: WorkId) -> impl Iterator<Item = &DependencyRecord> {
        self.select(self.outgoing.get(&work))
    }

    fn select<'a>(
        &'a self,
        indices: Option<&'a Vec<usize>>,
    ) -> impl Iterator<Item = &'a DependencyRecord> + 'a {
        indices
            .into_iter()
            .flatten()
            .filter_map(move |&idx| self.records.get(idx))
    }
}
