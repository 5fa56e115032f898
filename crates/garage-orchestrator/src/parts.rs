//! Parts recommendation lookup over an [`IPartsGraph`].

use garage_core::models::PartsDependency;
use garage_core::traits::IPartsGraph;

/// Find the parts entry for a diagnosis.
///
/// Order: exact failure-mode key, exact component key, then the first key in
/// graph order that contains, or is contained in, either of them.
pub fn lookup_parts(
    graph: &dyn IPartsGraph,
    failure_mode: &str,
    component: &str,
) -> Option<PartsDependency> {
    let mode_key = failure_mode.to_lowercase();
    let component_key = component.to_lowercase().replace(' ', "_");

    if let Some(found) = graph.lookup(&mode_key) {
        return Some(found);
    }
    if let Some(found) = graph.lookup(&component_key) {
        return Some(found);
    }

    graph
        .keys()
        .into_iter()
        .find(|key| overlaps(key, &mode_key) || overlaps(key, &component_key))
        .and_then(|key| graph.lookup(&key))
}

fn overlaps(key: &str, target: &str) -> bool {
    !key.is_empty() && !target.is_empty() && (target.contains(key) || key.contains(target))
}

/// Parts graph held in memory, iterated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPartsGraph {
    entries: Vec<(String, PartsDependency)>,
}

impl InMemoryPartsGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry. A replaced entry keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, parts: PartsDependency) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = parts,
            None => self.entries.push((key, parts)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, parts: PartsDependency) -> Self {
        self.insert(key, parts);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IPartsGraph for InMemoryPartsGraph {
    fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }

    fn lookup(&self, key: &str) -> Option<PartsDependency> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, parts)| parts.clone())
    }
}
