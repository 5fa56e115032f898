//! Read-only taxonomy of valid diagnosis paths.

use std::collections::HashSet;

use tracing::debug;

use garage_core::models::TaxonomyPath;

use crate::builtin::SERVICE_TAXONOMY;

#[derive(Debug, Clone)]
struct ComponentEntry {
    name: String,
    failure_modes: Vec<String>,
}

#[derive(Debug, Clone)]
struct SystemEntry {
    name: String,
    components: Vec<ComponentEntry>,
}

/// Immutable system -> component -> failure-mode mapping.
///
/// Declaration order is preserved for listings; membership checks go through
/// a hash index of full paths.
#[derive(Debug, Clone)]
pub struct TaxonomyRegistry {
    systems: Vec<SystemEntry>,
    index: HashSet<TaxonomyPath>,
}

impl TaxonomyRegistry {
    /// The built-in automotive taxonomy (10 systems).
    pub fn builtin() -> Self {
        Self::from_paths(SERVICE_TAXONOMY.iter().flat_map(|(system, components)| {
            components.iter().flat_map(move |(component, modes)| {
                modes
                    .iter()
                    .map(move |mode| TaxonomyPath::new(*system, *component, *mode))
            })
        }))
    }

    /// Build from explicit paths. First occurrence fixes ordering; duplicates are ignored.
    pub fn from_paths(paths: impl IntoIterator<Item = TaxonomyPath>) -> Self {
        let mut systems: Vec<SystemEntry> = Vec::new();
        let mut index = HashSet::new();

        for path in paths {
            if !index.insert(path.clone()) {
                continue;
            }
            let system = match systems.iter().position(|s| s.name == path.system) {
                Some(i) => &mut systems[i],
                None => {
                    systems.push(SystemEntry {
                        name: path.system.clone(),
                        components: Vec::new(),
                    });
                    let last = systems.len() - 1;
                    &mut systems[last]
                }
            };
            match system
                .components
                .iter_mut()
                .find(|c| c.name == path.component)
            {
                Some(component) => component.failure_modes.push(path.failure_mode),
                None => system.components.push(ComponentEntry {
                    name: path.component,
                    failure_modes: vec![path.failure_mode],
                }),
            }
        }

        debug!(
            systems = systems.len(),
            paths = index.len(),
            "taxonomy registry built"
        );
        Self { systems, index }
    }

    /// Exact, case-sensitive membership check.
    pub fn validate_path(&self, system: &str, component: &str, failure_mode: &str) -> bool {
        self.index
            .contains(&TaxonomyPath::new(system, component, failure_mode))
    }

    pub fn contains(&self, path: &TaxonomyPath) -> bool {
        self.index.contains(path)
    }

    /// Trim and upper-case each segment, then check membership.
    pub fn canonicalize(
        &self,
        system: &str,
        component: &str,
        failure_mode: &str,
    ) -> Option<TaxonomyPath> {
        let path = TaxonomyPath::new(
            system.trim().to_uppercase(),
            component.trim().to_uppercase(),
            failure_mode.trim().to_uppercase(),
        );
        self.index.contains(&path).then_some(path)
    }

    pub fn systems(&self) -> Vec<&str> {
        self.systems.iter().map(|s| s.name.as_str()).collect()
    }

    /// Components of `system`, empty when the system is unknown.
    pub fn components_of(&self, system: &str) -> Vec<&str> {
        self.system(system)
            .map(|s| s.components.iter().map(|c| c.name.as_str()).collect())
            .unwrap_or_default()
    }

    /// Failure modes of `system -> component`, empty when either is unknown.
    pub fn failure_modes_of(&self, system: &str, component: &str) -> Vec<&str> {
        self.system(system)
            .and_then(|s| s.components.iter().find(|c| c.name == component))
            .map(|c| c.failure_modes.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Flattened listing handed to proposers.
    pub fn describe(&self) -> String {
        let mut lines = Vec::new();
        for system in &self.systems {
            lines.push(format!("SYSTEM: {}", system.name));
            for component in &system.components {
                lines.push(format!("  COMPONENT: {}", component.name));
                lines.push(format!(
                    "    FAILURE_MODES: {}",
                    component.failure_modes.join(", ")
                ));
            }
        }
        lines.join("\n")
    }

    pub fn path_count(&self) -> usize {
        self.index.len()
    }

    /// Every path in declaration order.
    pub fn paths(&self) -> impl Iterator<Item = TaxonomyPath> + '_ {
        self.systems.iter().flat_map(|s| {
            s.components.iter().flat_map(move |c| {
                c.failure_modes
                    .iter()
                    .map(move |m| TaxonomyPath::new(&s.name, &c.name, m))
            })
        })
    }

    fn system(&self, name: &str) -> Option<&SystemEntry> {
        self.systems.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_ten_systems_in_declaration_order() {
        let registry = TaxonomyRegistry::builtin();
        let systems = registry.systems();
        assert_eq!(systems.len(), 10);
        assert_eq!(systems[0], "POWERTRAIN");
        assert_eq!(systems[9], "TWO_WHEELER");
    }

    #[test]
    fn duplicate_paths_are_indexed_once() {
        let path = TaxonomyPath::new("A", "B", "C");
        let registry = TaxonomyRegistry::from_paths([path.clone(), path]);
        assert_eq!(registry.path_count(), 1);
        assert_eq!(registry.failure_modes_of("A", "B"), vec!["C"]);
    }
}
