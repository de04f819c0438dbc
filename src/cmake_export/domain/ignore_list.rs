use super::graph::DependencyGraph;

/// Set of package names whose version is masked in the generated output.
///
/// Matching is exact and case-sensitive on the Conan package name. Entries
/// that match nothing in the graph are reported so a typo in configuration
/// does not silently export a real version.
#[derive(Debug, Clone, Default)]
pub struct IgnoreList {
    entries: Vec<String>,
}

impl IgnoreList {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns true when the given package's version must be masked.
    pub fn is_ignored(&self, package_name: &str) -> bool {
        self.entries.iter().any(|entry| entry == package_name)
    }

    /// Returns the entries that match no package in the graph.
    pub fn unmatched_entries(&self, graph: &DependencyGraph) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| {
                !graph
                    .dependencies()
                    .iter()
                    .any(|dep| dep.name() == entry.as_str())
            })
            .cloned()
            .collect()
    }
}
