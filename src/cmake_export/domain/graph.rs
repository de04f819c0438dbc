use super::dependency::ResolvedDependency;

/// DependencyGraph aggregate holding every resolved dependency in the order
/// the package manager reported them.
///
/// Resolution order is preserved because downstream CMake code relies on the
/// positional alignment of the generated lists; reordering only happens
/// through the explicit [`sorted_by_name`](Self::sorted_by_name) operation.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    dependencies: Vec<ResolvedDependency>,
}

impl DependencyGraph {
    pub fn new(dependencies: Vec<ResolvedDependency>) -> Self {
        Self { dependencies }
    }

    pub fn dependencies(&self) -> &[ResolvedDependency] {
        &self.dependencies
    }

    pub fn package_count(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// Returns a copy of the graph sorted by Conan package name.
    ///
    /// The sort is stable, so packages that compare equal keep their
    /// resolution order.
    pub fn sorted_by_name(&self) -> Self {
        let mut dependencies = self.dependencies.clone();
        dependencies.sort_by(|a, b| a.name().cmp(b.name()));
        Self { dependencies }
    }
}
