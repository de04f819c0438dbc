use crate::cmake_export::domain::DependencyGraph;
use crate::shared::Result;
use std::path::Path;

/// BuildInfoReader port for loading the resolved dependency graph
///
/// This port abstracts the file system operations needed to read and parse
/// the conanbuildinfo.json file Conan's `json` generator writes into a
/// project directory.
pub trait BuildInfoReader {
    /// Reads the resolved dependency graph for the specified project
    ///
    /// # Arguments
    /// * `project_path` - Path to the project directory containing conanbuildinfo.json
    ///
    /// # Returns
    /// The dependency graph in resolution order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The conanbuildinfo.json file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    /// - The file is not valid build info JSON
    /// - A dependency entry is missing a required metadata field
    fn read_dependency_graph(&self, project_path: &Path) -> Result<DependencyGraph>;
}
