use crate::shared::Result;
use std::path::Path;

/// ProjectNameResolver port for deriving the default project name
///
/// When no explicit project name is supplied, the name that prefixes the
/// generated CMake variables is taken from the project directory itself.
pub trait ProjectNameResolver {
    /// Resolves the project name for the specified project directory
    ///
    /// # Arguments
    /// * `project_path` - Path to the project directory
    ///
    /// # Returns
    /// The project name, typically the directory's base name
    ///
    /// # Errors
    /// Returns an error if:
    /// - The path does not exist or is not a directory
    /// - The directory has no usable base name (e.g., filesystem root)
    fn resolve_project_name(&self, project_path: &Path) -> Result<String>;
}
