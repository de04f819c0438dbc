use std::path::PathBuf;

/// ExportRequest - Internal request DTO for the export use case
///
/// This DTO carries everything the use case needs, already merged from
/// command-line arguments and the optional configuration file.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    /// Path to the project directory containing conanbuildinfo.json
    pub project_path: PathBuf,
    /// Explicit project name; when None the name is derived from the directory
    pub project_name: Option<String>,
    /// Emit the `"${PROJECT_NAME}_..."` variable form instead of a baked-in name
    pub use_project_name_var: bool,
    /// Package names whose version is masked with the ignore sentinel
    pub ignore_versions: Vec<String>,
    /// Replacement module-package list for find-type classification
    pub module_packages: Option<Vec<String>>,
    /// Whether the FIND_TYPES block is emitted
    pub include_find_types: bool,
    /// Sort packages by name instead of keeping resolution order
    pub sort_by_name: bool,
}

impl ExportRequest {
    pub fn new(
        project_path: PathBuf,
        project_name: Option<String>,
        use_project_name_var: bool,
        ignore_versions: Vec<String>,
        module_packages: Option<Vec<String>>,
        include_find_types: bool,
        sort_by_name: bool,
    ) -> Self {
        Self {
            project_path,
            project_name,
            use_project_name_var,
            ignore_versions,
            module_packages,
            include_find_types,
            sort_by_name,
        }
    }
}
