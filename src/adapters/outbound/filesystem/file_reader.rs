use crate::build_info;
use crate::cmake_export::domain::DependencyGraph;
use crate::ports::outbound::{BuildInfoReader, ProjectNameResolver};
use crate::shared::error::ExportError;
use crate::shared::security::{ensure_regular_file, ensure_size_within_limit, MAX_BUILD_INFO_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Fixed name of the build info artifact Conan's `json` generator writes.
pub const BUILD_INFO_FILENAME: &str = "conanbuildinfo.json";

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements both BuildInfoReader and ProjectNameResolver
/// ports, providing file system access for the build info artifact and the
/// project directory name.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        ensure_regular_file(path, file_type)?;

        let file_size = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_type, e))?
            .len();
        ensure_size_within_limit(file_size, path, MAX_BUILD_INFO_SIZE)?;

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildInfoReader for FileSystemReader {
    fn read_dependency_graph(&self, project_path: &Path) -> Result<DependencyGraph> {
        let build_info_path = project_path.join(BUILD_INFO_FILENAME);

        if !build_info_path.exists() {
            return Err(ExportError::BuildInfoNotFound {
                path: build_info_path.clone(),
                suggestion: format!(
                    "conanbuildinfo.json does not exist in project directory \"{}\".\n   \
                     Please run 'conan install' with the 'json' generator first, or specify the correct directory with the --project-path option.",
                    project_path.display()
                ),
            }
            .into());
        }

        let content = self.safe_read_file(&build_info_path, BUILD_INFO_FILENAME)?;

        // Metadata errors carry their own package/field detail; only wrap
        // what is actually a malformed file.
        build_info::parse_build_info(&content).map_err(|e| {
            if e.downcast_ref::<ExportError>().is_some() {
                e
            } else {
                ExportError::BuildInfoParseError {
                    path: build_info_path,
                    details: e.to_string(),
                }
                .into()
            }
        })
    }
}

impl ProjectNameResolver for FileSystemReader {
    fn resolve_project_name(&self, project_path: &Path) -> Result<String> {
        let canonical = project_path
            .canonicalize()
            .map_err(|e| ExportError::InvalidProjectPath {
                path: project_path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let name = canonical
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ExportError::InvalidProjectPath {
                path: project_path.to_path_buf(),
                reason: "directory has no usable base name".to_string(),
            })?;

        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const MINIMAL_BUILD_INFO: &str = r#"
{
    "dependencies": [
        {"name": "glm", "version": "0.9.9.8", "rootpath": "/data/glm"}
    ]
}
"#;

    #[test]
    fn test_read_dependency_graph_success() {
        let temp_dir = TempDir::new().unwrap();
        let build_info_path = temp_dir.path().join(BUILD_INFO_FILENAME);
        fs::write(&build_info_path, MINIMAL_BUILD_INFO).unwrap();

        let reader = FileSystemReader::new();
        let graph = reader.read_dependency_graph(temp_dir.path()).unwrap();

        assert_eq!(graph.package_count(), 1);
        assert_eq!(graph.dependencies()[0].name(), "glm");
    }

    #[test]
    fn test_read_dependency_graph_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_dependency_graph(temp_dir.path());

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("conanbuildinfo.json not found"));
        assert!(err_string.contains("conan install"));
    }

    #[test]
    fn test_read_dependency_graph_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let build_info_path = temp_dir.path().join(BUILD_INFO_FILENAME);
        fs::write(&build_info_path, "not json {{{").unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_dependency_graph(temp_dir.path());

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to parse conanbuildinfo.json"));
    }

    #[test]
    fn test_read_dependency_graph_missing_metadata_detail_survives() {
        let temp_dir = TempDir::new().unwrap();
        let build_info_path = temp_dir.path().join(BUILD_INFO_FILENAME);
        fs::write(
            &build_info_path,
            r#"{"dependencies": [{"name": "glfw", "rootpath": "/x"}]}"#,
        )
        .unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_dependency_graph(temp_dir.path());

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("'glfw'"));
        assert!(err_string.contains("'version'"));
    }

    #[test]
    fn test_resolve_project_name_from_directory() {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path().join("exqudens-vulkan-test");
        fs::create_dir(&project_dir).unwrap();

        let resolver = FileSystemReader::new();
        let name = resolver.resolve_project_name(&project_dir).unwrap();

        assert_eq!(name, "exqudens-vulkan-test");
    }

    #[test]
    fn test_resolve_project_name_nonexistent_path() {
        let resolver = FileSystemReader::new();
        let result = resolver.resolve_project_name(Path::new("/nonexistent/project"));

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Invalid project path"));
    }

    #[test]
    fn test_resolve_project_name_filesystem_root() {
        let resolver = FileSystemReader::new();
        let result = resolver.resolve_project_name(Path::new("/"));

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("no usable base name"));
    }
}
