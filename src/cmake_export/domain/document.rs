use super::find_type::FindType;
use crate::shared::Result;

/// Sentinel written in place of the version for ignore-listed packages.
/// The consuming CMake code treats it as "do not pin a version".
pub const IGNORE_SENTINEL: &str = "<ignore>";

/// Token joining multiple install paths of one dependency into a single
/// list entry. Chosen because it cannot appear in a filesystem path.
pub const MULTI_PATH_SEPARATOR: &str = "<sep>";

/// Maximum length for project names (security limit)
const MAX_PROJECT_NAME_LENGTH: usize = 255;

/// NewType wrapper for the project name that prefixes every generated
/// CMake variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Project name cannot be empty");
        }

        if name.len() > MAX_PROJECT_NAME_LENGTH {
            anyhow::bail!(
                "Project name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PROJECT_NAME_LENGTH
            );
        }

        // The name becomes part of a CMake variable identifier, so it must
        // stay free of whitespace, quotes and parentheses.
        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            anyhow::bail!(
                "Project name contains invalid characters. Only alphanumeric, hyphens, underscores, and dots are allowed."
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the generated variables are prefixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportPrefix {
    /// A concrete project name baked into the variable, e.g.
    /// `set(my-project_CONAN_PACKAGE_NAMES`.
    Named(ProjectName),
    /// The prefix is deferred to the including CMake project via
    /// `set("${PROJECT_NAME}_CONAN_PACKAGE_NAMES"`.
    ProjectNameVar,
}

/// One dependency after the export transform: version already masked where
/// requested, install paths already normalized and joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    conan_name: String,
    cmake_name: String,
    version: String,
    find_type: FindType,
    install_path: String,
}

impl ExportRow {
    pub fn new(
        conan_name: String,
        cmake_name: String,
        version: String,
        find_type: FindType,
        install_path: String,
    ) -> Self {
        Self {
            conan_name,
            cmake_name,
            version,
            find_type,
            install_path,
        }
    }

    pub fn conan_name(&self) -> &str {
        &self.conan_name
    }

    pub fn cmake_name(&self) -> &str {
        &self.cmake_name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn find_type(&self) -> FindType {
        self.find_type
    }

    pub fn install_path(&self) -> &str {
        &self.install_path
    }
}

/// The complete export document: one row per dependency, in output order.
///
/// Every generated list is a projection of the same row vector, which is
/// what keeps the lists index-aligned regardless of how many blocks are
/// rendered.
#[derive(Debug, Clone)]
pub struct ExportDocument {
    prefix: ExportPrefix,
    include_find_types: bool,
    rows: Vec<ExportRow>,
}

impl ExportDocument {
    pub fn new(prefix: ExportPrefix, include_find_types: bool, rows: Vec<ExportRow>) -> Self {
        Self {
            prefix,
            include_find_types,
            rows,
        }
    }

    pub fn prefix(&self) -> &ExportPrefix {
        &self.prefix
    }

    pub fn include_find_types(&self) -> bool {
        self.include_find_types
    }

    pub fn rows(&self) -> &[ExportRow] {
        &self.rows
    }

    pub fn package_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
