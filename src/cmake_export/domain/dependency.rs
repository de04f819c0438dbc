use super::package::{PackageName, Version};
use crate::shared::Result;

/// Maximum length for CMake package names (security limit)
const MAX_CMAKE_NAME_LENGTH: usize = 255;

/// NewType wrapper for the name a CMake `find_package()` call uses.
///
/// Conan and CMake frequently disagree on naming (`vulkan` vs `Vulkan`,
/// `glfw` vs `glfw3`), so this is kept distinct from [`PackageName`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CmakeName(String);

impl CmakeName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("CMake package name cannot be empty");
        }

        if name.len() > MAX_CMAKE_NAME_LENGTH {
            anyhow::bail!(
                "CMake package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_CMAKE_NAME_LENGTH
            );
        }

        // Same charset as Conan names: keeps the quoted list entries syntactically inert.
        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.' || c == '+')
        {
            anyhow::bail!(
                "CMake package name contains invalid characters. Only alphanumeric, hyphens, underscores, dots, and plus signs are allowed."
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CmakeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single resolved dependency with the metadata the export needs.
///
/// Install paths are stored exactly as the package manager reported them;
/// separator normalization happens later in the export pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDependency {
    name: PackageName,
    cmake_name: CmakeName,
    version: Version,
    install_paths: Vec<String>,
}

impl ResolvedDependency {
    pub fn new(
        name: String,
        cmake_name: String,
        version: String,
        install_paths: Vec<String>,
    ) -> Result<Self> {
        if install_paths.is_empty() {
            anyhow::bail!(
                "Dependency '{}' has no install paths; every resolved package must provide at least its root path",
                name
            );
        }

        Ok(Self {
            name: PackageName::new(name)?,
            cmake_name: CmakeName::new(cmake_name)?,
            version: Version::new(version)?,
            install_paths,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn cmake_name(&self) -> &str {
        self.cmake_name.as_str()
    }

    pub fn version(&self) -> &str {
        self.version.as_str()
    }

    pub fn install_paths(&self) -> &[String] {
        &self.install_paths
    }
}
