use crate::cmake_export::domain::FindType;

/// Packages that ship with (or get) a classic `FindXxx.cmake` module and
/// therefore need MODULE-mode lookup. Everything else resolves through the
/// package config files Conan generates.
pub const DEFAULT_MODULE_PACKAGES: &[&str] = &["glm", "vulkan", "glfw"];

/// FindTypePolicy classifies each dependency as module-style or config-style
/// `find_package()` lookup.
///
/// The classification is a static membership check on the Conan package
/// name; it carries no knowledge of what is actually installed.
#[derive(Debug, Clone)]
pub struct FindTypePolicy {
    module_packages: Vec<String>,
}

impl FindTypePolicy {
    /// Policy with a caller-supplied module list, replacing the default.
    pub fn with_module_packages(module_packages: Vec<String>) -> Self {
        Self { module_packages }
    }

    /// Classifies a package by exact, case-sensitive name match.
    pub fn classify(&self, package_name: &str) -> FindType {
        if self
            .module_packages
            .iter()
            .any(|entry| entry == package_name)
        {
            FindType::Module
        } else {
            FindType::Config
        }
    }

    pub fn module_packages(&self) -> &[String] {
        &self.module_packages
    }
}

impl Default for FindTypePolicy {
    fn default() -> Self {
        Self {
            module_packages: DEFAULT_MODULE_PACKAGES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}
