use conan_packages::prelude::*;
use std::path::Path;

/// Mock ProjectNameResolver for testing
pub struct MockProjectNameResolver {
    pub project_name: String,
    pub should_fail: bool,
}

impl MockProjectNameResolver {
    pub fn new(project_name: String) -> Self {
        Self {
            project_name,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            project_name: String::new(),
            should_fail: true,
        }
    }
}

impl ProjectNameResolver for MockProjectNameResolver {
    fn resolve_project_name(&self, _project_path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock project name resolution failure");
        }
        Ok(self.project_name.clone())
    }
}
