use conan_packages::prelude::*;
use std::path::Path;

/// Mock BuildInfoReader for testing
pub struct MockBuildInfoReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockBuildInfoReader {
    pub fn new(content: String) -> Self {
        Self {
            content,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl BuildInfoReader for MockBuildInfoReader {
    fn read_dependency_graph(&self, _project_path: &Path) -> Result<DependencyGraph> {
        if self.should_fail {
            anyhow::bail!("Mock build info read failure");
        }
        conan_packages::build_info::parse_build_info(&self.content)
    }
}
