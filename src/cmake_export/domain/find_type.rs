/// How CMake should locate a dependency: `find_package(... MODULE)` against
/// a bundled Find module, or `find_package(... CONFIG)` against the package
/// config files Conan generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindType {
    Module,
    Config,
}

impl FindType {
    /// The literal emitted into the FIND_TYPES list.
    pub fn as_cmake_str(self) -> &'static str {
        match self {
            FindType::Module => "MODULE",
            FindType::Config => "CONFIG",
        }
    }
}

impl std::fmt::Display for FindType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_cmake_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_cmake_str() {
        assert_eq!(FindType::Module.as_cmake_str(), "MODULE");
        assert_eq!(FindType::Config.as_cmake_str(), "CONFIG");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", FindType::Module), "MODULE");
        assert_eq!(format!("{}", FindType::Config), "CONFIG");
    }
}
