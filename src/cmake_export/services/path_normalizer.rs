use crate::cmake_export::domain::MULTI_PATH_SEPARATOR;

/// PathNormalizer rewrites package-manager install paths into the form the
/// generated CMake code expects.
///
/// Conan reports cache paths with the platform's native separators; the
/// consuming CMake lists always use forward slashes and no trailing slash.
pub struct PathNormalizer;

impl PathNormalizer {
    /// Normalizes a single path: backslashes become forward slashes and a
    /// single trailing slash is stripped.
    ///
    /// Normalizing an already-normalized path returns it unchanged.
    pub fn normalize(path: &str) -> String {
        let mut normalized = path.replace('\\', "/");
        if normalized.ends_with('/') {
            normalized.pop();
        }
        normalized
    }

    /// Normalizes every path and joins them into one list entry.
    ///
    /// Multiple install paths for one dependency are joined with
    /// [`MULTI_PATH_SEPARATOR`] so they survive as a single quoted string in
    /// the generated list.
    pub fn join(paths: &[String]) -> String {
        paths
            .iter()
            .map(|path| Self::normalize(path))
            .collect::<Vec<_>>()
            .join(MULTI_PATH_SEPARATOR)
    }
}
