use super::path_normalizer::PathNormalizer;
use crate::cmake_export::domain::{
    DependencyGraph, ExportDocument, ExportPrefix, ExportRow, IgnoreList, IGNORE_SENTINEL,
};
use crate::cmake_export::policies::FindTypePolicy;

/// DocumentBuilder turns a resolved dependency graph into the export
/// document the CMake formatter renders.
///
/// The transform is a single pass over the graph in its given order, so the
/// i-th row always describes the i-th dependency of the input.
pub struct DocumentBuilder;

impl DocumentBuilder {
    pub fn build(
        graph: &DependencyGraph,
        prefix: ExportPrefix,
        ignore_list: &IgnoreList,
        find_type_policy: &FindTypePolicy,
        include_find_types: bool,
    ) -> ExportDocument {
        let rows = graph
            .dependencies()
            .iter()
            .map(|dep| {
                let version = if ignore_list.is_ignored(dep.name()) {
                    IGNORE_SENTINEL.to_string()
                } else {
                    dep.version().to_string()
                };

                ExportRow::new(
                    dep.name().to_string(),
                    dep.cmake_name().to_string(),
                    version,
                    find_type_policy.classify(dep.name()),
                    PathNormalizer::join(dep.install_paths()),
                )
            })
            .collect();

        ExportDocument::new(prefix, include_find_types, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmake_export::domain::{FindType, ProjectName, ResolvedDependency};

    fn test_graph() -> DependencyGraph {
        let glm = ResolvedDependency::new(
            "glm".to_string(),
            "glm".to_string(),
            "0.9.9.8".to_string(),
            vec!["/a/glm".to_string()],
        )
        .unwrap();
        let glfw = ResolvedDependency::new(
            "glfw".to_string(),
            "glfw3".to_string(),
            "3.3.4".to_string(),
            vec!["/b/glfw".to_string()],
        )
        .unwrap();
        DependencyGraph::new(vec![glm, glfw])
    }

    fn named_prefix() -> ExportPrefix {
        ExportPrefix::Named(ProjectName::new("demo".to_string()).unwrap())
    }

    #[test]
    fn test_build_one_row_per_dependency() {
        let document = DocumentBuilder::build(
            &test_graph(),
            named_prefix(),
            &IgnoreList::default(),
            &FindTypePolicy::default(),
            true,
        );

        assert_eq!(document.package_count(), 2);
    }

    #[test]
    fn test_build_preserves_input_order_and_alignment() {
        let document = DocumentBuilder::build(
            &test_graph(),
            named_prefix(),
            &IgnoreList::default(),
            &FindTypePolicy::default(),
            true,
        );

        let first = &document.rows()[0];
        assert_eq!(first.conan_name(), "glm");
        assert_eq!(first.cmake_name(), "glm");
        assert_eq!(first.version(), "0.9.9.8");
        assert_eq!(first.install_path(), "/a/glm");

        let second = &document.rows()[1];
        assert_eq!(second.conan_name(), "glfw");
        assert_eq!(second.cmake_name(), "glfw3");
        assert_eq!(second.version(), "3.3.4");
        assert_eq!(second.install_path(), "/b/glfw");
    }

    #[test]
    fn test_build_masks_ignored_versions() {
        let ignore_list = IgnoreList::new(vec!["glm".to_string()]);
        let document = DocumentBuilder::build(
            &test_graph(),
            named_prefix(),
            &ignore_list,
            &FindTypePolicy::default(),
            true,
        );

        assert_eq!(document.rows()[0].version(), "<ignore>");
        assert_eq!(document.rows()[1].version(), "3.3.4");
    }

    #[test]
    fn test_build_classifies_find_types() {
        let lodepng = ResolvedDependency::new(
            "lodepng".to_string(),
            "lodepng".to_string(),
            "cci.20200615".to_string(),
            vec!["/c/lodepng".to_string()],
        )
        .unwrap();
        let graph = DependencyGraph::new(vec![lodepng]);

        let document = DocumentBuilder::build(
            &graph,
            named_prefix(),
            &IgnoreList::default(),
            &FindTypePolicy::default(),
            true,
        );

        assert_eq!(document.rows()[0].find_type(), FindType::Config);
    }

    #[test]
    fn test_build_normalizes_and_joins_paths() {
        let vulkan = ResolvedDependency::new(
            "vulkan".to_string(),
            "Vulkan".to_string(),
            "1.2.182.0".to_string(),
            vec!["C:\\libs\\vulkan\\".to_string(), "/extra/vulkan/".to_string()],
        )
        .unwrap();
        let graph = DependencyGraph::new(vec![vulkan]);

        let document = DocumentBuilder::build(
            &graph,
            named_prefix(),
            &IgnoreList::default(),
            &FindTypePolicy::default(),
            true,
        );

        assert_eq!(
            document.rows()[0].install_path(),
            "C:/libs/vulkan<sep>/extra/vulkan"
        );
    }

    #[test]
    fn test_build_empty_graph() {
        let document = DocumentBuilder::build(
            &DependencyGraph::new(vec![]),
            ExportPrefix::ProjectNameVar,
            &IgnoreList::default(),
            &FindTypePolicy::default(),
            false,
        );

        assert!(document.is_empty());
        assert!(!document.include_find_types());
    }
}
