pub mod dependency;
pub mod document;
pub mod find_type;
pub mod graph;
pub mod ignore_list;
pub mod package;

pub use dependency::{CmakeName, ResolvedDependency};
pub use document::{
    ExportDocument, ExportPrefix, ExportRow, ProjectName, IGNORE_SENTINEL, MULTI_PATH_SEPARATOR,
};
pub use find_type::FindType;
pub use graph::DependencyGraph;
pub use ignore_list::IgnoreList;
pub use package::{PackageName, Version};
