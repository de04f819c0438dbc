use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;

use crate::cmake_export::domain::{DependencyGraph, ResolvedDependency};
use crate::shared::error::ExportError;

/// Generator key whose entry in a dependency's `names` map overrides the
/// CMake package name.
const CMAKE_FIND_PACKAGE_GENERATOR: &str = "cmake_find_package";

#[derive(Debug, Deserialize)]
struct BuildInfo {
    #[serde(default)]
    dependencies: Vec<BuildInfoDependency>,
}

/// One entry of the `dependencies` array in conanbuildinfo.json.
///
/// The file carries many more fields (include_paths, libs, defines, ...);
/// only the ones the export needs are modeled. Everything is optional so a
/// missing field surfaces as a metadata error instead of a parse error.
#[derive(Debug, Deserialize)]
struct BuildInfoDependency {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    rootpath: Option<String>,
    #[serde(default)]
    build_paths: Vec<String>,
    #[serde(default)]
    names: HashMap<String, String>,
}

/// Parses conanbuildinfo.json content into the domain dependency graph.
///
/// Dependencies keep the order the file lists them in, which is Conan's
/// resolution order.
pub fn parse_build_info(content: &str) -> Result<DependencyGraph> {
    let build_info: BuildInfo =
        serde_json::from_str(content).context("Failed to parse conanbuildinfo.json")?;

    let mut dependencies = Vec::with_capacity(build_info.dependencies.len());
    for (index, raw) in build_info.dependencies.into_iter().enumerate() {
        dependencies.push(convert_dependency(raw, index)?);
    }

    Ok(DependencyGraph::new(dependencies))
}

fn convert_dependency(raw: BuildInfoDependency, index: usize) -> Result<ResolvedDependency> {
    let name = raw.name.ok_or_else(|| ExportError::MissingMetadata {
        package: format!("dependency #{}", index),
        field: "name".to_string(),
    })?;

    let version = raw.version.ok_or_else(|| ExportError::MissingMetadata {
        package: name.clone(),
        field: "version".to_string(),
    })?;

    // The generator-specific name wins when present; otherwise CMake uses
    // the Conan package name as-is.
    let cmake_name = raw
        .names
        .get(CMAKE_FIND_PACKAGE_GENERATOR)
        .cloned()
        .unwrap_or_else(|| name.clone());

    let install_paths = if raw.build_paths.is_empty() {
        let rootpath = raw.rootpath.ok_or_else(|| ExportError::MissingMetadata {
            package: name.clone(),
            field: "rootpath".to_string(),
        })?;
        vec![rootpath]
    } else {
        raw.build_paths
    };

    ResolvedDependency::new(name, cmake_name, version, install_paths)
}
