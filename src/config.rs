//! Configuration file support for conan-packages.
//!
//! Provides YAML-based configuration through `conan-packages.config.yml`
//! files, including data structures, file loading, validation, and merging
//! with command-line arguments.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::ExportRequest;
use crate::cli::Args;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "conan-packages.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub project_name: Option<String>,
    pub project_name_var: Option<bool>,
    pub output: Option<String>,
    pub ignore_versions: Option<Vec<String>>,
    pub module_packages: Option<Vec<String>>,
    pub find_types: Option<bool>,
    pub sort: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.project_name.is_some() && config.project_name_var == Some(true) {
        bail!(
            "Invalid config: 'project_name' and 'project_name_var' cannot be combined.\n\n\
             💡 Hint: Either bake a concrete name into the variables or defer to \"${{PROJECT_NAME}}\", not both."
        );
    }

    if let Some(ref ignore_versions) = config.ignore_versions {
        for (i, entry) in ignore_versions.iter().enumerate() {
            if entry.trim().is_empty() {
                bail!(
                    "Invalid config: ignore_versions[{}] must not be empty.\n\n\
                     💡 Hint: Each ignore_versions entry must be a Conan package name (e.g., \"glm\").",
                    i
                );
            }
        }
    }

    if let Some(ref module_packages) = config.module_packages {
        for (i, entry) in module_packages.iter().enumerate() {
            if entry.trim().is_empty() {
                bail!(
                    "Invalid config: module_packages[{}] must not be empty.\n\n\
                     💡 Hint: Each module_packages entry must be a Conan package name (e.g., \"vulkan\").",
                    i
                );
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Merge command-line arguments and config file options into an export
/// request.
///
/// Precedence: list options (`ignore_versions`) are merged from both
/// sources; scalar options use the CLI value first and fall back to the
/// config file. The module-package list replaces rather than merges, so a
/// CLI list wins over a config list, which wins over the built-in default.
pub fn merge_into_request(
    args: &Args,
    config: &ConfigFile,
    project_path: PathBuf,
) -> ExportRequest {
    let mut ignore_versions = args.ignore_version.clone();
    if let Some(ref config_ignores) = config.ignore_versions {
        for entry in config_ignores {
            if !ignore_versions.contains(entry) {
                ignore_versions.push(entry.clone());
            }
        }
    }

    let module_packages = if !args.module_package.is_empty() {
        Some(args.module_package.clone())
    } else {
        config.module_packages.clone()
    };

    let use_project_name_var = args.project_name_var
        || (args.project_name.is_none() && config.project_name_var == Some(true));

    let project_name = if use_project_name_var {
        None
    } else {
        args.project_name
            .clone()
            .or_else(|| config.project_name.clone())
    };

    let include_find_types = if args.no_find_types {
        false
    } else {
        config.find_types.unwrap_or(true)
    };

    let sort_by_name = args.sort || config.sort.unwrap_or(false);

    ExportRequest::new(
        project_path,
        project_name,
        use_project_name_var,
        ignore_versions,
        module_packages,
        include_find_types,
        sort_by_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn default_args() -> Args {
        use clap::Parser;
        Args::try_parse_from(["conan-packages"]).unwrap()
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
project_name: exqudens-vulkan-test
ignore_versions:
  - glm
  - glfw
module_packages:
  - glm
  - vulkan
find_types: false
sort: true
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.project_name.as_deref(), Some("exqudens-vulkan-test"));
        assert_eq!(
            config.ignore_versions.as_deref(),
            Some(&["glm".to_string(), "glfw".to_string()][..])
        );
        assert_eq!(
            config.module_packages.as_deref(),
            Some(&["glm".to_string(), "vulkan".to_string()][..])
        );
        assert_eq!(config.find_types, Some(false));
        assert_eq!(config.sort, Some(true));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILENAME);
        fs::write(
            &config_path,
            r#"
project_name_var: true
"#,
        )
        .unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_some());
        assert_eq!(config.unwrap().project_name_var, Some(true));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_conflicting_prefix_options_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
project_name: demo
project_name_var: true
"#,
        )
        .unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("cannot be combined"));
    }

    #[test]
    fn test_empty_ignore_entry_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
ignore_versions:
  - ""
"#,
        )
        .unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("ignore_versions[0]"));
    }

    #[test]
    fn test_empty_module_package_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
module_packages:
  - "  "
"#,
        )
        .unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("module_packages[0]"));
    }

    #[test]
    fn test_unknown_fields_are_captured() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
sort: true
unkown_option: oops
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.unknown_fields.contains_key("unkown_option"));
    }

    #[test]
    fn test_merge_defaults() {
        let args = default_args();
        let config = ConfigFile::default();

        let request = merge_into_request(&args, &config, PathBuf::from("/p"));

        assert_eq!(request.project_path, PathBuf::from("/p"));
        assert!(request.project_name.is_none());
        assert!(!request.use_project_name_var);
        assert!(request.ignore_versions.is_empty());
        assert!(request.module_packages.is_none());
        assert!(request.include_find_types);
        assert!(!request.sort_by_name);
    }

    #[test]
    fn test_merge_ignore_versions_combined_without_duplicates() {
        let mut args = default_args();
        args.ignore_version = vec!["glm".to_string(), "glfw".to_string()];
        let config = ConfigFile {
            ignore_versions: Some(vec!["glfw".to_string(), "vulkan".to_string()]),
            ..Default::default()
        };

        let request = merge_into_request(&args, &config, PathBuf::from("/p"));

        assert_eq!(request.ignore_versions, vec!["glm", "glfw", "vulkan"]);
    }

    #[test]
    fn test_merge_cli_module_packages_replace_config() {
        let mut args = default_args();
        args.module_package = vec!["zlib".to_string()];
        let config = ConfigFile {
            module_packages: Some(vec!["glm".to_string()]),
            ..Default::default()
        };

        let request = merge_into_request(&args, &config, PathBuf::from("/p"));

        assert_eq!(request.module_packages, Some(vec!["zlib".to_string()]));
    }

    #[test]
    fn test_merge_cli_project_name_overrides_config() {
        let mut args = default_args();
        args.project_name = Some("cli-name".to_string());
        let config = ConfigFile {
            project_name: Some("config-name".to_string()),
            ..Default::default()
        };

        let request = merge_into_request(&args, &config, PathBuf::from("/p"));

        assert_eq!(request.project_name.as_deref(), Some("cli-name"));
    }

    #[test]
    fn test_merge_cli_project_name_overrides_config_name_var() {
        // CLI pins a concrete name, so the config's deferred-prefix request
        // no longer applies.
        let mut args = default_args();
        args.project_name = Some("cli-name".to_string());
        let config = ConfigFile {
            project_name_var: Some(true),
            ..Default::default()
        };

        let request = merge_into_request(&args, &config, PathBuf::from("/p"));

        assert!(!request.use_project_name_var);
        assert_eq!(request.project_name.as_deref(), Some("cli-name"));
    }

    #[test]
    fn test_merge_config_project_name_var_applies() {
        let args = default_args();
        let config = ConfigFile {
            project_name_var: Some(true),
            ..Default::default()
        };

        let request = merge_into_request(&args, &config, PathBuf::from("/p"));

        assert!(request.use_project_name_var);
        assert!(request.project_name.is_none());
    }

    #[test]
    fn test_merge_no_find_types_flag_overrides_config() {
        let mut args = default_args();
        args.no_find_types = true;
        let config = ConfigFile {
            find_types: Some(true),
            ..Default::default()
        };

        let request = merge_into_request(&args, &config, PathBuf::from("/p"));

        assert!(!request.include_find_types);
    }

    #[test]
    fn test_merge_config_disables_find_types() {
        let args = default_args();
        let config = ConfigFile {
            find_types: Some(false),
            ..Default::default()
        };

        let request = merge_into_request(&args, &config, PathBuf::from("/p"));

        assert!(!request.include_find_types);
    }

    #[test]
    fn test_merge_sort_from_either_source() {
        let mut args = default_args();
        args.sort = true;
        let request = merge_into_request(&args, &ConfigFile::default(), PathBuf::from("/p"));
        assert!(request.sort_by_name);

        let args = default_args();
        let config = ConfigFile {
            sort: Some(true),
            ..Default::default()
        };
        let request = merge_into_request(&args, &config, PathBuf::from("/p"));
        assert!(request.sort_by_name);
    }
}
