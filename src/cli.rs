use clap::Parser;

/// Generate conan-packages.cmake dependency listings from Conan build info
#[derive(Parser, Debug)]
#[command(name = "conan-packages")]
#[command(version = "0.3.0")]
#[command(
    about = "Generate conan-packages.cmake dependency listings from Conan build info",
    long_about = None
)]
pub struct Args {
    /// Path to the project directory containing conanbuildinfo.json (defaults to current directory)
    #[arg(short = 'p', long = "project-path")]
    pub project_path: Option<String>,

    /// Project name used as the variable prefix (defaults to the project directory name)
    #[arg(short = 'n', long = "project-name")]
    pub project_name: Option<String>,

    /// Emit "${PROJECT_NAME}_..." variables instead of a baked-in project name
    #[arg(long = "project-name-var", conflicts_with = "project_name")]
    pub project_name_var: bool,

    /// Output file path (defaults to conan-packages.cmake in the project directory)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Write the generated content to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Mask the version of a package with "<ignore>"
    /// Can be specified multiple times: -i "glm" -i "glfw"
    #[arg(short = 'i', long = "ignore-version", value_name = "PACKAGE")]
    pub ignore_version: Vec<String>,

    /// Package to look up in MODULE mode instead of CONFIG mode
    /// Can be specified multiple times; replaces the built-in list (glm, vulkan, glfw)
    #[arg(short = 'm', long = "module-package", value_name = "PACKAGE")]
    pub module_package: Vec<String>,

    /// Do not emit the CMAKE_PACKAGE_FIND_TYPES block
    #[arg(long = "no-find-types")]
    pub no_find_types: bool,

    /// Sort packages by name instead of keeping Conan's resolution order
    #[arg(long)]
    pub sort: bool,

    /// Path to a configuration file (conan-packages.config.yml is auto-discovered otherwise)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
