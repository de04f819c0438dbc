use conan_packages::adapters::outbound::console::StderrProgressReporter;
use conan_packages::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter, OUTPUT_FILENAME,
};
use conan_packages::adapters::outbound::formatters::CmakeFormatter;
use conan_packages::application::use_cases::ExportPackagesUseCase;
use conan_packages::cli::Args;
use conan_packages::config::{self, ConfigFile};
use conan_packages::ports::outbound::{ExportFormatter, OutputPresenter};
use conan_packages::shared::error::{ExitCode, ExportError};
use conan_packages::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate project directory
    let project_dir = args.project_path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);

    validate_project_path(&project_path)?;

    // Resolve configuration: explicit path first, then auto-discovery
    let config_file = resolve_config(&args, &project_path)?;

    // Merge CLI arguments and config file into the request
    let request = config::merge_into_request(&args, &config_file, project_path.clone());

    // Create adapters (Dependency Injection)
    let build_info_reader = FileSystemReader::new();
    let project_name_resolver = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = ExportPackagesUseCase::new(
        build_info_reader,
        project_name_resolver,
        progress_reporter,
    );

    // Execute use case
    let response = use_case.execute(request)?;

    // Render the export document
    let formatter = CmakeFormatter::new();
    let formatted_output = formatter.format(&response.document)?;

    // Present output
    let output_path = args.output.clone().or_else(|| config_file.output.clone());
    let presenter: Box<dyn OutputPresenter> = if args.stdout {
        Box::new(StdoutPresenter::new())
    } else {
        let path = output_path
            .map(PathBuf::from)
            .unwrap_or_else(|| project_path.join(OUTPUT_FILENAME));
        Box::new(FileSystemWriter::new(path))
    };

    presenter.present(&formatted_output)?;

    Ok(())
}

fn resolve_config(args: &Args, project_path: &Path) -> Result<ConfigFile> {
    if let Some(ref config_path) = args.config {
        let config = config::load_config_from_path(Path::new(config_path))?;
        eprintln!("📋 Loaded config from: {}", config_path);
        return Ok(config);
    }

    match config::discover_config(project_path)? {
        Some(config) => {
            eprintln!(
                "📋 Auto-discovered config file: {}",
                project_path.join(config::CONFIG_FILENAME).display()
            );
            Ok(config)
        }
        None => Ok(ConfigFile::default()),
    }
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ExportError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| ExportError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(ExportError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(ExportError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    // Security check: Canonicalize path to prevent path traversal
    let canonical_path = path
        .canonicalize()
        .map_err(|e| ExportError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to canonicalize path: {}", e),
        })?;

    // Validate that the canonical path is actually a directory
    // (additional check after canonicalization)
    if !canonical_path.is_dir() {
        return Err(ExportError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Resolved path is not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
