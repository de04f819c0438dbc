//! conan-packages - dependency metadata export for Conan + CMake projects
//!
//! This library reads the `conanbuildinfo.json` artifact Conan's `json`
//! generator leaves in a build directory and renders `conan-packages.cmake`,
//! a file of index-aligned CMake `set()` list blocks (Conan package names,
//! CMake package names, versions, find types, install paths) consumed by a
//! downstream CMake build description. It follows hexagonal architecture
//! and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`cmake_export`): Pure export logic and domain models
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use conan_packages::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let build_info_reader = FileSystemReader::new();
//! let project_name_resolver = FileSystemReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = ExportPackagesUseCase::new(
//!     build_info_reader,
//!     project_name_resolver,
//!     progress_reporter,
//! );
//!
//! // Execute
//! let request = ExportRequest::new(
//!     PathBuf::from("."),
//!     None,
//!     false,
//!     vec![],
//!     None,
//!     true,
//!     false,
//! );
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let formatter = CmakeFormatter::new();
//! let output = formatter.format(&response.document)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod build_info;
pub mod cli;
pub mod cmake_export;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter, BUILD_INFO_FILENAME, OUTPUT_FILENAME,
    };
    pub use crate::adapters::outbound::formatters::CmakeFormatter;
    pub use crate::application::dto::{ExportRequest, ExportResponse};
    pub use crate::application::use_cases::ExportPackagesUseCase;
    pub use crate::cmake_export::domain::{
        DependencyGraph, ExportDocument, ExportPrefix, FindType, IgnoreList, PackageName,
        ProjectName, ResolvedDependency, Version,
    };
    pub use crate::cmake_export::policies::FindTypePolicy;
    pub use crate::cmake_export::services::{DocumentBuilder, PathNormalizer};
    pub use crate::ports::outbound::{
        BuildInfoReader, ExportFormatter, OutputPresenter, ProgressReporter, ProjectNameResolver,
    };
    pub use crate::shared::Result;
}
