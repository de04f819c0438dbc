use crate::application::dto::{ExportRequest, ExportResponse};
use crate::cmake_export::domain::{DependencyGraph, ExportPrefix, IgnoreList, ProjectName};
use crate::cmake_export::policies::FindTypePolicy;
use crate::cmake_export::services::DocumentBuilder;
use crate::ports::outbound::{BuildInfoReader, ProgressReporter, ProjectNameResolver};
use crate::shared::Result;

/// ExportPackagesUseCase - Core use case for the dependency metadata export
///
/// This use case orchestrates the export workflow using generic dependency
/// injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `BR` - BuildInfoReader implementation
/// * `PNR` - ProjectNameResolver implementation
/// * `PR` - ProgressReporter implementation
pub struct ExportPackagesUseCase<BR, PNR, PR> {
    build_info_reader: BR,
    project_name_resolver: PNR,
    progress_reporter: PR,
}

impl<BR, PNR, PR> ExportPackagesUseCase<BR, PNR, PR>
where
    BR: BuildInfoReader,
    PNR: ProjectNameResolver,
    PR: ProgressReporter,
{
    /// Creates a new ExportPackagesUseCase with injected dependencies
    pub fn new(build_info_reader: BR, project_name_resolver: PNR, progress_reporter: PR) -> Self {
        Self {
            build_info_reader,
            project_name_resolver,
            progress_reporter,
        }
    }

    /// Executes the export use case
    ///
    /// # Arguments
    /// * `request` - Export request containing project path and options
    ///
    /// # Returns
    /// ExportResponse containing the finished export document
    pub fn execute(&self, request: ExportRequest) -> Result<ExportResponse> {
        // Step 1: Read the resolved dependency graph
        let graph = self.read_and_report_build_info(&request)?;

        // Step 2: Apply explicit ordering when requested
        let graph = if request.sort_by_name {
            self.progress_reporter.report("📊 Sorting packages by name");
            graph.sorted_by_name()
        } else {
            graph
        };

        // Step 3: Resolve the variable prefix
        let prefix = self.resolve_prefix(&request)?;

        // Step 4: Warn about ignore entries that match nothing
        let ignore_list = IgnoreList::new(request.ignore_versions.clone());
        for entry in ignore_list.unmatched_entries(&graph) {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Ignore entry '{}' did not match any package.",
                entry
            ));
        }

        // Step 5: Build the export document
        let find_type_policy = match &request.module_packages {
            Some(packages) => FindTypePolicy::with_module_packages(packages.clone()),
            None => FindTypePolicy::default(),
        };
        let document = DocumentBuilder::build(
            &graph,
            prefix,
            &ignore_list,
            &find_type_policy,
            request.include_find_types,
        );

        Ok(ExportResponse::new(document))
    }

    /// Reads the dependency graph, reporting progress
    fn read_and_report_build_info(&self, request: &ExportRequest) -> Result<DependencyGraph> {
        self.progress_reporter.report(&format!(
            "📖 Loading conanbuildinfo.json from: {}",
            request.project_path.display()
        ));

        let graph = self
            .build_info_reader
            .read_dependency_graph(&request.project_path)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} package(s)", graph.package_count()));

        if graph.is_empty() {
            self.progress_reporter.report_error(
                "⚠️  Warning: No dependencies found in conanbuildinfo.json. The generated lists will be empty.",
            );
        }

        Ok(graph)
    }

    /// Resolves the prefix for the generated variables
    ///
    /// Precedence: the `"${PROJECT_NAME}"` form when requested, then an
    /// explicit name, then the project directory's base name.
    fn resolve_prefix(&self, request: &ExportRequest) -> Result<ExportPrefix> {
        if request.use_project_name_var {
            return Ok(ExportPrefix::ProjectNameVar);
        }

        let name = match &request.project_name {
            Some(name) => name.clone(),
            None => {
                let derived = self
                    .project_name_resolver
                    .resolve_project_name(&request.project_path)?;
                self.progress_reporter
                    .report(&format!("🏷️  Using project name: {}", derived));
                derived
            }
        };

        Ok(ExportPrefix::Named(ProjectName::new(name)?))
    }
}
