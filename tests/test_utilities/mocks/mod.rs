/// Mock implementations for testing
mod mock_build_info_reader;
mod mock_progress_reporter;
mod mock_project_name_resolver;

pub use mock_build_info_reader::MockBuildInfoReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_project_name_resolver::MockProjectNameResolver;
