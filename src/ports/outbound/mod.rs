/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod build_info_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod project_name_resolver;

pub use build_info_reader::BuildInfoReader;
pub use formatter::ExportFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use project_name_resolver::ProjectNameResolver;
