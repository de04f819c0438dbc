use crate::cmake_export::domain::ExportDocument;

/// ExportResponse - Result DTO of the export use case
///
/// Carries the finished export document; rendering and writing happen in
/// the adapters.
#[derive(Debug, Clone)]
pub struct ExportResponse {
    /// The export document, ready for rendering
    pub document: ExportDocument,
}

impl ExportResponse {
    pub fn new(document: ExportDocument) -> Self {
        Self { document }
    }

    pub fn package_count(&self) -> usize {
        self.document.package_count()
    }
}
