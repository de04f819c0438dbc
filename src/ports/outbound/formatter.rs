use crate::cmake_export::domain::ExportDocument;
use crate::shared::Result;

/// ExportFormatter port for rendering the export document
///
/// This port abstracts the textual rendering of an export document so the
/// use case stays independent of the concrete output syntax.
pub trait ExportFormatter {
    /// Renders the export document to its textual form
    ///
    /// # Arguments
    /// * `document` - The export document to render
    ///
    /// # Returns
    /// The rendered text, ready to be written to the output destination
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, document: &ExportDocument) -> Result<String>;
}
