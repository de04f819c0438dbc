use crate::cmake_export::domain::{ExportDocument, ExportPrefix};
use crate::ports::outbound::ExportFormatter;
use crate::shared::Result;

/// Variable name suffix for the Conan package name list
const ROLE_CONAN_PACKAGE_NAMES: &str = "CONAN_PACKAGE_NAMES";

/// Variable name suffix for the CMake package name list
const ROLE_CMAKE_PACKAGE_NAMES: &str = "CMAKE_PACKAGE_NAMES";

/// Variable name suffix for the version list
const ROLE_CMAKE_PACKAGE_VERSIONS: &str = "CMAKE_PACKAGE_VERSIONS";

/// Variable name suffix for the find-type list
const ROLE_CMAKE_PACKAGE_FIND_TYPES: &str = "CMAKE_PACKAGE_FIND_TYPES";

/// Variable name suffix for the install path list
const ROLE_CMAKE_PACKAGE_PATHS: &str = "CMAKE_PACKAGE_PATHS";

/// Indentation of one list entry line
const ENTRY_INDENT: &str = "    ";

/// CmakeFormatter adapter rendering the export document as CMake `set()`
/// list assignments.
///
/// This adapter implements the ExportFormatter port. The emitted layout is
/// part of the contract with the consuming CMake code: one quoted entry per
/// line with a trailing space, four-space indentation, and one block per
/// role in a fixed order. Downstream scripts `foreach` over these lists by
/// index, which is why every block must have exactly one line per package.
pub struct CmakeFormatter;

impl CmakeFormatter {
    pub fn new() -> Self {
        Self
    }
}

/// Helper methods for rendering blocks
impl CmakeFormatter {
    /// Renders one `set()` block: header, one quoted entry per value, close.
    fn render_block(
        &self,
        output: &mut String,
        prefix: &ExportPrefix,
        role: &str,
        values: &[&str],
    ) {
        match prefix {
            ExportPrefix::Named(name) => {
                output.push_str(&format!("set({}_{}\n", name.as_str(), role));
            }
            ExportPrefix::ProjectNameVar => {
                output.push_str(&format!("set(\"${{PROJECT_NAME}}_{}\"\n", role));
            }
        }

        for value in values {
            output.push_str(&format!("{}\"{}\" \n", ENTRY_INDENT, value));
        }

        output.push_str(")\n");
    }

    fn render_conan_package_names(&self, output: &mut String, document: &ExportDocument) {
        let values: Vec<&str> = document.rows().iter().map(|row| row.conan_name()).collect();
        self.render_block(
            output,
            document.prefix(),
            ROLE_CONAN_PACKAGE_NAMES,
            &values,
        );
    }

    fn render_cmake_package_names(&self, output: &mut String, document: &ExportDocument) {
        let values: Vec<&str> = document.rows().iter().map(|row| row.cmake_name()).collect();
        self.render_block(
            output,
            document.prefix(),
            ROLE_CMAKE_PACKAGE_NAMES,
            &values,
        );
    }

    fn render_versions(&self, output: &mut String, document: &ExportDocument) {
        let values: Vec<&str> = document.rows().iter().map(|row| row.version()).collect();
        self.render_block(
            output,
            document.prefix(),
            ROLE_CMAKE_PACKAGE_VERSIONS,
            &values,
        );
    }

    fn render_find_types(&self, output: &mut String, document: &ExportDocument) {
        let values: Vec<&str> = document
            .rows()
            .iter()
            .map(|row| row.find_type().as_cmake_str())
            .collect();
        self.render_block(
            output,
            document.prefix(),
            ROLE_CMAKE_PACKAGE_FIND_TYPES,
            &values,
        );
    }

    fn render_paths(&self, output: &mut String, document: &ExportDocument) {
        let values: Vec<&str> = document
            .rows()
            .iter()
            .map(|row| row.install_path())
            .collect();
        self.render_block(output, document.prefix(), ROLE_CMAKE_PACKAGE_PATHS, &values);
    }
}

impl Default for CmakeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportFormatter for CmakeFormatter {
    fn format(&self, document: &ExportDocument) -> Result<String> {
        let mut output = String::new();

        self.render_conan_package_names(&mut output, document);
        self.render_cmake_package_names(&mut output, document);
        self.render_versions(&mut output, document);
        if document.include_find_types() {
            self.render_find_types(&mut output, document);
        }
        self.render_paths(&mut output, document);

        Ok(output)
    }
}
