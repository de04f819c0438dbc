/// Formatter adapters for the generated output
mod cmake_formatter;

pub use cmake_formatter::CmakeFormatter;
