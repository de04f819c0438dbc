mod document_builder;
mod path_normalizer;

pub use document_builder::DocumentBuilder;
pub use path_normalizer::PathNormalizer;
