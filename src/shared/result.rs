/// Crate-wide result type backed by `anyhow::Error`, so adapters and the
/// use case can attach context while bubbling failures unmodified.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
