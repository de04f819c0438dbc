mod find_type_policy;

pub use find_type_policy::{FindTypePolicy, DEFAULT_MODULE_PACKAGES};
