pub mod body;
pub mod format;
pub mod sanitize;
pub mod validate;

pub use body::JsonBody;
pub use validate::FieldSpec;
