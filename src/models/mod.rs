pub mod field;
pub mod property;
pub mod collection;

// Re-export common model types
pub use field::{FieldInfo, FieldType, TypeSchema};
pub use property::Property;
pub use collection::PropertyCollection;
