pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ BuilderConfig, ConfigError, LoaderConfig };
pub use errors::{ ExpressionError, ExpressionResult };
pub use implementations::{
    property_loader::{ resource_key, PropertyLoader },
    resource_catalog::ResourceCatalog,
};
pub use models::{
    collection::PropertyCollection,
    field::{ FieldInfo, FieldType, TypeSchema },
    property::Property,
};
pub use traits::{ Filterable, NameResolver, PropertyDiscovery };
