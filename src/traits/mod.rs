pub mod name_resolver;
pub mod property_discovery;

// Re-export traits
pub use name_resolver::NameResolver;
pub use property_discovery::{ Filterable, PropertyDiscovery };
