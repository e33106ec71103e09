pub mod property_loader;
pub mod resource_catalog;

pub use property_loader::{ resource_key, PropertyLoader };
pub use resource_catalog::ResourceCatalog;
