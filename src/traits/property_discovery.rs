use crate::errors::ExpressionResult;
use crate::models::collection::PropertyCollection;
use crate::models::field::{ FieldInfo, TypeSchema };

/// Implemented by types whose fields can be filtered on
pub trait Filterable {
    /// Name of the type, used in logs and errors
    fn type_name() -> &'static str;

    /// Declared fields, in declaration order
    fn fields() -> Vec<FieldInfo>;
}

/// Trait for components that turn a type's fields into property descriptors
pub trait PropertyDiscovery {
    /// Discover the properties of a filterable type
    fn load<T: Filterable>(&self) -> ExpressionResult<PropertyCollection> {
        self.load_fields(T::type_name(), &T::fields())
    }

    /// Discover the properties described by a schema
    fn load_schema(&self, schema: &TypeSchema) -> ExpressionResult<PropertyCollection> {
        self.load_fields(&schema.name, &schema.fields)
    }

    /// Discover the properties of an arbitrary list of fields
    fn load_fields(
        &self,
        type_name: &str,
        fields: &[FieldInfo]
    ) -> ExpressionResult<PropertyCollection>;
}
