use serde::{ Deserialize, Serialize };

/// Structural metadata for a declared field of a filterable type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub name: String,
    /// Variants with data are written as single-key maps, e.g. `list: text`
    #[serde(rename = "type", with = "serde_yaml::with::singleton_map")]
    pub field_type: FieldType,
    #[serde(default = "default_true")]
    pub readable: bool,
    #[serde(default = "default_true")]
    pub writable: bool,
    /// Hint for discovery: the field opts into "equals any of"
    #[serde(default)]
    pub match_any: bool,
}

fn default_true() -> bool {
    true
}

impl FieldInfo {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        FieldInfo {
            name: name.into(),
            field_type,
            readable: true,
            writable: true,
            match_any: false,
        }
    }

    pub fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    pub fn write_only(mut self) -> Self {
        self.readable = false;
        self
    }

    pub fn with_match_any(mut self) -> Self {
        self.match_any = true;
        self
    }
}

/// Declared type of a field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Integer,
    Decimal,
    Boolean,
    #[serde(alias = "datetime")]
    DateTime,
    Enum(Vec<String>),
    Object {
        type_name: String,
        fields: Vec<FieldInfo>,
    },
    List(#[serde(with = "serde_yaml::with::singleton_map")] Box<FieldType>),
}

impl FieldType {
    pub fn object(type_name: impl Into<String>, fields: Vec<FieldInfo>) -> Self {
        FieldType::Object { type_name: type_name.into(), fields }
    }

    pub fn list(item: FieldType) -> Self {
        FieldType::List(Box::new(item))
    }

    /// Scalars and lists of scalars are leaves; objects are walked into.
    pub fn is_scalar(&self) -> bool {
        match self {
            FieldType::Object { .. } => false,
            FieldType::List(item) => item.is_scalar(),
            _ => true,
        }
    }

    pub fn nested_fields(&self) -> Option<&[FieldInfo]> {
        match self {
            FieldType::Object { fields, .. } => Some(fields),
            FieldType::List(item) => item.nested_fields(),
            _ => None,
        }
    }

    pub fn type_name(&self) -> String {
        match self {
            FieldType::Text => "text".to_string(),
            FieldType::Integer => "integer".to_string(),
            FieldType::Decimal => "decimal".to_string(),
            FieldType::Boolean => "boolean".to_string(),
            FieldType::DateTime => "datetime".to_string(),
            FieldType::Enum(variants) => format!("enum({})", variants.join("|")),
            FieldType::Object { type_name, .. } => type_name.clone(),
            FieldType::List(item) => format!("list<{}>", item.type_name()),
        }
    }
}

/// A named set of fields, as read from a schema file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSchema {
    pub name: String,
    pub fields: Vec<FieldInfo>,
}

impl TypeSchema {
    pub fn from_yaml_str(contents: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(contents)
    }
}
