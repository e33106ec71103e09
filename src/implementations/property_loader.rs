use log::{ debug, info, warn };
use std::sync::Arc;

use crate::config::LoaderConfig;
use crate::errors::{ ExpressionError, ExpressionResult };
use crate::models::collection::PropertyCollection;
use crate::models::field::{ FieldInfo, FieldType };
use crate::models::property::Property;
use crate::traits::name_resolver::NameResolver;
use crate::traits::property_discovery::PropertyDiscovery;

/// Builds property descriptors from field metadata.
///
/// Leaf fields become properties. Object fields are walked into and their
/// leaves get dotted ids (`address.city`); lists of objects wrap the inner id
/// in brackets (`contacts[value]`). Display names come from the resolver when
/// one is set, falling back to the field's declared name.
pub struct PropertyLoader {
    config: LoaderConfig,
    resolver: Option<Box<dyn NameResolver>>,
}

/// A leaf found while walking a type, with its id relative to that type
struct Leaf {
    id: String,
    info: Arc<FieldInfo>,
}

impl PropertyLoader {
    pub fn new(config: LoaderConfig) -> Self {
        PropertyLoader { config, resolver: None }
    }

    pub fn with_resolver<R: NameResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    fn collect_leaves(
        &self,
        type_name: &str,
        fields: &[FieldInfo],
        depth: usize
    ) -> ExpressionResult<Vec<Leaf>> {
        let mut leaves = Vec::new();

        for field in fields {
            if field.name.trim().is_empty() {
                return Err(ExpressionError::InvalidField {
                    type_name: type_name.to_string(),
                    reason: "field name is empty".to_string(),
                });
            }

            if self.config.skip_unreadable && !field.readable {
                debug!("Skipping unreadable field {}.{}", type_name, field.name);
                continue;
            }

            if field.field_type.is_scalar() {
                leaves.push(Leaf {
                    id: field.name.clone(),
                    info: Arc::new(field.clone()),
                });
                continue;
            }

            if depth >= self.config.max_depth {
                warn!(
                    "Not descending into {}.{}: nesting deeper than {}",
                    type_name,
                    field.name,
                    self.config.max_depth
                );
                continue;
            }

            let nested_type = field.field_type.type_name();
            let nested = field.field_type.nested_fields().unwrap_or(&[]);
            let is_list = matches!(field.field_type, FieldType::List(_));

            for inner in self.collect_leaves(&nested_type, nested, depth + 1)? {
                let id = if is_list {
                    format!("{}[{}]", field.name, inner.id)
                } else {
                    format!("{}.{}", field.name, inner.id)
                };
                leaves.push(Leaf { id, info: inner.info });
            }
        }

        Ok(leaves)
    }

    fn display_name(&self, id: &str, info: &FieldInfo) -> String {
        let key = resource_key(id);
        match self.resolver.as_ref().and_then(|resolver| resolver.resolve(&key)) {
            Some(name) if !name.is_empty() => name,
            _ => {
                if self.resolver.is_some() {
                    debug!("No resource for {}, using field name {}", key, info.name);
                }
                info.name.clone()
            }
        }
    }
}

impl Default for PropertyLoader {
    fn default() -> Self {
        Self::new(LoaderConfig::default())
    }
}

impl PropertyDiscovery for PropertyLoader {
    fn load_fields(
        &self,
        type_name: &str,
        fields: &[FieldInfo]
    ) -> ExpressionResult<PropertyCollection> {
        debug!("Loading properties for {} ({} declared fields)", type_name, fields.len());

        let mut collection = PropertyCollection::new(type_name);
        for leaf in self.collect_leaves(type_name, fields, 1)? {
            let name = self.display_name(&leaf.id, &leaf.info);
            let match_any = leaf.info.match_any || self.config.match_any.contains(&leaf.id);
            let property = Property::new(leaf.id, name, leaf.info, match_any);
            debug!("Discovered property {}", property);
            collection.insert(property)?;
        }

        for id in &self.config.match_any {
            if !collection.contains(id) {
                warn!("match_any lists {} but {} has no such property", id, type_name);
            }
        }

        info!("Loaded {} properties for {}", collection.len(), type_name);
        Ok(collection)
    }
}

/// Resource key for a property id: `.`, `[` and `]` become `_`, trailing `_` trimmed.
pub fn resource_key(id: &str) -> String {
    let key: String = id
        .chars()
        .map(|c| {
            match c {
                '.' | '[' | ']' => '_',
                other => other,
            }
        })
        .collect();
    key.trim_end_matches('_').to_string()
}
