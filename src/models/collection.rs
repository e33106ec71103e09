use serde::Serialize;
use std::collections::HashMap;

use crate::errors::{ ExpressionError, ExpressionResult };
use crate::models::property::Property;

/// The properties discovered for one type, in declaration order
#[derive(Debug, Clone, Default, Serialize)]
pub struct PropertyCollection {
    type_name: String,
    properties: Vec<Property>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl PropertyCollection {
    pub(crate) fn new(type_name: impl Into<String>) -> Self {
        PropertyCollection {
            type_name: type_name.into(),
            properties: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, property: Property) -> ExpressionResult<()> {
        if self.index.contains_key(property.id()) {
            return Err(ExpressionError::DuplicateProperty(property.id().to_string()));
        }
        self.index.insert(property.id().to_string(), self.properties.len());
        self.properties.push(property);
        Ok(())
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn get(&self, id: &str) -> Option<&Property> {
        self.index.get(id).map(|&i| &self.properties[i])
    }

    /// Mutable access for relabeling or toggling `match_any`
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Property> {
        match self.index.get(id) {
            Some(&i) => self.properties.get_mut(i),
            None => None,
        }
    }

    /// Like `get`, but a missing id is an error
    pub fn require(&self, id: &str) -> ExpressionResult<&Property> {
        self.get(id).ok_or_else(|| ExpressionError::PropertyNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.properties.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(Property::id)
    }
}

impl IntoIterator for PropertyCollection {
    type Item = Property;
    type IntoIter = std::vec::IntoIter<Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.into_iter()
    }
}

impl<'a> IntoIterator for &'a PropertyCollection {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}
