use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::models::field::FieldInfo;

/// Describes a field of a filterable type to the expression builder.
///
/// The id and field metadata are fixed once the descriptor is built; the
/// display name and the "equals any of" flag may be adjusted afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    id: String,
    name: String,
    info: Arc<FieldInfo>,
    /// Offer "equals any of" in addition to the field type's default operations
    pub match_any: bool,
}

impl Property {
    /// Only discovery builds descriptors, so id and info always agree.
    pub(crate) fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        info: Arc<FieldInfo>,
        match_any: bool
    ) -> Self {
        Property {
            id: id.into(),
            name: name.into(),
            info,
            match_any,
        }
    }

    /// Conventionalized identifier used inside expression definitions
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name, from a resource catalog or the field's own name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Field metadata
    pub fn info(&self) -> &Arc<FieldInfo> {
        &self.info
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
