mod resource_catalog_tests;

use crate::models::field::{ FieldInfo, FieldType };
use crate::traits::property_discovery::Filterable;

// Initialize logging once for the test binary
pub(crate) fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A person with a nested address and a list of contacts
pub(crate) struct Person;

impl Filterable for Person {
    fn type_name() -> &'static str {
        "Person"
    }

    fn fields() -> Vec<FieldInfo> {
        vec![
            FieldInfo::new("id", FieldType::Integer).read_only(),
            FieldInfo::new("firstName", FieldType::Text),
            FieldInfo::new("gender", FieldType::Enum(vec!["Male".into(), "Female".into()])).with_match_any(),
            FieldInfo::new("birth", FieldType::DateTime),
            FieldInfo::new("employer", FieldType::object("Company", vec![
                FieldInfo::new("name", FieldType::Text),
                FieldInfo::new("industry", FieldType::Text),
            ])),
            FieldInfo::new("contacts", FieldType::list(FieldType::object("Contact", vec![
                FieldInfo::new("type", FieldType::Text),
                FieldInfo::new("value", FieldType::Text),
            ]))),
            FieldInfo::new("tags", FieldType::list(FieldType::Text)),
            FieldInfo::new("password", FieldType::Text).write_only(),
        ]
    }
}
