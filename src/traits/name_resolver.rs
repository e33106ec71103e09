use std::collections::HashMap;

/// Resolves display names for properties from a resource key
pub trait NameResolver: Send + Sync {
    /// Look up the display text for a resource key, if there is one
    fn resolve(&self, key: &str) -> Option<String>;
}

impl<F> NameResolver for F where F: Fn(&str) -> Option<String> + Send + Sync {
    fn resolve(&self, key: &str) -> Option<String> {
        self(key)
    }
}

impl NameResolver for HashMap<String, String> {
    fn resolve(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
