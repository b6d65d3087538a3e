//! Proc-pointer type registry.
//!
//! Records the signature of every `typedef ret (*Name)(params);` seen during a
//! run so that a later `typedef Name Alias;` can be emitted as a proc-pointer
//! type with the same signature. Entries are never removed.

use std::collections::HashMap;
use tracing::debug;

use super::base::Signature;

/// Mapping of proc-pointer type name to signature, shared across frameworks
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    known_types: HashMap<String, Signature>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a proc-pointer type. The first signature for a name wins.
    pub fn register(&mut self, name: &str, signature: &Signature) {
        if self.known_types.contains_key(name) {
            debug!("Proc-pointer type '{}' already registered", name);
            return;
        }
        self.known_types
            .insert(name.to_string(), signature.clone());
    }

    pub fn lookup(&self, name: &str) -> Option<&Signature> {
        self.known_types.get(name)
    }

    pub fn len(&self) -> usize {
        self.known_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known_types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_registration_wins() {
        let mut registry = TypeRegistry::new();
        registry.register("Callback", &Signature::new("void", vec!["int".to_string()]));
        registry.register("Callback", &Signature::new("int", vec![]));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("Callback").unwrap().return_type, "void");
        assert!(registry.lookup("Other").is_none());
    }
}
