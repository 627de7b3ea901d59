//! Cache of tree types

use crate::tree::TreeType;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

type TypeKey = (String, String, String);

/// Hands out one shared [`TreeType`] per distinct `(name, color, texture)`
#[derive(Debug, Default)]
pub struct TreeFactory {
    types: HashMap<TypeKey, Arc<TreeType>>,
}

impl TreeFactory {
    /// Create an empty factory
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory pre-seeded with the given types
    pub fn with_types(types: impl IntoIterator<Item = TreeType>) -> Self {
        let mut factory = Self::new();
        for kind in types {
            factory.tree_type(&kind.name, &kind.color, &kind.texture);
        }
        factory
    }

    /// Return the cached type for these attributes, creating it on first use
    pub fn tree_type(&mut self, name: &str, color: &str, texture: &str) -> Arc<TreeType> {
        let key = (name.to_string(), color.to_string(), texture.to_string());
        let kind = self.types.entry(key).or_insert_with(|| {
            debug!(name, color, texture, "New tree type");
            Arc::new(TreeType::new(name, color, texture))
        });
        Arc::clone(kind)
    }

    /// Number of distinct types created
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// No types created yet
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
