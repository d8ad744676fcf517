//! Shared types passed between pipeline stages.
//!
//! The document model is serialized straight into the template context, so
//! its JSON shape is the contract template authors write against:
//!
//! ```json
//! {
//!   "feature": { "intro": { "title": "Intro" }, "usage": { "title": "Usage" } },
//!   "flavour": {}
//! }
//! ```

use serde::Serialize;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Parsed content of one descriptor file. Opaque to the generator.
pub type Descriptor = Value;

/// An entry found under a category root.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Category the item was found under.
    pub category: String,
    /// Directory name as found on disk (e.g. `01_intro`).
    pub raw_name: String,
    /// Raw name with its sort prefix stripped (e.g. `intro`).
    pub canonical_name: String,
    /// `<category>/<raw_name>/<category>.<ext>`, relative to the project root.
    pub descriptor_path: PathBuf,
}

/// Category → canonical name → descriptor.
///
/// Both levels keep insertion order: categories in the order they were
/// merged, items in the order they were discovered.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DocumentModel {
    categories: Map<String, Value>,
}

impl DocumentModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an empty category so it renders as `{}` even with no items.
    pub fn add_category(&mut self, category: &str) {
        self.categories
            .entry(category.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    /// Insert a descriptor under `category`/`name`.
    ///
    /// Returns the descriptor it replaced, if `name` was already present. A
    /// replaced entry keeps its original position.
    pub fn insert(&mut self, category: &str, name: &str, descriptor: Descriptor) -> Option<Descriptor> {
        self.add_category(category);
        match self.categories.get_mut(category) {
            Some(Value::Object(items)) => items.insert(name.to_string(), descriptor),
            _ => None,
        }
    }

    /// Items of one category, in discovery order.
    pub fn category(&self, category: &str) -> Option<&Map<String, Value>> {
        self.categories.get(category).and_then(Value::as_object)
    }

    pub fn get(&self, category: &str, name: &str) -> Option<&Descriptor> {
        self.category(category).and_then(|items| items.get(name))
    }

    /// Category names in merge order.
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    /// Canonical item names of one category, in discovery order.
    pub fn item_names(&self, category: &str) -> Vec<&str> {
        self.category(category)
            .map(|items| items.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}
