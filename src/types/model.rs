//! Model types
//!
//! Defines the model descriptors returned by the discovery endpoint and the
//! selectable list built from them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A model advertised by the inference server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Model tag as the server names it, e.g. `llama3.2:latest`
    pub name: String,
}

impl ModelDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown model: {0}")]
pub struct UnknownModel(pub String);

/// The selectable model list and its current choice
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelList {
    models: Vec<ModelDescriptor>,
    selected: Option<String>,
}

impl ModelList {
    pub fn new(models: Vec<ModelDescriptor>) -> Self {
        Self {
            models,
            selected: None,
        }
    }

    /// Swap in a fresh set of models. The selection always resets to none.
    pub fn replace(&mut self, models: Vec<ModelDescriptor>) {
        self.models = models;
        self.selected = None;
    }

    pub fn select(&mut self, name: &str) -> Result<(), UnknownModel> {
        if !self.models.iter().any(|m| m.name == name) {
            return Err(UnknownModel(name.to_string()));
        }
        self.selected = Some(name.to_string());
        Ok(())
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn names(&self) -> Vec<&str> {
        self.models.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_list_has_no_selection() {
        let list = ModelList::new(vec![ModelDescriptor::new("a"), ModelDescriptor::new("b")]);
        assert_eq!(list.len(), 2);
        assert!(list.selected().is_none());
    }

    #[test]
    fn test_select_known_model() {
        let mut list = ModelList::new(vec![ModelDescriptor::new("a"), ModelDescriptor::new("b")]);
        list.select("b").unwrap();
        assert_eq!(list.selected(), Some("b"));
    }

    #[test]
    fn test_select_unknown_model_keeps_previous() {
        let mut list = ModelList::new(vec![ModelDescriptor::new("a")]);
        list.select("a").unwrap();
        assert_eq!(list.select("zzz"), Err(UnknownModel("zzz".into())));
        assert_eq!(list.selected(), Some("a"));
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let list = ModelList::new(vec![ModelDescriptor::new("a"), ModelDescriptor::new("a")]);
        assert_eq!(list.names(), vec!["a", "a"]);
    }
}
