use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::NoteRecord;

/// Route namespace a note is published under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Namespace {
    Notebooks,
    AiNotebooks,
}

impl Namespace {
    pub fn for_note(note: &NoteRecord) -> Self {
        if note.is_ai {
            Namespace::AiNotebooks
        } else {
            Namespace::Notebooks
        }
    }

    pub fn base_path(&self) -> &'static str {
        match self {
            Namespace::Notebooks => "/notebooks",
            Namespace::AiNotebooks => "/ai-notebooks",
        }
    }
}

/// A resolved selection the host should navigate to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationTarget {
    pub namespace: Namespace,
    pub notebook: String,
    pub slug: String,
}

impl NavigationTarget {
    pub fn for_note(note: &NoteRecord) -> Self {
        Self {
            namespace: Namespace::for_note(note),
            notebook: note.notebook.clone(),
            slug: note.slug.clone(),
        }
    }

    /// Site-relative path, e.g. `/notebooks/frontend/hooks`
    pub fn path(&self) -> String {
        format!(
            "{}/{}/{}",
            self.namespace.base_path(),
            self.notebook,
            self.slug
        )
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(notebook: &str, slug: &str, is_ai: bool) -> NoteRecord {
        NoteRecord {
            slug: slug.to_string(),
            title: String::new(),
            notebook: notebook.to_string(),
            notebook_title: String::new(),
            excerpt: String::new(),
            tags: vec![],
            date: String::new(),
            is_ai,
        }
    }

    #[test]
    fn test_regular_note_path() {
        let target = NavigationTarget::for_note(&note("frontend", "hooks", false));
        assert_eq!(target.path(), "/notebooks/frontend/hooks");
    }

    #[test]
    fn test_ai_note_path() {
        let target = NavigationTarget::for_note(&note("ml", "transformers", true));
        assert_eq!(target.namespace, Namespace::AiNotebooks);
        assert_eq!(target.to_string(), "/ai-notebooks/ml/transformers");
    }
}
