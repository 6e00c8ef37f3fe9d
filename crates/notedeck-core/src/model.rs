use serde::{Deserialize, Serialize};

/// A single searchable note, as published by the content pipeline.
///
/// Field names on the wire follow the site's search payload, including the
/// `isAI` flag that selects the AI notebook namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteRecord {
    /// Unique within its notebook
    pub slug: String,
    pub title: String,
    /// Notebook id, used in navigation paths
    pub notebook: String,
    /// Notebook display name
    pub notebook_title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// ISO date string
    #[serde(default)]
    pub date: String,
    #[serde(rename = "isAI", default)]
    pub is_ai: bool,
}

/// Key identifying a record across the whole index
pub type NoteKey = (String, String);

impl NoteRecord {
    pub fn key(&self) -> NoteKey {
        (self.notebook.clone(), self.slug.clone())
    }
}

/// A contiguous run of text, tagged as matching the query or not
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            matched: false,
        }
    }

    pub fn matched(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            matched: true,
        }
    }
}
