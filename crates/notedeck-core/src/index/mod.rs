//! The in-memory note index a search widget is mounted over.
//!
//! The index is built once, either from the site's JSON search payload or by
//! reading the markdown content collections, and is never mutated afterwards.

mod content;
mod frontmatter;

pub use content::{ContentLoader, LoadStats};

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::matcher;
use crate::model::NoteRecord;
use crate::vfs::FileSystem;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid note index: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate note {notebook}/{slug}")]
    Duplicate { notebook: String, slug: String },

    #[error("no note collections found under {}", .0.display())]
    MissingCollections(PathBuf),
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct NoteIndex {
    notes: Vec<NoteRecord>,
}

impl NoteIndex {
    /// Build an index, rejecting records that reuse a `(notebook, slug)` pair.
    pub fn new(notes: Vec<NoteRecord>) -> Result<Self, IndexError> {
        let mut seen = HashSet::with_capacity(notes.len());
        for note in &notes {
            if !seen.insert((note.notebook.as_str(), note.slug.as_str())) {
                return Err(IndexError::Duplicate {
                    notebook: note.notebook.clone(),
                    slug: note.slug.clone(),
                });
            }
        }
        Ok(Self { notes })
    }

    /// Parse the JSON array published by the content pipeline
    pub fn from_json(content: &str) -> Result<Self, IndexError> {
        let notes: Vec<NoteRecord> = serde_json::from_str(content)?;
        Self::new(notes)
    }

    pub fn load(path: &Path, fs: &dyn FileSystem) -> Result<Self, IndexError> {
        let content = fs.read_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> Result<String, IndexError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn notes(&self) -> &[NoteRecord] {
        &self.notes
    }

    pub fn get(&self, pos: usize) -> Option<&NoteRecord> {
        self.notes.get(pos)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Run the matcher against this index
    pub fn search(&self, query: &str) -> Vec<&NoteRecord> {
        matcher::search(&self.notes, query)
    }
}
