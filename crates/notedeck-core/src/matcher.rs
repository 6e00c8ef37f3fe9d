//! Substring matcher over the note index.
//!
//! A stable filter: matches keep the index order and the first
//! [`MAX_RESULTS`] are returned. There is no scoring.

use crate::model::NoteRecord;

/// Upper bound on the number of results a query produces
pub const MAX_RESULTS: usize = 10;

/// Normalize a raw query, returning `None` when it is blank.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Whether `note` contains the already-normalized `needle` in any searchable field.
pub fn matches_note(note: &NoteRecord, needle: &str) -> bool {
    field_contains(&note.title, needle)
        || field_contains(&note.excerpt, needle)
        || note.tags.iter().any(|tag| field_contains(tag, needle))
        || field_contains(&note.notebook_title, needle)
}

fn field_contains(field: &str, needle: &str) -> bool {
    field.to_lowercase().contains(needle)
}

/// Positions (into `index`) of the notes matching `query`.
///
/// Returns an empty list for a blank query. Callers must treat that as
/// "no active search" rather than "nothing found".
pub fn match_positions(index: &[NoteRecord], query: &str) -> Vec<usize> {
    let Some(needle) = normalize_query(query) else {
        return Vec::new();
    };

    index
        .iter()
        .enumerate()
        .filter(|(_, note)| matches_note(note, &needle))
        .map(|(pos, _)| pos)
        .take(MAX_RESULTS)
        .collect()
}

/// Notes matching `query`, in index order.
pub fn search<'a>(index: &'a [NoteRecord], query: &str) -> Vec<&'a NoteRecord> {
    match_positions(index, query)
        .into_iter()
        .map(|pos| &index[pos])
        .collect()
}
