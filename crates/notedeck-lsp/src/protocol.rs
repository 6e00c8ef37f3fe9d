use notedeck_core::{NoteRecord, Segment};
use serde::{Deserialize, Serialize};
use tower_lsp::lsp_types::notification::Notification;
use url::Url;

pub const EVENT_METHOD: &str = "notedeck/event";
pub const SEARCH_METHOD: &str = "notedeck/search";
pub const HIGHLIGHT_METHOD: &str = "notedeck/highlight";

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchParams {
    /// Raw query, as typed
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResult {
    pub notes: Vec<NoteRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HighlightParams {
    pub text: String,
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HighlightResult {
    pub segments: Vec<Segment>,
}

/// Sent when the user picks a result; the client performs a full-page load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigateParams {
    /// Site-relative path
    pub path: String,
    /// Absolute URL, when a site URL is configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
}

pub enum Navigate {}

impl Notification for Navigate {
    type Params = NavigateParams;
    const METHOD: &'static str = "notedeck/navigate";
}
