use super::events::not_mounted;
use crate::protocol::{HighlightParams, HighlightResult, SearchParams, SearchResult};
use crate::state::GlobalState;
use tower_lsp::jsonrpc::Result;

/// Handle "notedeck/search": run the matcher without touching the session
pub async fn handle_search(state: &GlobalState, params: SearchParams) -> Result<SearchResult> {
    let index_lock = state.index.read().await;
    let Some(index) = index_lock.as_ref() else {
        return Err(not_mounted());
    };

    let notes = index.search(&params.query).into_iter().cloned().collect();
    Ok(SearchResult { notes })
}

/// Handle "notedeck/highlight"
pub async fn handle_highlight(params: HighlightParams) -> Result<HighlightResult> {
    Ok(HighlightResult {
        segments: notedeck_core::highlight(&params.text, &params.query),
    })
}
