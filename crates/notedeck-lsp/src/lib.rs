//! Notedeck server library
//!
//! JSON-RPC layer over stdio: a host (page shell or editor) forwards UI
//! events to a mounted search widget and receives views and navigation
//! intents back.

use notedeck_core::vfs::FileSystem;
use notedeck_core::{EventResponse, WidgetEvent};
use std::sync::Arc;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LspService};

use crate::protocol::{HighlightParams, HighlightResult, SearchParams, SearchResult};
use crate::state::GlobalState;

mod config;
mod handlers;
mod protocol;
mod state;

pub use config::{LogLevel, LspSettings};
pub use protocol::{Navigate, NavigateParams};

/// Server backend implementation
pub struct Backend {
    client: Client,
    state: GlobalState,
}

impl Backend {
    pub fn new(client: Client, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            client,
            state: GlobalState::new(fs),
        }
    }

    async fn event(&self, params: WidgetEvent) -> Result<EventResponse> {
        handlers::handle_event(&self.client, &self.state, params).await
    }

    async fn search(&self, params: SearchParams) -> Result<SearchResult> {
        handlers::handle_search(&self.state, params).await
    }

    async fn highlight(&self, params: HighlightParams) -> Result<HighlightResult> {
        handlers::handle_highlight(params).await
    }
}

#[tower_lsp::async_trait]
impl tower_lsp::LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        handlers::handle_initialize(&self.client, &self.state, params).await
    }

    async fn initialized(&self, _: InitializedParams) {
        log::info!("Client initialized, ready to accept events");
    }

    async fn shutdown(&self) -> Result<()> {
        handlers::handle_shutdown(&self.client, &self.state).await
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        handlers::handle_did_change_configuration(&self.client, &self.state, params).await
    }
}

/// Create and return the service and client socket
pub fn create_lsp_service(fs: Arc<dyn FileSystem>) -> (LspService<Backend>, tower_lsp::ClientSocket) {
    LspService::build(|client| Backend::new(client, fs))
        .custom_method(protocol::EVENT_METHOD, Backend::event)
        .custom_method(protocol::SEARCH_METHOD, Backend::search)
        .custom_method(protocol::HIGHLIGHT_METHOD, Backend::highlight)
        .finish()
}
