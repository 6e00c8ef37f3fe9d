use crate::state::GlobalState;
use notedeck_core::config::IndexOrigin;
use notedeck_core::{NoteIndex, NotedeckConfig, SearchWidget};
use std::sync::Arc;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::Client;

/// Handle "initialize" request: load the note index and mount the widget
pub async fn handle_initialize(
    client: &Client,
    state: &GlobalState,
    params: InitializeParams,
) -> Result<InitializeResult> {
    let root_path = params.root_uri.and_then(|uri| uri.to_file_path().ok());

    let index = match root_path {
        Some(root_path) => {
            client
                .log_message(
                    MessageType::INFO,
                    format!("Loading note index from: {:?}", root_path),
                )
                .await;

            let fs = state.fs.clone();
            let (site, loaded) = tokio::task::spawn_blocking(move || {
                let site = NotedeckConfig::discover(&root_path, &*fs);
                let loaded = site.load_index(&root_path, &*fs);
                (site, loaded)
            })
            .await
            .map_err(|e| tower_lsp::jsonrpc::Error {
                code: tower_lsp::jsonrpc::ErrorCode::InternalError,
                message: format!("Failed to load note index: {}", e).into(),
                data: None,
            })?;

            let index = match loaded {
                Ok((index, origin)) => {
                    if site.logging.show_index_stats {
                        report_origin(client, &index, &origin).await;
                    }
                    index
                }
                Err(e) => {
                    client
                        .log_message(
                            MessageType::ERROR,
                            format!("Failed to load note index: {}", e),
                        )
                        .await;
                    NoteIndex::default()
                }
            };

            *state.site.write().await = site;
            index
        }
        None => {
            client
                .log_message(MessageType::WARNING, "No rootUri provided!")
                .await;
            NoteIndex::default()
        }
    };

    mount(state, Arc::new(index)).await;

    Ok(InitializeResult {
        capabilities: ServerCapabilities {
            experimental: Some(serde_json::json!({
                "notedeck": {
                    "methods": [
                        crate::protocol::EVENT_METHOD,
                        crate::protocol::SEARCH_METHOD,
                        crate::protocol::HIGHLIGHT_METHOD,
                    ],
                    "maxResults": notedeck_core::MAX_RESULTS,
                }
            })),
            ..Default::default()
        },
        server_info: Some(ServerInfo {
            name: "notedeck".to_string(),
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
        }),
    })
}

/// Handle "shutdown" request: unmount the widget, releasing its listeners
pub async fn handle_shutdown(client: &Client, state: &GlobalState) -> Result<()> {
    let widget = state.widget.write().await.take();
    if widget.is_some() {
        drop(widget);
        client
            .log_message(MessageType::INFO, "Search widget unmounted")
            .await;
    }
    log::info!("Shutdown requested, {} listeners left", state.listeners.len());
    Ok(())
}

async fn mount(state: &GlobalState, index: Arc<NoteIndex>) {
    let panel = state.site.read().await.panel.clone();

    let mut widget_lock = state.widget.write().await;
    // Unmount any previous instance before registering new listeners
    widget_lock.take();
    *widget_lock = Some(SearchWidget::mount(index.clone(), panel, &state.listeners));

    *state.index.write().await = Some(index);
}

async fn report_origin(client: &Client, index: &NoteIndex, origin: &IndexOrigin) {
    let message = match origin {
        IndexOrigin::Json(path) => {
            format!("Loaded {} notes from {:?}", index.len(), path)
        }
        IndexOrigin::Content(dir, stats) => format!(
            "Loaded {} notes from {:?} ({} files, {} notebooks, {} skipped)",
            index.len(),
            dir,
            stats.total_files,
            stats.notebooks,
            stats.skipped
        ),
    };
    log::info!("{}", message);
    client.log_message(MessageType::INFO, message).await;
}
