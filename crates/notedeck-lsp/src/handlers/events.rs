use crate::protocol::{Navigate, NavigateParams};
use crate::state::GlobalState;
use notedeck_core::{EventResponse, ListenerKind, WidgetEvent};
use tower_lsp::jsonrpc::{Error, ErrorCode, Result};
use tower_lsp::lsp_types::*;
use tower_lsp::Client;

pub(crate) fn not_mounted() -> Error {
    Error {
        code: ErrorCode::InvalidRequest,
        message: "Search widget is not mounted".into(),
        data: None,
    }
}

/// Handle "notedeck/event": feed one UI event to the mounted widget
pub async fn handle_event(
    client: &Client,
    state: &GlobalState,
    event: WidgetEvent,
) -> Result<EventResponse> {
    let response = {
        let mut widget_lock = state.widget.write().await;
        let Some(widget) = widget_lock.as_mut() else {
            return Err(not_mounted());
        };

        let listener = match &event {
            WidgetEvent::KeyDown { .. } => Some(ListenerKind::InputKeyDown),
            WidgetEvent::Click { .. } => Some(ListenerKind::DocumentClick),
            _ => None,
        };
        if let Some(kind) = listener {
            if !state.listeners.is_listening(kind) {
                log::debug!("Dropping {:?}: no {:?} listener", event, kind);
                return Ok(EventResponse {
                    view: widget.view(),
                    state: widget.session().state(),
                    prevent_default: false,
                    blur: false,
                    reveal: None,
                    navigate: None,
                });
            }
        }

        widget.dispatch(event)
    };

    if let Some(path) = &response.navigate {
        navigate(client, state, path).await;
    }

    Ok(response)
}

async fn navigate(client: &Client, state: &GlobalState, path: &str) {
    let url = state.config.read().await.page_url(path);

    client
        .send_notification::<Navigate>(NavigateParams {
            path: path.to_string(),
            url: url.clone(),
        })
        .await;

    let Some(url) = url else {
        return;
    };
    let params = ShowDocumentParams {
        uri: url.clone(),
        external: Some(true),
        take_focus: Some(true),
        selection: None,
    };
    match client.show_document(params).await {
        Ok(true) => {}
        Ok(false) => log::warn!("Client declined to open {}", url),
        Err(e) => log::warn!("Failed to open {}: {}", url, e),
    }
}
