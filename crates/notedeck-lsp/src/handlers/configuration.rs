use crate::config::LspSettings;
use crate::state::GlobalState;
use tower_lsp::lsp_types::*;
use tower_lsp::Client;

pub async fn handle_did_change_configuration(
    client: &Client,
    state: &GlobalState,
    params: DidChangeConfigurationParams,
) {
    // Settings live under the "notedeck" section
    let serde_json::Value::Object(map) = params.settings else {
        return;
    };
    let Some(section) = map.get("notedeck") else {
        return;
    };

    match serde_json::from_value::<LspSettings>(section.clone()) {
        Ok(new_settings) => {
            log::set_max_level(new_settings.log_level.to_level_filter());
            *state.config.write().await = new_settings;

            client
                .log_message(MessageType::INFO, "Settings updated")
                .await;
        }
        Err(e) => {
            client
                .log_message(
                    MessageType::ERROR,
                    format!("Failed to parse updated settings: {}", e),
                )
                .await;
        }
    }
}
