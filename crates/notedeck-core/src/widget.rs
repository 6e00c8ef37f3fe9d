//! A mounted search widget: a session plus the listeners it holds.
//!
//! Mounting registers a document click listener and an input keydown
//! listener with the host's [`ListenerRegistry`]. The registrations are
//! released when the widget is dropped, whichever way that happens.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::config::PanelConfig;
use crate::index::NoteIndex;
use crate::navigation::NavigationTarget;
use crate::render::{render, PanelView};
use crate::session::{Key, SearchSession, SessionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListenerKind {
    /// Click anywhere in the document, for outside-click dismissal
    DocumentClick,
    /// Key presses on the search input
    InputKeyDown,
}

#[derive(Default)]
struct RegistryInner {
    next_id: AtomicU64,
    listeners: Mutex<HashMap<u64, ListenerKind>>,
}

/// Host-side table of live event listeners
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<RegistryInner>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, kind: ListenerKind) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.listeners.lock().insert(id, kind);
        Subscription {
            id,
            kind,
            registry: self.inner.clone(),
        }
    }

    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.inner.listeners.lock().values().any(|k| *k == kind)
    }

    pub fn len(&self) -> usize {
        self.inner.listeners.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A registered listener; dropping it detaches the listener.
pub struct Subscription {
    id: u64,
    kind: ListenerKind,
    registry: Arc<RegistryInner>,
}

impl Subscription {
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.registry.listeners.lock().remove(&self.id);
    }
}

/// Discrete UI events a host feeds into the widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WidgetEvent {
    Input { text: String },
    Focus,
    KeyDown { key: Key },
    /// A document click; `inside` is true when it landed within the widget
    Click { inside: bool },
    /// A result row activated with the pointer
    Select { index: usize },
}

/// What the host must do after an event
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub view: PanelView,
    pub state: SessionState,
    pub prevent_default: bool,
    /// Blur the search input
    pub blur: bool,
    /// Row to scroll into view at its nearest edge
    pub reveal: Option<usize>,
    /// Full-page navigation path, when a result was chosen
    pub navigate: Option<String>,
}

pub struct SearchWidget {
    session: SearchSession,
    panel: PanelConfig,
    _subscriptions: Vec<Subscription>,
}

impl SearchWidget {
    pub fn mount(index: Arc<NoteIndex>, panel: PanelConfig, listeners: &ListenerRegistry) -> Self {
        let subscriptions = vec![
            listeners.subscribe(ListenerKind::DocumentClick),
            listeners.subscribe(ListenerKind::InputKeyDown),
        ];
        log::debug!("Search widget mounted over {} notes", index.len());

        Self {
            session: SearchSession::new(index),
            panel,
            _subscriptions: subscriptions,
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn set_panel(&mut self, panel: PanelConfig) {
        self.panel = panel;
    }

    pub fn view(&self) -> PanelView {
        render(&self.session, &self.panel)
    }

    pub fn dispatch(&mut self, event: WidgetEvent) -> EventResponse {
        let mut prevent_default = false;
        let mut blur = false;
        let mut reveal = None;
        let mut navigate: Option<NavigationTarget> = None;

        match event {
            WidgetEvent::Input { text } => self.session.input(&text),
            WidgetEvent::Focus => self.session.focus(),
            WidgetEvent::KeyDown { key } => {
                let outcome = self.session.handle_key(key);
                prevent_default = outcome.prevent_default;
                blur = outcome.release_focus;
                reveal = outcome.reveal;
                navigate = outcome.navigate;
            }
            WidgetEvent::Click { inside } => {
                if !inside {
                    self.session.click_outside();
                }
            }
            WidgetEvent::Select { index } => {
                navigate = self.session.select_by_pointer(index);
                // Row clicks are links; the widget performs the navigation itself
                prevent_default = navigate.is_some();
            }
        }

        if let Some(target) = &navigate {
            log::info!("Navigating to {}", target);
        }

        EventResponse {
            view: self.view(),
            state: self.session.state(),
            prevent_default,
            blur,
            reveal,
            navigate: navigate.map(|t| t.path()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PanelBody;

    fn create_test_index() -> Arc<NoteIndex> {
        Arc::new(
            NoteIndex::from_json(
                r#"[
                    {"slug": "hooks", "title": "React Hooks Guide", "notebook": "frontend",
                     "notebookTitle": "Frontend", "date": "2024-02-01"},
                    {"slug": "transformers", "title": "Transformers", "notebook": "ml",
                     "notebookTitle": "Machine Learning", "date": "2024-01-01", "isAI": true}
                ]"#,
            )
            .unwrap(),
        )
    }

    fn input(text: &str) -> WidgetEvent {
        WidgetEvent::Input {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_listeners_released_on_unmount() {
        let registry = ListenerRegistry::new();
        {
            let _widget = SearchWidget::mount(create_test_index(), PanelConfig::default(), &registry);
            assert_eq!(registry.len(), 2);
            assert!(registry.is_listening(ListenerKind::DocumentClick));
            assert!(registry.is_listening(ListenerKind::InputKeyDown));
        }
        assert!(registry.is_empty(), "unmount must detach every listener");
    }

    #[test]
    fn test_unmount_after_early_exit_still_releases() {
        let registry = ListenerRegistry::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _widget = SearchWidget::mount(create_test_index(), PanelConfig::default(), &registry);
            panic!("render failed");
        }));
        assert!(result.is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_keyboard_confirm_scenario() {
        let registry = ListenerRegistry::new();
        let mut widget = SearchWidget::mount(create_test_index(), PanelConfig::default(), &registry);

        let response = widget.dispatch(input("react"));
        assert_eq!(response.state, SessionState::Typing);
        let PanelBody::Results { rows } = &response.view.body else {
            panic!("Expected result rows");
        };
        assert!(rows[0].title[0].matched);
        assert_eq!(rows[0].title[0].text, "React");

        let response = widget.dispatch(WidgetEvent::KeyDown { key: Key::ArrowDown });
        assert!(response.prevent_default);
        assert_eq!(response.reveal, Some(0));

        let response = widget.dispatch(WidgetEvent::KeyDown { key: Key::Enter });
        assert_eq!(response.navigate.as_deref(), Some("/notebooks/frontend/hooks"));
    }

    #[test]
    fn test_pointer_select_ai_note() {
        let registry = ListenerRegistry::new();
        let mut widget = SearchWidget::mount(create_test_index(), PanelConfig::default(), &registry);

        widget.dispatch(input("trans"));
        let response = widget.dispatch(WidgetEvent::Select { index: 0 });
        assert_eq!(response.navigate.as_deref(), Some("/ai-notebooks/ml/transformers"));

        let response = widget.dispatch(WidgetEvent::Select { index: 3 });
        assert_eq!(response.navigate, None);
        assert!(!response.prevent_default);
    }

    #[test]
    fn test_escape_blurs_and_outside_click_does_not() {
        let registry = ListenerRegistry::new();
        let mut widget = SearchWidget::mount(create_test_index(), PanelConfig::default(), &registry);

        widget.dispatch(input("react"));
        let response = widget.dispatch(WidgetEvent::KeyDown { key: Key::Escape });
        assert!(response.blur);
        assert!(!response.view.visible);

        widget.dispatch(WidgetEvent::Focus);
        let response = widget.dispatch(WidgetEvent::Click { inside: true });
        assert!(response.view.visible, "inside clicks keep the panel open");

        let response = widget.dispatch(WidgetEvent::Click { inside: false });
        assert!(!response.blur);
        assert_eq!(response.state, SessionState::Dismissed);
    }

    #[test]
    fn test_event_wire_format() {
        let event: WidgetEvent =
            serde_json::from_str(r#"{"type": "keyDown", "key": "ArrowDown"}"#).unwrap();
        assert_eq!(event, WidgetEvent::KeyDown { key: Key::ArrowDown });

        let event: WidgetEvent = serde_json::from_str(r#"{"type": "keyDown", "key": "Tab"}"#).unwrap();
        assert_eq!(event, WidgetEvent::KeyDown { key: Key::Other });

        let event: WidgetEvent = serde_json::from_str(r#"{"type": "focus"}"#).unwrap();
        assert_eq!(event, WidgetEvent::Focus);
    }
}
