use serde::Serialize;

use crate::config::PanelConfig;
use crate::highlight::highlight;
use crate::model::{NoteRecord, Segment};
use crate::navigation::NavigationTarget;
use crate::session::SearchSession;

/// Everything a host needs to draw the search box and its result panel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelView {
    /// Current input value
    pub query: String,
    pub placeholder: String,
    /// The panel is drawn only when visible
    pub visible: bool,
    pub body: PanelBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PanelBody {
    NoResults { label: String },
    Results { rows: Vec<ResultRow> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    /// Ordinal used to map hover and click back to the session
    pub index: usize,
    pub selected: bool,
    pub href: String,
    pub title: Vec<Segment>,
    pub notebook_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<Vec<Segment>>,
    pub tags: Vec<String>,
}

impl ResultRow {
    fn new(index: usize, note: &NoteRecord, query: &str, selected: bool) -> Self {
        Self {
            index,
            selected,
            href: NavigationTarget::for_note(note).path(),
            title: highlight(&note.title, query),
            notebook_title: note.notebook_title.clone(),
            excerpt: (!note.excerpt.is_empty()).then(|| highlight(&note.excerpt, query)),
            tags: note.tags.clone(),
        }
    }
}

/// Build the view for the session's current state.
pub fn render(session: &SearchSession, panel: &PanelConfig) -> PanelView {
    let query = session.query();
    let selected = session.selected_index();

    let rows: Vec<ResultRow> = session
        .results()
        .enumerate()
        .map(|(i, note)| ResultRow::new(i, note, query, selected == Some(i)))
        .collect();

    let body = if rows.is_empty() {
        PanelBody::NoResults {
            label: panel.no_results_label.clone(),
        }
    } else {
        PanelBody::Results { rows }
    };

    PanelView {
        query: query.to_string(),
        placeholder: panel.placeholder.clone(),
        visible: session.is_active(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::NoteIndex;
    use std::sync::Arc;

    fn create_test_session() -> SearchSession {
        let index = NoteIndex::from_json(
            r#"[
                {"slug": "hooks", "title": "React Hooks Guide", "notebook": "frontend",
                 "notebookTitle": "Frontend", "excerpt": "Hooks let function components use react state",
                 "tags": ["react"], "date": "2024-02-01"},
                {"slug": "context", "title": "Context API", "notebook": "frontend",
                 "notebookTitle": "Frontend", "excerpt": "", "tags": ["react"], "date": "2024-01-01"}
            ]"#,
        )
        .unwrap();
        SearchSession::new(Arc::new(index))
    }

    #[test]
    fn test_rows_are_highlighted_and_linked() {
        let mut session = create_test_session();
        session.input("react");
        session.arrow_down();

        let view = render(&session, &PanelConfig::default());
        assert!(view.visible);

        let PanelBody::Results { rows } = view.body else {
            panic!("Expected result rows");
        };
        assert_eq!(rows.len(), 2);

        let hooks = &rows[0];
        assert!(hooks.selected);
        assert_eq!(hooks.href, "/notebooks/frontend/hooks");
        assert_eq!(hooks.title[0], Segment::matched("React"));
        let excerpt = hooks.excerpt.as_ref().unwrap();
        assert_eq!(excerpt.iter().filter(|s| s.matched).count(), 1);

        let context = &rows[1];
        assert!(!context.selected);
        assert!(context.excerpt.is_none(), "empty excerpt is not rendered");
        assert_eq!(context.title, vec![Segment::plain("Context API")]);
    }

    #[test]
    fn test_no_results_affordance_is_visible() {
        let mut session = create_test_session();
        session.input("zzz-no-match");

        let view = render(&session, &PanelConfig::default());
        assert!(view.visible);
        assert_eq!(
            view.body,
            PanelBody::NoResults {
                label: "未找到匹配的笔记".to_string()
            }
        );
    }

    #[test]
    fn test_dismissed_panel_keeps_rows_but_hides() {
        let mut session = create_test_session();
        session.input("react");
        session.click_outside();

        let view = render(&session, &PanelConfig::default());
        assert!(!view.visible);
        assert_eq!(view.query, "react");
        assert!(matches!(view.body, PanelBody::Results { ref rows } if rows.len() == 2));
    }

    #[test]
    fn test_view_serializes_for_host() {
        let mut session = create_test_session();
        session.input("hooks");
        let json = serde_json::to_value(render(&session, &PanelConfig::default())).unwrap();
        assert_eq!(json["body"]["kind"], "results");
        assert_eq!(json["body"]["rows"][0]["notebookTitle"], "Frontend");
    }
}
