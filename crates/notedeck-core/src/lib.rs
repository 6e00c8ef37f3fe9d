//! Notedeck Core Library
//!
//! Incremental note search: matcher, highlighter and the query session
//! state machine behind the site's search box.
//! No UI or protocol dependencies, pure logic plus index loading.
//!

pub mod config;
pub mod highlight;
pub mod index;
pub mod matcher;
pub mod model;
pub mod navigation;
pub mod render;
pub mod session;
pub mod vfs;
pub mod widget;

pub use config::NotedeckConfig;
pub use highlight::highlight;
pub use index::{ContentLoader, IndexError, NoteIndex};
pub use matcher::{search, MAX_RESULTS};
pub use model::{NoteRecord, Segment};
pub use navigation::{Namespace, NavigationTarget};
pub use render::{render, PanelBody, PanelView, ResultRow};
pub use session::{Key, KeyOutcome, SearchSession, SessionState};
pub use widget::{EventResponse, ListenerKind, ListenerRegistry, SearchWidget, WidgetEvent};
