use notedeck_core::vfs::FileSystem;
use notedeck_core::{ListenerRegistry, NoteIndex, NotedeckConfig, SearchWidget};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::LspSettings;

/// Global state for the server
/// Must be Send + Sync
#[derive(Clone)]
pub struct GlobalState {
    /// The mounted widget; `None` before initialize and after shutdown.
    /// Every event takes the write lock, so events apply one at a time.
    pub widget: Arc<RwLock<Option<SearchWidget>>>,
    /// Shared read-only index, also used by stateless lookups
    pub index: Arc<RwLock<Option<Arc<NoteIndex>>>>,
    pub site: Arc<RwLock<NotedeckConfig>>,
    pub config: Arc<RwLock<LspSettings>>,
    pub listeners: ListenerRegistry,
    pub fs: Arc<dyn FileSystem>,
}

impl GlobalState {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            widget: Arc::new(RwLock::new(None)),
            index: Arc::new(RwLock::new(None)),
            site: Arc::new(RwLock::new(NotedeckConfig::default())),
            config: Arc::new(RwLock::new(LspSettings::default())),
            listeners: ListenerRegistry::new(),
            fs,
        }
    }
}
