use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::index::{ContentLoader, IndexError, LoadStats, NoteIndex};
use crate::vfs::FileSystem;

/// File name looked up at the site root
pub const CONFIG_FILE_NAME: &str = "notedeck.yaml";

/// Top-level configuration for notedeck
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotedeckConfig {
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub panel: PanelConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the note index comes from, relative to the site root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Prebuilt JSON search payload; preferred when it exists
    #[serde(default = "default_index_path")]
    pub path: PathBuf,
    /// Content collections root, read when the JSON payload is absent
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,
}

/// Labels shown by the result panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_no_results_label")]
    pub no_results_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether to report index statistics after loading
    #[serde(default = "default_true")]
    pub show_index_stats: bool,
}

fn default_index_path() -> PathBuf {
    PathBuf::from("search-index.json")
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("src/content")
}

fn default_placeholder() -> String {
    "搜索笔记...".to_string()
}

fn default_no_results_label() -> String {
    "未找到匹配的笔记".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            path: default_index_path(),
            content_dir: default_content_dir(),
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            no_results_label: default_no_results_label(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            show_index_stats: true,
        }
    }
}

/// How an index was obtained
#[derive(Debug, Clone)]
pub enum IndexOrigin {
    Json(PathBuf),
    Content(PathBuf, LoadStats),
}

impl NotedeckConfig {
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Read `notedeck.yaml` under `root`, falling back to defaults when it is
    /// missing or malformed.
    pub fn discover(root: &Path, fs: &dyn FileSystem) -> Self {
        let path = root.join(CONFIG_FILE_NAME);
        if !fs.is_file(&path) {
            return Self::default();
        }

        match fs
            .read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|content| Self::from_yaml(&content).map_err(|e| e.to_string()))
        {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load the note index for a site rooted at `root`.
    pub fn load_index(
        &self,
        root: &Path,
        fs: &dyn FileSystem,
    ) -> Result<(NoteIndex, IndexOrigin), IndexError> {
        let json_path = root.join(&self.index.path);
        if fs.is_file(&json_path) {
            let index = NoteIndex::load(&json_path, fs)?;
            return Ok((index, IndexOrigin::Json(json_path)));
        }

        let content_dir = root.join(&self.index.content_dir);
        let (index, stats) = ContentLoader::new(fs).load(&content_dir)?;
        Ok((index, IndexOrigin::Content(content_dir, stats)))
    }
}
