use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LspSettings {
    /// Logging level for the server
    #[serde(default)]
    pub log_level: LogLevel,

    /// Public base URL of the site. When set, navigation also asks the
    /// client to open the absolute page URL.
    #[serde(default)]
    pub site_url: Option<Url>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl Default for LspSettings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            site_url: None,
        }
    }
}

impl LspSettings {
    /// Absolute URL for a site-relative path
    pub fn page_url(&self, path: &str) -> Option<Url> {
        self.site_url.as_ref().and_then(|base| base.join(path).ok())
    }
}
