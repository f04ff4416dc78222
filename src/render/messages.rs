use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::models::Page;

pub const PREVIOUS: &str = "« previous";
pub const NEXT: &str = "next »";
pub const VIEW: &str = "View";
pub const COUNTER: &str =
    "Page {page} of {pages}, showing {current} records out of {count} total, starting on record {start}, ending on {end}";

/// Translation lookup injected into the renderer. Returns the msgid itself
/// when no translation exists.
pub trait Messages: Send + Sync {
    fn translate<'a>(&'a self, msgid: &'a str) -> Cow<'a, str>;
}

/// Untranslated English.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnglishMessages;

impl Messages for EnglishMessages {
    fn translate<'a>(&'a self, msgid: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(msgid)
    }
}

#[derive(Debug, Error)]
pub enum MessagesError {
    #[error("Failed to read message catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Message catalog {path} is not a JSON object of strings: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// msgid → translation map, usually loaded from a JSON object file.
#[derive(Clone, Debug, Default)]
pub struct MessageCatalog {
    entries: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn from_map(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn load(path: &Path) -> Result<Self, MessagesError> {
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| MessagesError::Io {
            path: display.clone(),
            source,
        })?;
        let entries = serde_json::from_str::<HashMap<String, String>>(&text)
            .map_err(|source| MessagesError::Json { path: display, source })?;
        tracing::info!(path = %path.display(), entries = entries.len(), "Loaded message catalog");
        Ok(Self { entries })
    }
}

impl Messages for MessageCatalog {
    fn translate<'a>(&'a self, msgid: &'a str) -> Cow<'a, str> {
        match self.entries.get(msgid) {
            Some(t) => Cow::Borrowed(t.as_str()),
            None => Cow::Borrowed(msgid),
        }
    }
}

/// Fills the counter placeholders of a (translated) counter format.
pub fn format_counter(format: &str, page: &Page) -> String {
    format
        .replace("{pages}", &page.total_pages.to_string())
        .replace("{page}", &page.page_number.to_string())
        .replace("{current}", &page.records.len().to_string())
        .replace("{count}", &page.total_count.to_string())
        .replace("{start}", &page.current_range_start.to_string())
        .replace("{end}", &page.current_range_end.to_string())
}
