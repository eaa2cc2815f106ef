use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// A named grouping that points at a notes collection by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: i64,
    pub name: String,
    /// Key into the catalog's notes map
    #[serde(rename = "dbase")]
    pub database: String,
}

/// A titled markdown document, carried base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    #[serde(rename = "data")]
    pub markdown_data: String,
}

impl Note {
    /// Build a note from plain markdown, encoding it for the wire.
    pub fn from_markdown(id: i64, title: impl Into<String>, markdown: &str) -> Self {
        Self {
            id,
            title: title.into(),
            markdown_data: STANDARD.encode(markdown.as_bytes()),
        }
    }

    /// Decode the payload back to markdown text.
    pub fn markdown(&self) -> Result<String, NoteDecodeError> {
        let bytes = STANDARD.decode(self.markdown_data.as_bytes())?;
        Ok(String::from_utf8(bytes)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NoteDecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// How a folder path segment addresses a folder.
///
/// Segments that parse as integers are ids; anything else is a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderRef {
    Id(i64),
    Name(String),
}

impl FolderRef {
    pub fn parse(segment: &str) -> Self {
        match segment.parse::<i64>() {
            Ok(id) => FolderRef::Id(id),
            Err(_) => FolderRef::Name(segment.to_string()),
        }
    }
}
