//! Directory listing entries as returned by the file API.

use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::format::format_size;

/// Entry kind. Only folders are navigable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Folder,
    File,
}

/// Client-side sync state of an entry.
///
/// Entries coming from the API are always `Confirmed`. Folders created in
/// the UI start as `Pending` until the API acknowledges them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SyncState {
    #[default]
    Confirmed,
    Pending,
    Failed,
}

/// A file or folder in the current listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Human-readable size ("1.5K"). The API may also send a byte count.
    #[serde(
        default,
        deserialize_with = "deserialize_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<String>,
    #[serde(default, alias = "modifiedAt", skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    #[serde(skip)]
    pub sync: SyncState,
}

impl Entry {
    /// Create a confirmed folder entry.
    pub fn folder(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: EntryKind::Folder,
            size: None,
            modified: None,
            sync: SyncState::Confirmed,
        }
    }

    /// Create a confirmed file entry.
    pub fn file(id: impl Into<String>, name: impl Into<String>, size: Option<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: EntryKind::File,
            size,
            modified: None,
            sync: SyncState::Confirmed,
        }
    }

    #[inline]
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireSize {
    Text(String),
    Bytes(u64),
}

fn deserialize_size<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<WireSize>::deserialize(deserializer)? {
        None => None,
        Some(WireSize::Text(text)) if text.is_empty() => None,
        Some(WireSize::Text(text)) => Some(text),
        Some(WireSize::Bytes(bytes)) => Some(format_size(bytes)),
    })
}

/// A file picked by the user, read into memory before upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: None,
            bytes,
        }
    }
}
