//! Explorer location as an ordered list of folder names from the root.

use std::fmt;

/// Current location in the explorer. Empty means root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExplorerPath {
    segments: Vec<String>,
}

impl ExplorerPath {
    /// The root location.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Path with `name` appended.
    pub fn join(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self { segments }
    }

    /// Path cut down to its first `index + 1` segments.
    ///
    /// Returns `None` when `index` does not point at an ancestor, i.e. the
    /// result would be equal to (or longer than) the current path.
    pub fn truncate_to(&self, index: usize) -> Option<Self> {
        let keep = index.checked_add(1)?;
        if keep >= self.segments.len() {
            return None;
        }
        Some(Self {
            segments: self.segments[..keep].to_vec(),
        })
    }

    /// Slash-joined form used in API requests ("A/B"; "" for root).
    pub fn to_api_string(&self) -> String {
        self.segments.join("/")
    }
}

impl fmt::Display for ExplorerPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))
    }
}
