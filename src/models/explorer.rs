//! Explorer-related data types for the file browser UI.

use serde::{Deserialize, Serialize};

/// Layout of the listing (list or grid).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// List view (default)
    #[default]
    List,
    /// Grid of tiles
    Grid,
}

/// Upload progress. `Idle -> Uploading -> Idle`, no cancellation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadState {
    #[default]
    Idle,
    Uploading {
        /// Files finished so far
        completed: usize,
        /// Files in the selection
        total: usize,
    },
}

impl UploadState {
    pub fn is_uploading(&self) -> bool {
        matches!(self, Self::Uploading { .. })
    }
}
