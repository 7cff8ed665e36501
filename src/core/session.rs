//! Explorer session state.
//!
//! Plain state with no DOM or reactive dependencies. Every user action maps
//! to one method here; the async parts (fetches, uploads) live in
//! [`super::actions`] and call back into the session between awaits.

use crate::core::error::ExplorerError;
use crate::models::{Entry, EntryKind, ExplorerPath, SyncState, UploadState, ViewMode};

/// Tag for an in-flight listing request.
///
/// A response is applied only if the session has not issued a newer request
/// and is still showing the path the request was made for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingTicket {
    generation: u64,
    path: ExplorerPath,
}

impl ListingTicket {
    pub fn path(&self) -> &ExplorerPath {
        &self.path
    }
}

/// State owned by the explorer view.
#[derive(Clone, Debug, Default)]
pub struct ExplorerSession {
    entries: Vec<Entry>,
    path: ExplorerPath,
    view_mode: ViewMode,
    upload: UploadState,
    generation: u64,
}

impl ExplorerSession {
    pub fn new(path: ExplorerPath, view_mode: ViewMode) -> Self {
        Self {
            path,
            view_mode,
            ..Self::default()
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn path(&self) -> &ExplorerPath {
        &self.path
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn upload(&self) -> UploadState {
        self.upload
    }

    // ------------------------------------------------------------------
    // Listing
    // ------------------------------------------------------------------

    /// Start a listing request for the current path.
    pub fn begin_load(&mut self) -> ListingTicket {
        self.generation += 1;
        ListingTicket {
            generation: self.generation,
            path: self.path.clone(),
        }
    }

    pub fn is_current(&self, ticket: &ListingTicket) -> bool {
        ticket.generation == self.generation && ticket.path == self.path
    }

    /// Replace the listing with a fetch result.
    ///
    /// Returns `false` (and leaves the listing alone) for stale tickets.
    pub fn apply_listing(&mut self, ticket: &ListingTicket, entries: Vec<Entry>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.entries = entries;
        true
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Move to `path`. Returns `true` if the location changed.
    pub fn navigate(&mut self, path: ExplorerPath) -> bool {
        if path == self.path {
            return false;
        }
        self.path = path;
        true
    }

    /// Open an entry. Only folders navigate; files are a no-op.
    pub fn activate(&mut self, entry: &Entry) -> bool {
        match entry.kind {
            EntryKind::Folder => {
                let next = self.path.join(&entry.name);
                self.navigate(next)
            }
            EntryKind::File => false,
        }
    }

    /// Jump to the breadcrumb at `index` (keeps the first `index + 1` segments).
    pub fn navigate_to_breadcrumb(&mut self, index: usize) -> bool {
        match self.path.truncate_to(index) {
            Some(path) => self.navigate(path),
            None => false,
        }
    }

    pub fn navigate_home(&mut self) -> bool {
        self.navigate(ExplorerPath::root())
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    // ------------------------------------------------------------------
    // Upload
    // ------------------------------------------------------------------

    /// Enter `Uploading` for a selection of `total` files.
    ///
    /// Returns the destination path, or `None` for an empty selection or
    /// when an upload is already running.
    pub fn begin_upload(&mut self, total: usize) -> Option<ExplorerPath> {
        if total == 0 || self.upload.is_uploading() {
            return None;
        }
        self.upload = UploadState::Uploading {
            completed: 0,
            total,
        };
        Some(self.path.clone())
    }

    pub fn record_upload_progress(&mut self) {
        if let UploadState::Uploading { completed, total } = &mut self.upload {
            *completed = (*completed + 1).min(*total);
        }
    }

    /// Leave `Uploading` and append the uploaded entries.
    ///
    /// Entries are appended only while the listing still shows `destination`;
    /// returns whether they were. Entries whose id is already listed (a
    /// reload during the upload picked them up) are skipped.
    pub fn finish_upload(&mut self, destination: &ExplorerPath, uploaded: Vec<Entry>) -> bool {
        self.upload = UploadState::Idle;
        if *destination != self.path {
            return false;
        }
        for entry in uploaded {
            if self.find(&entry.id).is_none() {
                self.entries.push(entry);
            }
        }
        true
    }

    // ------------------------------------------------------------------
    // Local mutations
    // ------------------------------------------------------------------

    /// Remove the entry with `id`, keeping the others in order.
    pub fn delete_entry(&mut self, id: &str) -> Option<Entry> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(pos))
    }

    pub fn find(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Append a client-side folder in `Pending` state.
    ///
    /// The id is derived from `now_ms` and made unique within the listing.
    pub fn add_pending_folder(&mut self, name: &str, now_ms: u64) -> Entry {
        let base = now_ms.to_string();
        let mut id = base.clone();
        let mut suffix = 1;
        while self.find(&id).is_some() {
            id = format!("{base}-{suffix}");
            suffix += 1;
        }

        let mut folder = Entry::folder(id, name);
        folder.sync = SyncState::Pending;
        self.entries.push(folder.clone());
        folder
    }

    /// Replace a pending folder with the server's record of it.
    pub fn confirm_folder(&mut self, local_id: &str, mut confirmed: Entry) -> bool {
        let Some(slot) = self.entries.iter_mut().find(|e| e.id == local_id) else {
            return false;
        };
        confirmed.sync = SyncState::Confirmed;
        *slot = confirmed;
        true
    }

    pub fn fail_folder(&mut self, local_id: &str) -> bool {
        match self.entries.iter_mut().find(|e| e.id == local_id) {
            Some(entry) => {
                entry.sync = SyncState::Failed;
                true
            }
            None => false,
        }
    }
}

/// Normalize raw prompt input into a folder name.
///
/// `Ok(None)` means "nothing to do" (cancelled or blank input).
pub fn validate_folder_name(input: Option<&str>) -> Result<Option<String>, ExplorerError> {
    let Some(name) = input.map(str::trim).filter(|n| !n.is_empty()) else {
        return Ok(None);
    };
    if name.contains('/') {
        return Err(ExplorerError::Validation(
            "Folder name cannot contain '/'".to_string(),
        ));
    }
    if name == "." || name == ".." {
        return Err(ExplorerError::Validation(format!(
            "\"{name}\" is not a valid folder name"
        )));
    }
    Ok(Some(name.to_string()))
}
