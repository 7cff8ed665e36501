//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Entry`], [`EntryKind`], [`SyncState`], [`UploadFile`] - Directory listing
//! - [`ExplorerPath`] - Current location, mirrored in the URL hash ([`route`])
//! - [`ViewMode`], [`UploadState`] - View management
//! - [`Toast`], [`ToastLevel`], [`ToastQueue`] - Notifications

mod entry;
mod explorer;
mod path;
pub mod route;
mod toast;

pub use entry::{Entry, EntryKind, SyncState, UploadFile};
pub use explorer::{UploadState, ViewMode};
pub use path::ExplorerPath;
pub use toast::{Toast, ToastLevel, ToastQueue};
