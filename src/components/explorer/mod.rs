//! File explorer UI components.
//!
//! Components:
//! - [`Explorer`] - Main explorer view
//! - [`Header`] - Breadcrumb and action buttons
//! - [`Breadcrumb`] - Clickable path from Home to the current folder
//! - [`FileList`] - Current listing as rows or tiles

mod breadcrumb;
#[allow(clippy::module_inception)]
mod explorer;
mod file_list;
mod header;

pub use breadcrumb::Breadcrumb;
pub use explorer::Explorer;
pub use file_list::FileList;
pub use header::Header;
