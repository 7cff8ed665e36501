//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`dom`] - Window, localStorage, URL hash and file input access
//! - [`fetch`] - Timeout racing for network requests
//! - [`format`] - Display formatting for sizes and progress
//! - [`prefs`] - JSON preferences in localStorage
//! - [`time`] - Wall-clock timestamps

pub mod dom;
pub mod fetch;
pub mod format;
pub mod prefs;
pub mod time;
