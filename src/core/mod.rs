//! Core logic of the file explorer.
//!
//! This module provides:
//! - [`ExplorerSession`] state and its transitions
//! - [`ExplorerActions`] async user actions over a [`FileApi`]
//! - [`HttpFileApi`] REST client
//! - [`error::ExplorerError`] error taxonomy

pub mod actions;
pub mod api;
pub mod error;
pub mod session;

pub use actions::{ExplorerActions, Notifier};
pub use api::{FileApi, HttpFileApi};
pub use session::ExplorerSession;
