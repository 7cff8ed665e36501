//! UI components built with Leptos.
//!
//! - [`explorer`] - File browser UI
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`Toaster`] - Toast notifications

pub mod explorer;
pub mod icons;
mod toast;

pub use toast::Toaster;
