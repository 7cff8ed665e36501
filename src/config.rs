//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name used in logs.
pub const APP_NAME: &str = "filedeck";

// =============================================================================
// Network Configuration
// =============================================================================

/// Default base URL of the file API.
pub const DEFAULT_API_BASE_URL: &str = "/api";

/// localStorage key that overrides [`DEFAULT_API_BASE_URL`].
pub const API_BASE_URL_KEY: &str = "filedeck.api_base";

/// Fetch/upload request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: u32 = 30_000;

/// Base URL of the file API, honoring the localStorage override.
pub fn api_base_url() -> String {
    crate::utils::dom::local_storage()
        .and_then(|storage| storage.get_item(API_BASE_URL_KEY).ok().flatten())
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

// =============================================================================
// UI Configuration
// =============================================================================

/// localStorage key for the persisted list/grid choice.
pub const VIEW_MODE_KEY: &str = "filedeck.view_mode";

/// How long a toast stays on screen, in milliseconds.
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Maximum number of toasts visible at once.
pub const MAX_TOASTS: usize = 5;

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
