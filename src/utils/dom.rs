//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement, Storage, Window};

use crate::core::error::ExplorerError;
use crate::models::UploadFile;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Ask the user for a line of text with the native prompt dialog.
///
/// Returns `None` if the dialog was cancelled or is unavailable.
pub fn prompt(message: &str) -> Option<String> {
    window()?.prompt_with_message(message).ok()?
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

/// Set the URL hash (adds to browser history).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}

// =============================================================================
// File Selection
// =============================================================================

/// Take the files selected in a file input and clear it, so choosing the
/// same files again fires `change` again.
pub fn take_selected_files(input: &HtmlInputElement) -> Vec<File> {
    let files = input
        .files()
        .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
        .unwrap_or_default();
    input.set_value("");
    files
}

/// Read a selected file into memory.
pub async fn read_file(file: &File) -> Result<UploadFile, ExplorerError> {
    let name = file.name();
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ExplorerError::FileRead {
            name: name.clone(),
            reason: e.as_string().unwrap_or_else(|| "read failed".to_string()),
        })?;

    let mut upload = UploadFile::new(name, js_sys::Uint8Array::new(&buffer).to_vec());
    upload.content_type = Some(file.type_()).filter(|t| !t.is_empty());
    Ok(upload)
}
