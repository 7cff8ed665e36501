//! Persisted UI preferences.
//!
//! Values are stored as JSON in localStorage so they survive reloads.

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use super::dom;

/// Preference storage errors.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("localStorage is not available")]
    StorageUnavailable,
    #[error("could not encode preference: {0}")]
    Encode(#[from] serde_json::Error),
    /// Quota exceeded or storage disabled by the browser
    #[error("could not write preference {0}")]
    Write(String),
}

/// Read a preference from localStorage.
///
/// Returns `None` if the key doesn't exist or deserialization fails.
pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = dom::local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Store a preference in localStorage.
pub fn set<T: Serialize>(key: &str, data: &T) -> Result<(), PrefsError> {
    let storage = dom::local_storage().ok_or(PrefsError::StorageUnavailable)?;
    let json = serde_json::to_string(data)?;
    storage
        .set_item(key, &json)
        .map_err(|_| PrefsError::Write(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PrefsError::StorageUnavailable.to_string(),
            "localStorage is not available"
        );
        assert_eq!(
            PrefsError::Write("filedeck.view_mode".into()).to_string(),
            "could not write preference filedeck.view_mode"
        );

        let encode: PrefsError = serde_json::from_str::<u8>("x").unwrap_err().into();
        assert!(encode.to_string().starts_with("could not encode preference"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;
    use crate::models::ViewMode;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_view_mode_survives_storage() {
        let key = "filedeck.test.view_mode";
        set(key, &ViewMode::Grid).unwrap();
        assert_eq!(get::<ViewMode>(key), Some(ViewMode::Grid));
    }

    #[wasm_bindgen_test]
    fn test_missing_or_garbled_value_reads_as_none() {
        assert_eq!(get::<ViewMode>("filedeck.test.missing"), None);

        let storage = dom::local_storage().unwrap();
        storage.set_item("filedeck.test.garbled", "not json").unwrap();
        assert_eq!(get::<ViewMode>("filedeck.test.garbled"), None);
    }
}
