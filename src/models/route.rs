//! Hash-based routing: the explorer location lives in the URL hash.
//!
//! URL format: `#/A/B` with each segment percent-encoded
//! (e.g. `#/Photos/2024%20Trip`). `#/` or an empty hash is the root.

use super::ExplorerPath;

/// Parse a URL hash into an explorer path.
pub fn path_from_hash(hash: &str) -> ExplorerPath {
    let raw = hash.trim_start_matches('#').trim_start_matches('/');

    ExplorerPath::from_segments(
        raw.split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match urlencoding::decode(s) {
                Ok(decoded) => decoded.into_owned(),
                Err(_) => s.to_string(),
            }),
    )
}

/// Convert an explorer path to a URL hash.
pub fn path_to_hash(path: &ExplorerPath) -> String {
    if path.is_root() {
        return "#/".to_string();
    }
    let encoded: Vec<String> = path
        .segments()
        .iter()
        .map(|s| urlencoding::encode(s).into_owned())
        .collect();
    format!("#/{}", encoded.join("/"))
}

/// Path encoded in the current browser URL.
pub fn current_path() -> ExplorerPath {
    path_from_hash(&crate::utils::dom::get_hash())
}

/// Update the browser URL to point at `path`, unless it already does.
pub fn push_path(path: &ExplorerPath) {
    if current_path() != *path {
        crate::utils::dom::set_hash(&path_to_hash(path));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_from_hash() {
        assert_eq!(path_from_hash(""), ExplorerPath::root());
        assert_eq!(path_from_hash("#"), ExplorerPath::root());
        assert_eq!(path_from_hash("#/"), ExplorerPath::root());
        assert_eq!(
            path_from_hash("#/Docs/Reports"),
            ExplorerPath::from_segments(["Docs", "Reports"])
        );
        // Stray slashes are ignored
        assert_eq!(
            path_from_hash("#//Docs//"),
            ExplorerPath::from_segments(["Docs"])
        );
    }

    #[test]
    fn test_path_to_hash() {
        assert_eq!(path_to_hash(&ExplorerPath::root()), "#/");
        assert_eq!(
            path_to_hash(&ExplorerPath::from_segments(["Docs", "Reports"])),
            "#/Docs/Reports"
        );
    }

    #[test]
    fn test_encoded_segments_survive_hash() {
        let path = ExplorerPath::from_segments(["2024 Trip", "a/b", "ünï"]);
        let hash = path_to_hash(&path);
        assert_eq!(hash, "#/2024%20Trip/a%2Fb/%C3%BCn%C3%AF");
        assert_eq!(path_from_hash(&hash), path);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_push_path_updates_location() {
        let path = ExplorerPath::from_segments(["Photos", "2024 Trip"]);
        push_path(&path);
        assert_eq!(crate::utils::dom::get_hash(), "/Photos/2024%20Trip");
        assert_eq!(current_path(), path);

        push_path(&ExplorerPath::root());
        assert!(current_path().is_root());
    }
}
