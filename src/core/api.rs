//! File API collaborator.
//!
//! [`FileApi`] is the seam between the explorer and whatever serves the
//! listing. [`HttpFileApi`] talks to a REST backend:
//!
//! - `GET  {base}/files?path=A/B` -> `[Entry]`
//! - `POST {base}/files?path=A/B` (multipart, field `file`) -> `Entry`
//! - `POST {base}/folders` `{"path": "A/B", "name": "X"}` -> `Entry`

use std::{future::Future, pin::Pin};

use gloo_net::http::{Request, Response};
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use crate::core::error::ExplorerError;
use crate::models::{Entry, ExplorerPath, UploadFile};
use crate::utils::fetch::with_timeout;

/// Object-safe boxed future used by [`FileApi`] methods.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ExplorerError>> + 'a>>;

/// Backend operations the explorer consumes.
pub trait FileApi {
    /// Lists the contents of `path`.
    fn list_entries<'a>(&'a self, path: &'a ExplorerPath) -> ApiFuture<'a, Vec<Entry>>;

    /// Uploads one file into `path` and returns its metadata.
    fn upload_entry<'a>(
        &'a self,
        file: &'a UploadFile,
        path: &'a ExplorerPath,
    ) -> ApiFuture<'a, Entry>;

    /// Creates a folder named `name` inside `path`.
    fn create_folder<'a>(&'a self, name: &'a str, path: &'a ExplorerPath) -> ApiFuture<'a, Entry>;
}

/// [`FileApi`] over HTTP using the Fetch API.
#[derive(Clone, Debug)]
pub struct HttpFileApi {
    base_url: String,
    timeout_ms: u32,
}

#[derive(Serialize)]
struct CreateFolderBody<'a> {
    path: String,
    name: &'a str,
}

impl HttpFileApi {
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_ms,
        }
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }

    async fn send(&self, request: Request) -> Result<Response, ExplorerError> {
        let response = with_timeout(request.send(), self.timeout_ms).await??;
        if !response.ok() {
            return Err(ExplorerError::Http(response.status()));
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: Request) -> Result<T, ExplorerError> {
        let response = self.send(request).await?;
        Ok(response.json::<T>().await?)
    }

    async fn list(&self, path: &ExplorerPath) -> Result<Vec<Entry>, ExplorerError> {
        let request = Request::get(&self.endpoint("files"))
            .query([("path", path.to_api_string())])
            .build()?;
        self.send_json(request).await
    }

    async fn upload(&self, file: &UploadFile, path: &ExplorerPath) -> Result<Entry, ExplorerError> {
        let form = FormData::new().map_err(js_error)?;
        let blob = to_blob(file)?;
        form.append_with_blob_and_filename("file", &blob, &file.name)
            .map_err(js_error)?;

        let request = Request::post(&self.endpoint("files"))
            .query([("path", path.to_api_string())])
            .body(form)?;
        self.send_json(request).await
    }

    async fn mkdir(&self, name: &str, path: &ExplorerPath) -> Result<Entry, ExplorerError> {
        let body = CreateFolderBody {
            path: path.to_api_string(),
            name,
        };
        let request = Request::post(&self.endpoint("folders")).json(&body)?;
        self.send_json(request).await
    }
}

impl FileApi for HttpFileApi {
    fn list_entries<'a>(&'a self, path: &'a ExplorerPath) -> ApiFuture<'a, Vec<Entry>> {
        Box::pin(self.list(path))
    }

    fn upload_entry<'a>(
        &'a self,
        file: &'a UploadFile,
        path: &'a ExplorerPath,
    ) -> ApiFuture<'a, Entry> {
        Box::pin(self.upload(file, path))
    }

    fn create_folder<'a>(&'a self, name: &'a str, path: &'a ExplorerPath) -> ApiFuture<'a, Entry> {
        Box::pin(self.mkdir(name, path))
    }
}

fn to_blob(file: &UploadFile) -> Result<Blob, ExplorerError> {
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    if let Some(content_type) = &file.content_type {
        options.set_type(content_type);
    }
    Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)
}

fn js_error(value: JsValue) -> ExplorerError {
    ExplorerError::Network(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let api = HttpFileApi::new("https://files.example.com/api/", 1000);
        assert_eq!(api.endpoint("files"), "https://files.example.com/api/files");
        assert_eq!(api.endpoint("folders"), "https://files.example.com/api/folders");
    }

    #[test]
    fn test_create_folder_body() {
        let body = CreateFolderBody {
            path: ExplorerPath::from_segments(["A", "B"]).to_api_string(),
            name: "X",
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"path":"A/B","name":"X"}"#
        );
    }
}
