//! User actions of the explorer view.
//!
//! [`ExplorerActions`] runs the async side of each action against a
//! [`FileApi`] and writes results back into an [`ExplorerSession`] through a
//! [`SessionStore`]. Outcomes are reported through a [`Notifier`].

use std::rc::Rc;

use leptos::logging::{log, warn};
use leptos::prelude::*;

use super::api::FileApi;
use super::session::{ExplorerSession, validate_folder_name};
use crate::models::{Entry, ExplorerPath, ToastLevel, UploadFile, ViewMode};

/// Access to the session across await points.
///
/// Both methods return `None` once the store is gone (the view was
/// unmounted); late completions are then dropped.
pub trait SessionStore {
    fn read<R>(&self, f: impl FnOnce(&ExplorerSession) -> R) -> Option<R>;
    fn write<R>(&self, f: impl FnOnce(&mut ExplorerSession) -> R) -> Option<R>;
}

impl SessionStore for RwSignal<ExplorerSession> {
    fn read<R>(&self, f: impl FnOnce(&ExplorerSession) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut ExplorerSession) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T: SessionStore> SessionStore for &T {
    fn read<R>(&self, f: impl FnOnce(&ExplorerSession) -> R) -> Option<R> {
        (**self).read(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut ExplorerSession) -> R) -> Option<R> {
        (**self).write(f)
    }
}

/// Sink for user-visible notifications.
pub trait Notifier {
    fn notify(&self, level: ToastLevel, message: String);

    fn success(&self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.notify(ToastLevel::Success, message.into());
    }

    fn error(&self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.notify(ToastLevel::Error, message.into());
    }

    fn info(&self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.notify(ToastLevel::Info, message.into());
    }
}

impl<T: Notifier> Notifier for &T {
    fn notify(&self, level: ToastLevel, message: String) {
        (**self).notify(level, message);
    }
}

/// Explorer actions bound to an API, a session store and a notifier.
#[derive(Clone)]
pub struct ExplorerActions<S, N> {
    api: Rc<dyn FileApi>,
    store: S,
    notifier: N,
}

impl<S: SessionStore, N: Notifier> ExplorerActions<S, N> {
    pub fn new(api: Rc<dyn FileApi>, store: S, notifier: N) -> Self {
        Self {
            api,
            store,
            notifier,
        }
    }

    /// Fetch the listing for the current path and replace the session's.
    pub async fn load_listing(&self) {
        let Some(ticket) = self.store.write(ExplorerSession::begin_load) else {
            return;
        };

        match self.api.list_entries(ticket.path()).await {
            Ok(entries) => {
                if self.store.write(|s| s.apply_listing(&ticket, entries)) == Some(false) {
                    log!("discarding stale listing for {}", ticket.path());
                }
            }
            Err(err) => {
                warn!("listing {} failed: {err}", ticket.path());
                if self.store.read(|s| s.is_current(&ticket)) == Some(true) {
                    self.notifier.error(format!("Could not load folder: {err}"));
                }
            }
        }
    }

    async fn reload_if(&self, changed: Option<bool>) {
        if changed == Some(true) {
            self.load_listing().await;
        }
    }

    /// Open an entry: folders navigate, files do nothing.
    pub async fn open_entry(&self, entry: Entry) {
        let changed = self.store.write(|s| s.activate(&entry));
        self.reload_if(changed).await;
    }

    pub async fn open_breadcrumb(&self, index: usize) {
        let changed = self.store.write(|s| s.navigate_to_breadcrumb(index));
        self.reload_if(changed).await;
    }

    pub async fn open_home(&self) {
        let changed = self.store.write(ExplorerSession::navigate_home);
        self.reload_if(changed).await;
    }

    /// Navigate to an arbitrary path (browser back/forward).
    pub async fn open_path(&self, path: ExplorerPath) {
        let changed = self.store.write(|s| s.navigate(path));
        self.reload_if(changed).await;
    }

    /// Upload files one after another into the current folder.
    pub async fn upload(&self, files: Vec<UploadFile>) {
        if files.is_empty() {
            return;
        }
        let Some(started) = self.store.write(|s| s.begin_upload(files.len())) else {
            return;
        };
        let Some(destination) = started else {
            self.notifier.info("An upload is already in progress");
            return;
        };

        let mut uploaded = Vec::with_capacity(files.len());
        let mut failure = None;
        for file in &files {
            match self.api.upload_entry(file, &destination).await {
                Ok(entry) => {
                    uploaded.push(entry);
                    self.store.write(ExplorerSession::record_upload_progress);
                }
                Err(err) => {
                    warn!("upload of {} to {destination} failed: {err}", file.name);
                    failure = Some((file.name.clone(), err));
                    break;
                }
            }
        }

        let count = uploaded.len();
        let Some(appended) = self.store.write(|s| s.finish_upload(&destination, uploaded)) else {
            return;
        };
        if !appended {
            log!("{count} uploaded entries belong to {destination}, not shown");
        }

        match failure {
            None => self
                .notifier
                .success(format!("{count} file(s) uploaded successfully")),
            Some((name, err)) => self.notifier.error(format!(
                "Upload of {name} failed: {err} ({count} of {} uploaded)",
                files.len()
            )),
        }
    }

    /// Create a folder from raw prompt input.
    ///
    /// The folder shows up immediately as pending and is confirmed or marked
    /// failed once the API answers.
    pub async fn create_folder(&self, input: Option<String>, now_ms: u64) {
        let name = match validate_folder_name(input.as_deref()) {
            Ok(Some(name)) => name,
            Ok(None) => return,
            Err(err) => {
                self.notifier.error(err.to_string());
                return;
            }
        };

        let Some((local, path)) = self
            .store
            .write(|s| (s.add_pending_folder(&name, now_ms), s.path().clone()))
        else {
            return;
        };
        self.notifier.success(format!("Folder \"{name}\" created"));

        match self.api.create_folder(&name, &path).await {
            Ok(entry) => {
                self.store.write(|s| s.confirm_folder(&local.id, entry));
            }
            Err(err) => {
                warn!("creating folder {name} in {path} failed: {err}");
                if self.store.write(|s| s.fail_folder(&local.id)).is_some() {
                    self.notifier
                        .error(format!("Folder \"{name}\" was not saved: {err}"));
                }
            }
        }
    }

    pub fn download(&self, entry: &Entry) {
        self.notifier.success(format!("Downloading {}...", entry.name));
    }

    /// Remove an entry from the listing. Local only.
    pub fn delete(&self, id: &str) {
        if self.store.write(|s| s.delete_entry(id)).flatten().is_some() {
            self.notifier.success("Item deleted");
        }
    }

    pub fn set_view_mode(&self, mode: ViewMode) {
        self.store.write(|s| s.set_view_mode(mode));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    use futures::channel::oneshot;
    use futures::future::join;

    use super::*;
    use crate::core::api::ApiFuture;
    use crate::core::error::ExplorerError;
    use crate::models::{EntryKind, SyncState, UploadState};

    impl SessionStore for RefCell<ExplorerSession> {
        fn read<R>(&self, f: impl FnOnce(&ExplorerSession) -> R) -> Option<R> {
            Some(f(&self.borrow()))
        }

        fn write<R>(&self, f: impl FnOnce(&mut ExplorerSession) -> R) -> Option<R> {
            Some(f(&mut self.borrow_mut()))
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        toasts: RefCell<Vec<(ToastLevel, String)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, level: ToastLevel, message: String) {
            self.toasts.borrow_mut().push((level, message));
        }
    }

    impl RecordingNotifier {
        fn taken(&self) -> Vec<(ToastLevel, String)> {
            self.toasts.take()
        }
    }

    /// In-memory backend with hooks for failures and delayed listings.
    #[derive(Default)]
    struct FakeApi {
        listings: RefCell<HashMap<ExplorerPath, Vec<Entry>>>,
        delayed: RefCell<HashMap<ExplorerPath, oneshot::Receiver<Vec<Entry>>>>,
        held_uploads: RefCell<HashMap<String, oneshot::Receiver<()>>>,
        failing_uploads: HashSet<String>,
        fail_listing: bool,
        fail_folders: bool,
        calls: RefCell<Vec<String>>,
    }

    impl FakeApi {
        fn with_listing(self, path: ExplorerPath, entries: Vec<Entry>) -> Self {
            self.listings.borrow_mut().insert(path, entries);
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl FileApi for FakeApi {
        fn list_entries<'a>(&'a self, path: &'a ExplorerPath) -> ApiFuture<'a, Vec<Entry>> {
            self.calls.borrow_mut().push(format!("list {path}"));
            let delayed = self.delayed.borrow_mut().remove(path);
            Box::pin(async move {
                if self.fail_listing {
                    return Err(ExplorerError::Http(500));
                }
                if let Some(rx) = delayed {
                    return rx.await.map_err(|_| ExplorerError::Network("cancelled".into()));
                }
                Ok(self.listings.borrow().get(path).cloned().unwrap_or_default())
            })
        }

        fn upload_entry<'a>(
            &'a self,
            file: &'a UploadFile,
            path: &'a ExplorerPath,
        ) -> ApiFuture<'a, Entry> {
            self.calls
                .borrow_mut()
                .push(format!("upload {} to {path}", file.name));
            let held = self.held_uploads.borrow_mut().remove(&file.name);
            Box::pin(async move {
                if let Some(rx) = held {
                    let _ = rx.await;
                }
                if self.failing_uploads.contains(&file.name) {
                    return Err(ExplorerError::Network("connection reset".into()));
                }
                Ok(Entry::file(
                    format!("srv-{}", file.name),
                    file.name.clone(),
                    Some(format!("{}B", file.bytes.len())),
                ))
            })
        }

        fn create_folder<'a>(
            &'a self,
            name: &'a str,
            path: &'a ExplorerPath,
        ) -> ApiFuture<'a, Entry> {
            self.calls.borrow_mut().push(format!("mkdir {name} in {path}"));
            Box::pin(async move {
                if self.fail_folders {
                    return Err(ExplorerError::Http(403));
                }
                Ok(Entry::folder(format!("srv-{name}"), name))
            })
        }
    }

    fn docs() -> ExplorerPath {
        ExplorerPath::from_segments(["Docs"])
    }

    fn root_listing() -> Vec<Entry> {
        vec![
            Entry::folder("d", "Docs"),
            Entry::file("r", "readme.md", Some("1.2K".into())),
        ]
    }

    fn files(names: &[&str]) -> Vec<UploadFile> {
        names
            .iter()
            .map(|n| UploadFile::new(*n, n.as_bytes().to_vec()))
            .collect()
    }

    fn entry_ids(store: &RefCell<ExplorerSession>) -> Vec<String> {
        store.borrow().entries().iter().map(|e| e.id.clone()).collect()
    }

    #[tokio::test]
    async fn test_load_listing_replaces_entries() {
        let api = Rc::new(FakeApi::default().with_listing(ExplorerPath::root(), root_listing()));
        let store = RefCell::new(ExplorerSession::default());
        let notifier = RecordingNotifier::default();
        let actions = ExplorerActions::new(api.clone(), &store, &notifier);

        actions.load_listing().await;

        assert_eq!(entry_ids(&store), ["d", "r"]);
        assert!(notifier.taken().is_empty());
    }

    #[tokio::test]
    async fn test_failed_listing_keeps_entries_and_reports() {
        let api = Rc::new(FakeApi {
            fail_listing: true,
            ..FakeApi::default()
        });
        let store = RefCell::new(ExplorerSession::default());
        {
            let mut session = store.borrow_mut();
            let ticket = session.begin_load();
            session.apply_listing(&ticket, root_listing());
        }
        let notifier = RecordingNotifier::default();
        let actions = ExplorerActions::new(api, &store, &notifier);

        actions.load_listing().await;

        assert_eq!(entry_ids(&store), ["d", "r"]);
        let toasts = notifier.taken();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].0, ToastLevel::Error);
        assert!(toasts[0].1.contains("HTTP 500"));
    }

    #[tokio::test]
    async fn test_open_folder_navigates_and_reloads() {
        let api = Rc::new(
            FakeApi::default()
                .with_listing(ExplorerPath::root(), root_listing())
                .with_listing(docs(), vec![Entry::file("q", "q1.pdf", None)]),
        );
        let store = RefCell::new(ExplorerSession::default());
        let notifier = RecordingNotifier::default();
        let actions = ExplorerActions::new(api.clone(), &store, &notifier);

        actions.load_listing().await;
        actions.open_entry(Entry::folder("d", "Docs")).await;

        assert_eq!(store.borrow().path(), &docs());
        assert_eq!(entry_ids(&store), ["q"]);
        assert_eq!(api.calls(), ["list /", "list /Docs"]);
    }

    #[tokio::test]
    async fn test_open_file_does_nothing() {
        let api = Rc::new(FakeApi::default());
        let store = RefCell::new(ExplorerSession::default());
        let notifier = RecordingNotifier::default();
        let actions = ExplorerActions::new(api.clone(), &store, &notifier);

        actions
            .open_entry(Entry::file("r", "readme.md", None))
            .await;

        assert!(store.borrow().path().is_root());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_breadcrumb_and_home_reload() {
        let api = Rc::new(FakeApi::default());
        let store = RefCell::new(ExplorerSession::new(
            ExplorerPath::from_segments(["A", "B", "C"]),
            ViewMode::List,
        ));
        let notifier = RecordingNotifier::default();
        let actions = ExplorerActions::new(api.clone(), &store, &notifier);

        actions.open_breadcrumb(0).await;
        assert_eq!(store.borrow().path(), &ExplorerPath::from_segments(["A"]));

        // Current folder: no navigation, no request
        actions.open_breadcrumb(0).await;

        actions.open_home().await;
        assert!(store.borrow().path().is_root());
        assert_eq!(api.calls(), ["list /A", "list /"]);
    }

    #[tokio::test]
    async fn test_stale_listing_does_not_overwrite_newer_path() {
        let api = Rc::new(
            FakeApi::default().with_listing(docs(), vec![Entry::file("q", "q1.pdf", None)]),
        );
        let (slow_tx, slow_rx) = oneshot::channel();
        api.delayed.borrow_mut().insert(ExplorerPath::root(), slow_rx);

        let store = RefCell::new(ExplorerSession::default());
        let notifier = RecordingNotifier::default();
        let actions = ExplorerActions::new(api.clone(), &store, &notifier);

        // Root request stays pending while the user opens Docs; the root
        // response then arrives last.
        join(actions.load_listing(), async {
            actions.open_path(docs()).await;
            slow_tx.send(root_listing()).unwrap();
        })
        .await;

        assert_eq!(store.borrow().path(), &docs());
        assert_eq!(entry_ids(&store), ["q"]);
    }

    #[tokio::test]
    async fn test_empty_upload_is_noop() {
        let api = Rc::new(FakeApi::default());
        let store = RefCell::new(ExplorerSession::default());
        let notifier = RecordingNotifier::default();
        let actions = ExplorerActions::new(api.clone(), &store, &notifier);

        actions.upload(Vec::new()).await;

        assert_eq!(store.borrow().upload(), UploadState::Idle);
        assert!(store.borrow().entries().is_empty());
        assert!(notifier.taken().is_empty());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_sequential_upload_appends_in_order() {
        let api = Rc::new(FakeApi::default().with_listing(ExplorerPath::root(), root_listing()));
        let store = RefCell::new(ExplorerSession::default());
        let notifier = RecordingNotifier::default();
        let actions = ExplorerActions::new(api.clone(), &store, &notifier);
        actions.load_listing().await;

        actions.upload(files(&["f1.txt", "f2.txt"])).await;

        assert_eq!(store.borrow().upload(), UploadState::Idle);
        assert_eq!(entry_ids(&store), ["d", "r", "srv-f1.txt", "srv-f2.txt"]);
        assert_eq!(
            api.calls(),
            ["list /", "upload f1.txt to /", "upload f2.txt to /"]
        );
        assert_eq!(
            notifier.taken(),
            [(
                ToastLevel::Success,
                "2 file(s) uploaded successfully".to_string()
            )]
        );
    }

    /// Session store that records every upload state change.
    struct UploadTrace {
        session: RefCell<ExplorerSession>,
        states: RefCell<Vec<UploadState>>,
    }

    impl UploadTrace {
        fn new() -> Self {
            Self {
                session: RefCell::new(ExplorerSession::default()),
                states: RefCell::new(Vec::new()),
            }
        }
    }

    impl SessionStore for UploadTrace {
        fn read<R>(&self, f: impl FnOnce(&ExplorerSession) -> R) -> Option<R> {
            self.session.read(f)
        }

        fn write<R>(&self, f: impl FnOnce(&mut ExplorerSession) -> R) -> Option<R> {
            let out = f(&mut self.session.borrow_mut());
            let state = self.session.borrow().upload();
            let mut states = self.states.borrow_mut();
            if states.last() != Some(&state) {
                states.push(state);
            }
            Some(out)
        }
    }

    #[tokio::test]
    async fn test_upload_enters_and_leaves_uploading_once() {
        let api = Rc::new(FakeApi::default());
        let store = UploadTrace::new();
        let notifier = RecordingNotifier::default();
        let actions = ExplorerActions::new(api, &store, &notifier);

        actions.upload(files(&["f1.txt", "f2.txt"])).await;

        assert_eq!(
            *store.states.borrow(),
            [
                UploadState::Uploading {
                    completed: 0,
                    total: 2
                },
                UploadState::Uploading {
                    completed: 1,
                    total: 2
                },
                UploadState::Uploading {
                    completed: 2,
                    total: 2
                },
                UploadState::Idle,
            ]
        );
        assert_eq!(entry_ids(&store.session), ["srv-f1.txt", "srv-f2.txt"]);
    }

    #[tokio::test]
    async fn test_upload_survives_reload_of_same_folder() {
        // The server already lists a.txt when the user comes back to root
        let api = Rc::new(FakeApi::default().with_listing(
            ExplorerPath::root(),
            vec![Entry::file("srv-a.txt", "a.txt", None)],
        ));
        let (release_b, held_b) = oneshot::channel();
        api.held_uploads.borrow_mut().insert("b.txt".to_string(), held_b);

        let store = RefCell::new(ExplorerSession::default());
        let notifier = RecordingNotifier::default();
        let actions = ExplorerActions::new(api.clone(), &store, &notifier);

        join(actions.upload(files(&["a.txt", "b.txt"])), async {
            actions.open_path(docs()).await;
            actions.open_path(ExplorerPath::root()).await;
            release_b.send(()).unwrap();
        })
        .await;

        assert_eq!(store.borrow().upload(), UploadState::Idle);
        assert_eq!(entry_ids(&store), ["srv-a.txt", "srv-b.txt"]);
        assert_eq!(
            api.calls(),
            [
                "upload a.txt to /",
                "upload b.txt to /",
                "list /Docs",
                "list /",
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_upload_stops_and_keeps_finished_files() {
        let api = Rc::new(FakeApi {
            failing_uploads: HashSet::from(["b.txt".to_string()]),
            ..FakeApi::default()
        });
        let store = RefCell::new(ExplorerSession::default());
        let notifier = RecordingNotifier::default();
        let actions = ExplorerActions::new(api.clone(), &store, &notifier);

        actions.upload(files(&["a.txt", "b.txt", "c.txt"])).await;

        assert_eq!(store.borrow().upload(), UploadState::Idle);
        assert_eq!(entry_ids(&store), ["srv-a.txt"]);
        assert_eq!(api.calls(), ["upload a.txt to /", "upload b.txt to /"]);

        let toasts = notifier.taken();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].0, ToastLevel::Error);
        assert!(toasts[0].1.starts_with("Upload of b.txt failed"));
        assert!(toasts[0].1.ends_with("(1 of 3 uploaded)"));
    }

    #[tokio::test]
    async fn test_upload_refused_while_busy() {
        let api = Rc::new(FakeApi::default());
        let store = RefCell::new(ExplorerSession::default());
        store.borrow_mut().begin_upload(1);
        let notifier = RecordingNotifier::default();
        let actions = ExplorerActions::new(api.clone(), &store, &notifier);

        actions.upload(files(&["a.txt"])).await;

        assert!(api.calls().is_empty());
        assert_eq!(notifier.taken()[0].0, ToastLevel::Info);
    }

    #[tokio::test]
    async fn test_create_folder_confirmed() {
        let api = Rc::new(FakeApi::default());
        let store = RefCell::new(ExplorerSession::new(docs(), ViewMode::List));
        let notifier = RecordingNotifier::default();
        let actions = ExplorerActions::new(api.clone(), &store, &notifier);

        actions.create_folder(Some("X".to_string()), 42).await;

        let session = store.borrow();
        assert_eq!(session.entries().len(), 1);
        let folder = &session.entries()[0];
        assert_eq!(folder.kind, EntryKind::Folder);
        assert_eq!(folder.name, "X");
        assert_eq!(folder.id, "srv-X");
        assert_eq!(folder.sync, SyncState::Confirmed);
        assert_eq!(api.calls(), ["mkdir X in /Docs"]);
        assert_eq!(
            notifier.taken(),
            [(ToastLevel::Success, "Folder \"X\" created".to_string())]
        );
    }

    #[tokio::test]
    async fn test_create_folder_rejected_is_marked_failed() {
        let api = Rc::new(FakeApi {
            fail_folders: true,
            ..FakeApi::default()
        });
        let store = RefCell::new(ExplorerSession::default());
        let notifier = RecordingNotifier::default();
        let actions = ExplorerActions::new(api, &store, &notifier);

        actions.create_folder(Some("X".to_string()), 42).await;

        let session = store.borrow();
        assert_eq!(session.entries().len(), 1);
        assert_eq!(session.entries()[0].id, "42");
        assert_eq!(session.entries()[0].sync, SyncState::Failed);
        let levels: Vec<_> = notifier.taken().into_iter().map(|(l, _)| l).collect();
        assert_eq!(levels, [ToastLevel::Success, ToastLevel::Error]);
    }

    #[tokio::test]
    async fn test_create_folder_ignores_blank_and_rejects_invalid() {
        let api = Rc::new(FakeApi::default());
        let store = RefCell::new(ExplorerSession::default());
        let notifier = RecordingNotifier::default();
        let actions = ExplorerActions::new(api.clone(), &store, &notifier);

        actions.create_folder(None, 1).await;
        actions.create_folder(Some("  ".to_string()), 1).await;
        assert!(notifier.taken().is_empty());

        actions.create_folder(Some("a/b".to_string()), 1).await;
        assert_eq!(notifier.taken()[0].0, ToastLevel::Error);

        assert!(store.borrow().entries().is_empty());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_and_download_are_local() {
        let api = Rc::new(FakeApi::default().with_listing(ExplorerPath::root(), root_listing()));
        let store = RefCell::new(ExplorerSession::default());
        let notifier = RecordingNotifier::default();
        let actions = ExplorerActions::new(api.clone(), &store, &notifier);
        actions.load_listing().await;

        actions.download(&Entry::file("r", "readme.md", None));
        actions.delete("d");
        actions.delete("missing");

        assert_eq!(entry_ids(&store), ["r"]);
        assert_eq!(api.calls(), ["list /"]);
        assert_eq!(
            notifier.taken(),
            [
                (ToastLevel::Success, "Downloading readme.md...".to_string()),
                (ToastLevel::Success, "Item deleted".to_string()),
            ]
        );
    }

    #[test]
    fn test_set_view_mode() {
        let store = RefCell::new(ExplorerSession::default());
        let notifier = RecordingNotifier::default();
        let actions = ExplorerActions::new(Rc::new(FakeApi::default()), &store, &notifier);

        actions.set_view_mode(ViewMode::Grid);
        assert_eq!(store.borrow().view_mode(), ViewMode::Grid);
    }
}
