//! Root application module.
//!
//! Contains the main App component, AppContext definition, ToastState,
//! and application-level setup logic following Leptos conventions.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::Toaster;
use crate::components::explorer::Explorer;
use crate::config::{FETCH_TIMEOUT_MS, MAX_TOASTS, TOAST_DURATION_MS, VIEW_MODE_KEY, api_base_url};
use crate::core::{ExplorerActions, ExplorerSession, FileApi, HttpFileApi, Notifier};
use crate::models::{ToastLevel, ToastQueue, ViewMode, route};
use crate::utils::prefs;

// ============================================================================
// ToastState
// ============================================================================

/// Notification sink backed by a Leptos signal.
///
/// Each toast dismisses itself after `TOAST_DURATION_MS`.
#[derive(Clone, Copy)]
pub struct ToastState {
    pub queue: RwSignal<ToastQueue>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new(MAX_TOASTS)),
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.try_update(|q| q.dismiss(id));
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastState {
    fn notify(&self, level: ToastLevel, message: String) {
        let Some(id) = self.queue.try_update(|q| q.push(level, message)) else {
            return;
        };
        let state = *self;
        Timeout::new(TOAST_DURATION_MS, move || state.dismiss(id)).forget();
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy`: the session and toasts are signals and the API
/// client is a [`StoredValue`].
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Explorer session (listing, path, view mode, upload progress).
    pub session: RwSignal<ExplorerSession>,

    /// Toast notifications.
    pub toasts: ToastState,

    /// File API client.
    pub api: StoredValue<HttpFileApi>,
}

impl AppContext {
    /// Creates the context for the given API client.
    ///
    /// The initial path comes from the URL hash and the view mode from
    /// localStorage.
    pub fn new(api: HttpFileApi) -> Self {
        let view_mode = prefs::get::<ViewMode>(VIEW_MODE_KEY).unwrap_or_default();
        Self {
            session: RwSignal::new(ExplorerSession::new(route::current_path(), view_mode)),
            toasts: ToastState::new(),
            api: StoredValue::new(api),
        }
    }

    /// Actions bound to this context.
    pub fn actions(&self) -> ExplorerActions<RwSignal<ExplorerSession>, ToastState> {
        let api: Rc<dyn FileApi> = Rc::new(self.api.get_value());
        ExplorerActions::new(api, self.session, self.toasts)
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the Explorer and the Toaster
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(HttpFileApi::new(api_base_url(), FETCH_TIMEOUT_MS));
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #dc2626; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <p style="color: #6b7280; margin-bottom: 2rem;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul style="color: #dc2626; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #7c3aed;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 6px;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Explorer />
        </ErrorBoundary>
        <Toaster />
    }
}
