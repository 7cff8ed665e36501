//! Main explorer component.
//!
//! Owns the hidden file input, keeps the URL hash and the persisted view
//! mode in sync with the session, and switches the body between the
//! upload placeholder, the empty state and the file list.

use leptos::logging::warn;
use leptos::prelude::*;
use leptos_icons::Icon;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::spawn_local;

use super::{FileList, Header};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::VIEW_MODE_KEY;
use crate::core::Notifier;
use crate::models::{UploadState, ViewMode, route};
use crate::utils::format::format_upload_progress;
use crate::utils::{dom, prefs, time};

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// File explorer view component.
#[component]
pub fn Explorer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let file_input = NodeRef::<leptos::html::Input>::new();

    let path = Memo::new(move |_| ctx.session.with(|s| s.path().clone()));
    let view_mode = Memo::new(move |_| ctx.session.with(|s| s.view_mode()));
    let upload = Memo::new(move |_| ctx.session.with(|s| s.upload()));
    let is_empty = Memo::new(move |_| ctx.session.with(|s| s.entries().is_empty()));

    // Initial listing
    spawn_local(async move {
        let actions = ctx.actions();
        actions.load_listing().await;
    });

    // Session path -> URL hash
    Effect::new(move |_| route::push_path(&path.get()));

    // Persist view mode changes (not the value restored on load)
    Effect::new(move |prev: Option<ViewMode>| {
        let mode = view_mode.get();
        if prev.is_some_and(|p| p != mode) {
            if let Err(e) = prefs::set(VIEW_MODE_KEY, &mode) {
                warn!("Failed to persist view mode: {}", e);
            }
        }
        mode
    });

    // URL hash -> session path (back/forward, edited URL)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            let actions = ctx.actions();
            spawn_local(async move { actions.open_path(route::current_path()).await });
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        closure.forget();
    }

    let on_upload = Callback::new(move |_: ()| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    });

    let on_new_folder = Callback::new(move |_: ()| {
        let input = dom::prompt("Enter folder name");
        let actions = ctx.actions();
        spawn_local(async move {
            actions
                .create_folder(input, time::unix_time_ms_now())
                .await
        });
    });

    let on_files_selected = move |_| {
        let Some(input) = file_input.get() else {
            return;
        };
        let files = dom::take_selected_files(&input);
        if files.is_empty() {
            return;
        }

        spawn_local(async move {
            let mut uploads = Vec::with_capacity(files.len());
            for file in &files {
                match dom::read_file(file).await {
                    Ok(upload) => uploads.push(upload),
                    Err(e) => {
                        warn!("Failed to read selected file: {}", e);
                        ctx.toasts.error(e.to_string());
                        return;
                    }
                }
            }
            ctx.actions().upload(uploads).await;
        });
    };

    view! {
        <div class=css::explorer>
            <Header on_upload=on_upload on_new_folder=on_new_folder />

            <input
                type="file"
                multiple
                class=css::hiddenInput
                node_ref=file_input
                on:change=on_files_selected
                aria-hidden="true"
                tabindex="-1"
            />

            <main class=css::body>
                {move || match upload.get() {
                    UploadState::Uploading { completed, total } => view! {
                        <UploadingPlaceholder completed=completed total=total />
                    }
                    .into_any(),
                    UploadState::Idle if is_empty.get() => view! {
                        <EmptyState on_upload=on_upload />
                    }
                    .into_any(),
                    UploadState::Idle => view! { <FileList /> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn UploadingPlaceholder(completed: usize, total: usize) -> impl IntoView {
    view! {
        <div class=css::uploading role="status" aria-live="polite">
            <span class=css::uploadingIcon aria-hidden="true"><Icon icon=ic::UPLOAD /></span>
            <span class=css::uploadingLabel>{format_upload_progress(completed, total)}</span>
        </div>
    }
}

#[component]
fn EmptyState(on_upload: Callback<()>) -> impl IntoView {
    view! {
        <div class=css::emptyState>
            <span class=css::emptyIcon aria-hidden="true"><Icon icon=ic::FOLDER /></span>
            <p class=css::emptyTitle>"No files yet"</p>
            <p class=css::emptyHint>"Upload files or create folders to get started"</p>
            <button
                class=format!("{} {}", css::actionButton, css::primaryButton)
                on:click=move |_| on_upload.run(())
            >
                <Icon icon=ic::UPLOAD />
                <span class=css::buttonLabel>"Upload Files"</span>
            </button>
        </div>
    }
}
