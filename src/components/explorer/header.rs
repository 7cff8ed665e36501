//! Explorer header component.
//!
//! Breadcrumb on the left, action buttons (upload, new folder, view
//! toggle) on the right.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::Breadcrumb;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::ViewMode;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Explorer header with breadcrumb and actions.
#[component]
pub fn Header(on_upload: Callback<()>, on_new_folder: Callback<()>) -> impl IntoView {
    view! {
        <header class=css::header>
            <Breadcrumb />
            <ActionButtons on_upload=on_upload on_new_folder=on_new_folder />
        </header>
    }
}

/// Action buttons (upload, new folder, list/grid).
#[component]
fn ActionButtons(on_upload: Callback<()>, on_new_folder: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let view_mode = Memo::new(move |_| ctx.session.with(|s| s.view_mode()));
    let uploading = Memo::new(move |_| ctx.session.with(|s| s.upload().is_uploading()));

    view! {
        <div class=css::actionButtons>
            <button
                class=format!("{} {}", css::actionButton, css::primaryButton)
                on:click=move |_| on_upload.run(())
                disabled=move || uploading.get()
                title="Upload files"
            >
                <Icon icon=ic::UPLOAD />
                <span class=css::buttonLabel>"Upload"</span>
            </button>

            <button
                class=css::actionButton
                on:click=move |_| on_new_folder.run(())
                title="New folder"
            >
                <Icon icon=ic::FOLDER_PLUS />
                <span class=css::buttonLabel>"New Folder"</span>
            </button>

            <div class=css::viewToggle role="group" aria-label="View mode">
                <ViewModeButton mode=ViewMode::List current=view_mode />
                <ViewModeButton mode=ViewMode::Grid current=view_mode />
            </div>
        </div>
    }
}

#[component]
fn ViewModeButton(mode: ViewMode, current: Memo<ViewMode>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let (icon, title) = match mode {
        ViewMode::List => (ic::LIST, "List view"),
        ViewMode::Grid => (ic::GRID, "Grid view"),
    };

    let class = move || {
        if current.get() == mode {
            format!("{} {}", css::toggleButton, css::toggleButtonActive)
        } else {
            css::toggleButton.to_string()
        }
    };

    view! {
        <button
            class=class
            on:click=move |_| ctx.actions().set_view_mode(mode)
            title=title
            aria-pressed=move || (current.get() == mode).to_string()
        >
            <Icon icon=icon />
        </button>
    }
}
