//! Entry list for the explorer view.
//!
//! Renders the listing as rows ([`EntryRow`]) or tiles ([`EntryTile`])
//! depending on the view mode. Both take the entry plus three callbacks:
//! open, download and delete.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{Entry, EntryKind, SyncState, ViewMode};

stylance::import_crate_style!(css, "src/components/explorer/file_list.module.css");

/// Lowercased file extension, if any.
fn extension(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .filter(|(stem, _)| !stem.is_empty())
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

/// Get icon for an entry based on its kind and extension.
fn entry_icon(entry: &Entry) -> IconData {
    if entry.kind == EntryKind::Folder {
        return ic::FOLDER;
    }
    match extension(&entry.name).as_deref() {
        Some("md" | "txt" | "csv" | "json" | "log") => ic::FILE_TEXT,
        Some("pdf") => ic::FILE_PDF,
        Some("png" | "jpg" | "jpeg" | "gif" | "webp" | "svg") => ic::FILE_IMAGE,
        _ => ic::FILE,
    }
}

/// Listing of the current folder.
#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let entries = Memo::new(move |_| ctx.session.with(|s| s.entries().to_vec()));
    let view_mode = Memo::new(move |_| ctx.session.with(|s| s.view_mode()));

    move || {
        let mode = view_mode.get();
        let class = match mode {
            ViewMode::List => css::list,
            ViewMode::Grid => css::grid,
        };

        view! {
            <div class=class role="list" aria-label="Files">
                <For
                    each=move || entries.get()
                    key=|entry| (entry.id.clone(), entry.sync)
                    children=move |entry| entry_view(ctx, entry, mode)
                />
            </div>
        }
    }
}

/// Wire the three entry callbacks to the explorer actions.
fn entry_view(ctx: AppContext, entry: Entry, mode: ViewMode) -> AnyView {
    let for_open = entry.clone();
    let on_open = Callback::new(move |_: ()| {
        let entry = for_open.clone();
        let actions = ctx.actions();
        spawn_local(async move { actions.open_entry(entry).await });
    });

    let for_download = entry.clone();
    let on_download = Callback::new(move |_: ()| ctx.actions().download(&for_download));

    let id = entry.id.clone();
    let on_delete = Callback::new(move |_: ()| ctx.actions().delete(&id));

    match mode {
        ViewMode::List => view! {
            <EntryRow entry=entry on_open=on_open on_download=on_download on_delete=on_delete />
        }
        .into_any(),
        ViewMode::Grid => view! {
            <EntryTile entry=entry on_open=on_open on_download=on_download on_delete=on_delete />
        }
        .into_any(),
    }
}

/// One entry as a list row.
#[component]
pub fn EntryRow(
    entry: Entry,
    on_open: Callback<()>,
    on_download: Callback<()>,
    on_delete: Callback<()>,
) -> impl IntoView {
    let icon = entry_icon(&entry);
    let is_folder = entry.is_folder();
    let name_class = if is_folder {
        format!("{} {}", css::name, css::nameFolder)
    } else {
        css::name.to_string()
    };
    let aria_label = entry_label(&entry);

    view! {
        <div
            class=css::row
            role="listitem"
            tabindex="0"
            aria-label=aria_label
            on:click=move |_| on_open.run(())
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Enter" {
                    on_open.run(());
                }
            }
        >
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=name_class>
                {entry.name.clone()}
                <SyncMarker sync=entry.sync />
            </span>
            <span class=css::modified>{entry.modified.clone().unwrap_or_default()}</span>
            <span class=css::size>{entry.size.clone().unwrap_or_default()}</span>
            <EntryButtons on_download=on_download on_delete=on_delete />
        </div>
    }
}

/// One entry as a grid tile.
#[component]
pub fn EntryTile(
    entry: Entry,
    on_open: Callback<()>,
    on_download: Callback<()>,
    on_delete: Callback<()>,
) -> impl IntoView {
    let icon = entry_icon(&entry);
    let icon_class = if entry.is_folder() {
        format!("{} {}", css::tileIcon, css::tileIconFolder)
    } else {
        css::tileIcon.to_string()
    };
    let aria_label = entry_label(&entry);
    let meta = entry.size.clone().or_else(|| entry.modified.clone());

    view! {
        <div
            class=css::tile
            role="listitem"
            tabindex="0"
            aria-label=aria_label
            on:click=move |_| on_open.run(())
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Enter" {
                    on_open.run(());
                }
            }
        >
            <span class=icon_class aria-hidden="true"><Icon icon=icon /></span>
            <span class=css::tileName title=entry.name.clone()>
                {entry.name.clone()}
                <SyncMarker sync=entry.sync />
            </span>
            {meta.map(|m| view! { <span class=css::tileMeta>{m}</span> })}
            <EntryButtons on_download=on_download on_delete=on_delete />
        </div>
    }
}

fn entry_label(entry: &Entry) -> String {
    match entry.kind {
        EntryKind::Folder => format!("Folder: {}", entry.name),
        EntryKind::File => format!("File: {}", entry.name),
    }
}

/// Download/delete buttons. Clicks don't reach the row's open handler.
#[component]
fn EntryButtons(on_download: Callback<()>, on_delete: Callback<()>) -> impl IntoView {
    view! {
        <span class=css::buttons>
            <button
                class=css::entryButton
                title="Download"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    on_download.run(());
                }
            >
                <Icon icon=ic::DOWNLOAD />
            </button>
            <button
                class=format!("{} {}", css::entryButton, css::deleteButton)
                title="Delete"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    on_delete.run(());
                }
            >
                <Icon icon=ic::TRASH />
            </button>
        </span>
    }
}

/// Marker next to folders that are not yet (or could not be) saved.
#[component]
fn SyncMarker(sync: SyncState) -> impl IntoView {
    match sync {
        SyncState::Confirmed => None,
        SyncState::Pending => Some(
            view! {
                <span class=css::syncPending title="Saving...">
                    <Icon icon=ic::PENDING />
                </span>
            }
            .into_any(),
        ),
        SyncState::Failed => Some(
            view! {
                <span class=css::syncFailed title="Not saved">
                    <Icon icon=ic::ERROR />
                </span>
            }
            .into_any(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension() {
        assert_eq!(extension("Report.PDF").as_deref(), Some("pdf"));
        assert_eq!(extension("archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(extension("Makefile"), None);
        assert_eq!(extension(".gitignore"), None);
    }

    #[test]
    fn test_entry_label() {
        assert_eq!(entry_label(&Entry::folder("1", "Docs")), "Folder: Docs");
        assert_eq!(entry_label(&Entry::file("2", "a.txt", None)), "File: a.txt");
    }
}
