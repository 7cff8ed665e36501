//! Breadcrumb navigation: "Home" followed by one button per folder.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/breadcrumb.module.css");

/// Breadcrumb for the current path.
///
/// Every segment except the last is clickable; clicking segment `i` keeps
/// the first `i + 1` folders.
#[component]
pub fn Breadcrumb() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let segments = Memo::new(move |_| ctx.session.with(|s| s.path().segments().to_vec()));

    let on_home = Callback::new(move |_: ()| {
        let actions = ctx.actions();
        spawn_local(async move { actions.open_home().await });
    });

    view! {
        <nav class=css::breadcrumb aria-label="Breadcrumb">
            {move || {
                let segments = segments.get();
                let last = segments.len().checked_sub(1);

                let home = if last.is_none() {
                    view! { <SegmentCurrent icon=Some(ic::HOME) label="Home".to_string() /> }.into_any()
                } else {
                    view! { <SegmentLink icon=Some(ic::HOME) label="Home".to_string() on_click=on_home /> }.into_any()
                };

                let rest = segments
                    .into_iter()
                    .enumerate()
                    .map(|(idx, label)| {
                        let segment = if Some(idx) == last {
                            view! { <SegmentCurrent icon=None label=label /> }.into_any()
                        } else {
                            let on_click = Callback::new(move |_: ()| {
                                let actions = ctx.actions();
                                spawn_local(async move { actions.open_breadcrumb(idx).await });
                            });
                            view! { <SegmentLink icon=None label=label on_click=on_click /> }.into_any()
                        };

                        view! {
                            <span class=css::separator aria-hidden="true">
                                <Icon icon=ic::CHEVRON_RIGHT />
                            </span>
                            {segment}
                        }
                    })
                    .collect_view();

                view! { {home} {rest} }
            }}
        </nav>
    }
}

/// Clickable path segment.
#[component]
fn SegmentLink(icon: Option<icondata::Icon>, label: String, on_click: Callback<()>) -> impl IntoView {
    view! {
        <button class=css::segment on:click=move |_| on_click.run(())>
            {icon.map(|icon| view! { <span class=css::icon><Icon icon=icon /></span> })}
            <span class=css::label>{label}</span>
        </button>
    }
}

/// Current (disabled) path segment.
#[component]
fn SegmentCurrent(icon: Option<icondata::Icon>, label: String) -> impl IntoView {
    view! {
        <button
            class=format!("{} {}", css::segment, css::segmentCurrent)
            disabled=true
            aria-current="page"
        >
            {icon.map(|icon| view! { <span class=css::icon><Icon icon=icon /></span> })}
            <span class=css::label>{label}</span>
        </button>
    }
}
