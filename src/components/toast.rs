//! Toast notifications overlay.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{Toast, ToastLevel};

stylance::import_crate_style!(css, "src/components/toast.module.css");

/// Stack of toasts in the bottom-right corner. Click a toast to dismiss it.
#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let toasts = Memo::new(move |_| ctx.toasts.queue.with(|q| q.items().to_vec()));

    view! {
        <div class=css::toaster role="status" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast /> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let (level_class, icon) = match toast.level {
        ToastLevel::Success => (css::success, ic::SUCCESS),
        ToastLevel::Error => (css::error, ic::ERROR),
        ToastLevel::Info => (css::info, ic::INFO),
    };
    let id = toast.id;

    view! {
        <div
            class=format!("{} {}", css::toast, level_class)
            on:click=move |_| ctx.toasts.dismiss(id)
            title="Dismiss"
        >
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=css::message>{toast.message}</span>
            <span class=css::close aria-hidden="true"><Icon icon=ic::CLOSE /></span>
        </div>
    }
}
