mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    log!("{} using API at {}", config::APP_NAME, config::api_base_url());
    mount_to(root, App).forget();
}
