//! Todo List Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod error;
mod input;
mod lists;
mod models;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
