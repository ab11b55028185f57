//! Todo Editor Entry Point

mod app;
mod components;
mod config;
mod editor;
mod loading;
mod logging;
mod models;
mod storage;
mod store;

use app::App;
use config::EditorConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(EditorConfig::default().log_level);
    mount_to_body(App);
}
