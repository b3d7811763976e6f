//! Document Management Frontend Entry Point

mod app;
mod components;
mod context;
mod files;
mod form;
mod format;
mod logging;
mod notify;
mod pages;
mod pagination;
mod search;
mod session;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
