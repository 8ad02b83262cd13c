#![allow(warnings)]
//! Admin Console Entry Point

mod api;
mod app;
mod components;
mod csv_export;
mod list_edit;
mod listing;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
