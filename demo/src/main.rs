//! Demo page for the signature pad widget (client-side rendered).

mod app;
mod components;
mod pages;
mod state;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(|| view! { <App/> });
}
