mod app;
mod commands;
mod components;
mod earnings;
mod pages;
mod projects;
mod rewards;
mod telemetry;
mod timer;
mod viewport;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
