#![allow(warnings)]
//! Pantry UI Frontend Entry Point

mod models;
mod error;
mod config;
mod bootstrap;
mod match_band;
mod filter;
mod quantity;
mod expiry;
mod results;
mod meal_plan;
mod context;
mod store;
mod bridge;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
