//! Browser front end for the Starknet SVG minter
//!
//! Connects an injected wallet, switches networks and mints SVG NFTs.

use leptos::prelude::*;
use shared::config::MintConfig;
use shared::mint::Minter;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("SVG minter starting...");

    let config = MintConfig::default();
    if let Err(e) = config.validate() {
        log::error!("Invalid mint configuration: {}", e);
        web_sys::console::error_1(&format!("Invalid mint configuration: {}", e).into());
        return;
    }
    log::info!(
        "Minting via {} on {}",
        config.entrypoint,
        shared::utils::truncate_address(&config.contract_address)
    );

    let minter = Minter::new(config);
    leptos::mount::mount_to_body(move || view! { <App minter=minter/> });
}
