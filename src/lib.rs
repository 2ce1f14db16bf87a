// src/lib.rs

//! FreshVeg - storefront for an organic vegetable brand: catalog browsing,
//! cart, checkout summary, contact form and newsletter, rendered with Dioxus.

#![deny(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::result_large_err)]

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = config::StoreConfig::default();
    let _guard = logging::init(&config.logging);
    web_sys::console::log_1(&"FreshVeg starting".into());

    dioxus::LaunchBuilder::web()
        .with_context(config)
        .launch(ui::App);
}

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod contact;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod submission;
pub mod types;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use error::{Error, ErrorKind, Result, ResultExt};
pub use types::{Money, ProductId};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
