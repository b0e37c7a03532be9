use serde::Serialize;
use wasm_bindgen::prelude::*;
use orbit_engine::InputEvent;

pub mod app;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod explore;
pub mod info;
pub mod loader;
pub mod scene;
pub mod search;
pub mod search_box;

use app::EarthExplorer;
use config::ExplorerConfig;

orbit_web::export_app!(EarthExplorer, "earth-explorer");

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        log::error!("response serialization failed: {}", err);
        "null".to_string()
    })
}

// ---- Search ----

/// Autocomplete for the current input text. JSON array of `{name, kind}`.
#[wasm_bindgen]
pub fn search_input(query: &str) -> String {
    with_runner(|r| to_json(&r.app_mut().suggest(query)))
}

/// Enter key or search icon. JSON `{status: "found" | "not_found", ...}`.
#[wasm_bindgen]
pub fn search_submit(query: &str) -> String {
    with_runner(|r| to_json(&r.app_mut().submit(query)))
}

/// A suggestion was clicked.
#[wasm_bindgen]
pub fn search_pick(name: &str) -> String {
    with_runner(|r| to_json(&r.app_mut().pick(name)))
}

/// A click landed outside the input and the list.
#[wasm_bindgen]
pub fn search_dismiss() {
    with_runner(|r| r.app_mut().dismiss_autocomplete());
}

// ---- Data & config ----

/// Start both dataset loads. Search works on whatever has arrived.
#[wasm_bindgen]
pub fn catalog_load() {
    let sources = with_runner(|r| r.app().dataset_sources());
    loader::load_catalog(sources, |kind, records| {
        with_runner(move |r| {
            r.app_mut().install_catalog(kind, records);
        });
    });
}

/// Replace app settings from JSON. Invalid JSON keeps the current ones.
#[wasm_bindgen]
pub fn app_load_config(json: &str) -> bool {
    match ExplorerConfig::from_json(json) {
        Ok(config) => with_runner(|r| r.app_mut().apply_config(config)),
        Err(err) => {
            log::error!("invalid config: {}", err);
            false
        }
    }
}
