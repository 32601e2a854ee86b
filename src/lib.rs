pub mod app;
pub mod browser;
pub mod catalog;
pub mod config;
pub mod mail;
pub mod page;

#[cfg(feature = "csr")]
#[derive(thiserror::Error, Debug, Clone)]
pub enum MountError {
    #[error("Mount element #{0} not found")]
    MissingElement(String),
}

#[cfg(feature = "csr")]
fn mount_element(id: &str) -> Result<web_sys::HtmlElement, MountError> {
    use wasm_bindgen::JsCast;

    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| MountError::MissingElement(id.to_string()))
}

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    use crate::app::*;

    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Only fails if a logger is already installed
    let _ = console_log::init_with_level(level);

    match mount_element(config::MOUNT_ID) {
        Ok(el) => {
            log::info!("mounting into #{}", config::MOUNT_ID);
            leptos::mount::mount_to(el, App).forget();
        }
        Err(e) => {
            log::error!("{e}, mounting into body");
            leptos::mount::mount_to_body(App);
        }
    }
}
