#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod case_study;
pub mod clock;
pub mod contact;
pub mod sequence;
pub mod site;
pub mod theme;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("couldn't install console logger: {err}");
    }
    leptos::mount::hydrate_body(App);
}
