#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod dom;
pub mod i18n;
pub mod input;
pub mod services;
pub mod storage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Ensure <html lang, dir> are set at startup according to saved locale
    crate::i18n::set_lang(&crate::i18n::current_lang());
    crate::app::boot();
}
