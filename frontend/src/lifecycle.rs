pub const DOM_CONTENT_LOADED: &str = "DOMContentLoaded";

/// `document.readyState` while the initial HTML is still being parsed.
pub fn is_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::Document;

    use super::*;
    use crate::error::EnhanceError;

    /// Runs `callback` once the initial document has been parsed. The module
    /// can start after `DOMContentLoaded` already fired, in which case the
    /// callback runs immediately.
    pub fn on_dom_ready<F>(document: &Document, callback: F) -> Result<(), EnhanceError>
    where
        F: FnOnce() + 'static,
    {
        let ready_state = js_sys::Reflect::get(document, &"readyState".into())?
            .as_string()
            .unwrap_or_default();
        if !is_parsing(&ready_state) {
            callback();
            return Ok(());
        }
        let closure = Closure::once(move |_: web_sys::Event| callback());
        document.add_event_listener_with_callback(
            DOM_CONTENT_LOADED,
            closure.as_ref().unchecked_ref(),
        )?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::on_dom_ready;
