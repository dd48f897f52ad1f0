pub mod config;
pub mod delete;
pub mod error;
pub mod lifecycle;
pub mod panels;
pub mod routes;
pub mod theme;
pub mod utils;


pub use error::EnhanceError;

#[cfg(target_arch = "wasm32")]
mod app {
    use std::rc::Rc;

    use web_sys::{Document, Window};

    use crate::{
        config::{self, PageConfig},
        delete, lifecycle, panels,
        routes::Behavior,
        theme,
        utils::dom,
        EnhanceError,
    };

    pub fn activate(
        document: &Document,
        behavior: Behavior,
        config: &PageConfig,
    ) -> Result<(), EnhanceError> {
        match behavior {
            Behavior::PanelToggle => panels::bind(document, &config.panels),
            Behavior::DeleteBinder => delete::bind(document, &config.delete).map(|_| ()),
        }
    }

    /// Applies the theme, then schedules every behavior gated on the current
    /// path for DOM-ready. A behavior that fails is logged and skipped.
    pub fn enhance_page(window: &Window, config: Rc<PageConfig>) -> Result<(), EnhanceError> {
        match theme::init_system_theme(window, &config) {
            Ok(scheme) => log::debug!("color scheme set to {}", scheme.as_attr()),
            Err(err) => log::error!("failed to set color scheme: {err}"),
        }

        let path = dom::current_path(window)?;
        let document = dom::document(window)?;
        for behavior in config.routes.behaviors_for(&path) {
            log::debug!("{behavior} active on {path}");
            let target = document.clone();
            let config = Rc::clone(&config);
            lifecycle::on_dom_ready(&document, move || {
                if let Err(err) = activate(&target, behavior, &config) {
                    log::error!("{behavior} not activated: {err}");
                }
            })?;
        }
        Ok(())
    }

    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        let window = match dom::window() {
            Ok(win) => win,
            Err(_) => return,
        };

        let loaded = config::load(&window);
        let page_config = loaded.clone().unwrap_or_default();
        if console_log::init_with_level(page_config.log_level()).is_err() {
            // logger already installed
        }
        if let Err(err) = loaded {
            log::warn!("using default page config: {err}");
        }

        if let Err(err) = enhance_page(&window, Rc::new(page_config)) {
            log::error!("page enhancement failed: {err}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use app::{activate, enhance_page, start};
