use serde::{Deserialize, Serialize};

use crate::{error::EnhanceError, routes::RouteTable};

/// Global the page may define before loading the module:
/// `window.__PORTFOLIO_CONFIG = { log_level: "debug", ... }`.
pub const CONFIG_GLOBAL: &str = "__PORTFOLIO_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub theme_attribute: String,
    pub log_level: String,
    pub panels: PanelIds,
    pub delete: DeleteConfig,
    pub routes: RouteTable,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_attribute: "data-bs-theme".into(),
            log_level: "info".into(),
            panels: PanelIds::default(),
            delete: DeleteConfig::default(),
            routes: RouteTable::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelIds {
    pub transactions_toggle: String,
    pub transfers_toggle: String,
    pub transactions_panel: String,
    pub transfers_panel: String,
}

impl Default for PanelIds {
    fn default() -> Self {
        Self {
            transactions_toggle: "#txn-btn".into(),
            transfers_toggle: "#trf-btn".into(),
            transactions_panel: "#txn".into(),
            transfers_panel: "#trf".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteConfig {
    pub button_selector: String,
    pub id_attribute: String,
    pub form_selector: String,
    /// `{id}` is replaced with the clicked button's identifier.
    pub action_template: String,
}

impl Default for DeleteConfig {
    fn default() -> Self {
        Self {
            button_selector: ".delete-button".into(),
            id_attribute: "data-transaction-id".into(),
            form_selector: "form#deleteTransactionForm".into(),
            action_template: "/delete/{id}/".into(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, EnhanceError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_global(window: &web_sys::Window) -> Result<Option<String>, EnhanceError> {
    let any = js_sys::Reflect::get(window, &CONFIG_GLOBAL.into())?;
    if any.is_undefined() || any.is_null() {
        return Ok(None);
    }
    let raw = js_sys::JSON::stringify(&any)?;
    Ok(Some(String::from(raw)))
}

/// Reads the page config global. Runs before logging is set up, so errors are
/// returned for the caller to report once the logger exists.
#[cfg(target_arch = "wasm32")]
pub fn load(window: &web_sys::Window) -> Result<PageConfig, EnhanceError> {
    match snapshot_from_global(window)? {
        Some(raw) => PageConfig::from_json(&raw),
        None => Ok(PageConfig::default()),
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn clear_global(window: &web_sys::Window) {
        js_sys::Reflect::delete_property(window, &CONFIG_GLOBAL.into()).unwrap();
    }

    #[wasm_bindgen_test]
    fn absent_global_loads_defaults() {
        let window = web_sys::window().unwrap();
        clear_global(&window);
        assert_eq!(load(&window).unwrap(), PageConfig::default());
    }

    #[wasm_bindgen_test]
    fn global_object_overrides_defaults() {
        let window = web_sys::window().unwrap();
        let value = js_sys::JSON::parse(
            r##"{ "theme_attribute": "data-theme", "delete": { "form_selector": "#del" } }"##,
        )
        .unwrap();
        js_sys::Reflect::set(&window, &CONFIG_GLOBAL.into(), &value).unwrap();

        let config = load(&window).unwrap();
        clear_global(&window);
        assert_eq!(config.theme_attribute, "data-theme");
        assert_eq!(config.delete.form_selector, "#del");
        assert_eq!(config.delete.id_attribute, "data-transaction-id");
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
