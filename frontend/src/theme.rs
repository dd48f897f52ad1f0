use crate::error::EnhanceError;

pub const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Dark,
    Light,
}

impl ColorScheme {
    /// `None` means the environment cannot answer the media query, which is
    /// treated the same as not preferring dark.
    pub fn from_preference(prefers_dark: Option<bool>) -> Self {
        if prefers_dark.unwrap_or(false) {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn as_attr(&self) -> &'static str {
        match self {
            ColorScheme::Dark => "dark",
            ColorScheme::Light => "light",
        }
    }
}

/// The document root the theme attribute is written to.
pub trait ThemeRoot {
    fn set_theme_attribute(&self, name: &str, value: &str) -> Result<(), EnhanceError>;
}

pub fn apply_color_scheme<R: ThemeRoot + ?Sized>(
    root: &R,
    attribute: &str,
    scheme: ColorScheme,
) -> Result<(), EnhanceError> {
    root.set_theme_attribute(attribute, scheme.as_attr())
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::*;
    use crate::{config::PageConfig, utils::dom};

    impl ThemeRoot for web_sys::Element {
        fn set_theme_attribute(&self, name: &str, value: &str) -> Result<(), EnhanceError> {
            Ok(self.set_attribute(name, value)?)
        }
    }

    pub fn prefers_dark(window: &web_sys::Window) -> Option<bool> {
        window
            .match_media(DARK_QUERY)
            .ok()
            .flatten()
            .map(|list| list.matches())
    }

    /// Sets the theme attribute once from the current system preference.
    /// Later preference changes are not tracked.
    pub fn init(
        window: &web_sys::Window,
        config: &PageConfig,
    ) -> Result<ColorScheme, EnhanceError> {
        let html = dom::document(window)?
            .document_element()
            .ok_or(EnhanceError::NoRootElement)?;
        let scheme = ColorScheme::from_preference(prefers_dark(window));
        apply_color_scheme(&html, &config.theme_attribute, scheme)?;
        Ok(scheme)
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{init as init_system_theme, prefers_dark};


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::config::PageConfig;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn init_sets_root_attribute_from_media_query() {
        let window = web_sys::window().unwrap();
        let scheme = init_system_theme(&window, &PageConfig::default()).unwrap();
        let expected = ColorScheme::from_preference(prefers_dark(&window));
        assert_eq!(scheme, expected);
        let html = window.document().unwrap().document_element().unwrap();
        assert_eq!(
            html.get_attribute("data-bs-theme").as_deref(),
            Some(expected.as_attr())
        );
    }
}
