use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::error::EnhanceError;

pub fn window() -> Result<Window, EnhanceError> {
    web_sys::window().ok_or(EnhanceError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, EnhanceError> {
    window.document().ok_or(EnhanceError::NoDocument)
}

pub fn current_path(window: &Window) -> Result<String, EnhanceError> {
    Ok(window.location().pathname()?)
}

pub fn query(document: &Document, selector: &str) -> Result<Element, EnhanceError> {
    document
        .query_selector(selector)?
        .ok_or_else(|| EnhanceError::missing(selector))
}

pub fn query_as<T: JsCast>(document: &Document, selector: &str) -> Result<T, EnhanceError> {
    query(document, selector)?
        .dyn_into::<T>()
        .map_err(|_| EnhanceError::UnexpectedElement {
            selector: selector.to_string(),
        })
}

/// Static snapshot of every element matching `selector` at call time.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, EnhanceError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}
