use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Placeholder in the action template replaced by the record identifier.
pub const ID_PLACEHOLDER: &str = "{id}";

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Builds the delete endpoint for `identifier`. The identifier is encoded as
/// a single path segment; plain numeric ids pass through unchanged.
pub fn delete_action(template: &str, identifier: &str) -> String {
    let segment = utf8_percent_encode(identifier, PATH_SEGMENT).to_string();
    template.replace(ID_PLACEHOLDER, &segment)
}

/// The shared form whose submission target is rewritten before it submits.
pub trait FormHandle {
    fn set_form_action(&self, action: &str);
}

/// Points `form` at the delete endpoint for `identifier`. Submission is left
/// to the page; a later call simply overwrites the action.
pub fn prepare_delete<F: FormHandle + ?Sized>(
    form: &F,
    template: &str,
    identifier: &str,
) -> String {
    let action = delete_action(template, identifier);
    form.set_form_action(&action);
    action
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlFormElement};

    use super::*;
    use crate::{config::DeleteConfig, error::EnhanceError, utils::dom};

    impl FormHandle for HtmlFormElement {
        fn set_form_action(&self, action: &str) {
            self.set_action(action);
        }
    }

    fn on_click(document: &Document, button: &Element, config: &DeleteConfig) {
        let Some(identifier) = button.get_attribute(&config.id_attribute) else {
            log::warn!("delete button without {} ignored", config.id_attribute);
            return;
        };
        log::debug!("delete requested for {identifier}");

        match dom::query_as::<HtmlFormElement>(document, &config.form_selector) {
            Ok(form) => {
                let action = prepare_delete(&form, &config.action_template, &identifier);
                log::debug!("delete form action set to {action}");
            }
            Err(err) => log::error!("cannot prepare delete form: {err}"),
        }
    }

    /// Binds a click handler to every delete button present right now and
    /// returns how many were bound. Buttons added later are not bound, and
    /// calling this twice binds each button twice.
    pub fn bind(document: &Document, config: &DeleteConfig) -> Result<usize, EnhanceError> {
        let buttons = dom::query_all(document, &config.button_selector)?;
        let config = Rc::new(config.clone());

        for button in &buttons {
            let document = document.clone();
            let target = button.clone();
            let config = Rc::clone(&config);
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                on_click(&document, &target, &config);
            }) as Box<dyn FnMut(_)>);
            button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        log::debug!("bound {} delete buttons", buttons.len());
        Ok(buttons.len())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::bind;
