use crate::error::EnhanceError;

pub const DISPLAY_SHOWN: &str = "block";
pub const DISPLAY_HIDDEN: &str = "none";

/// Which of the two history panels is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePanel {
    Transactions,
    Transfers,
}

pub trait PanelHandle {
    fn set_display(&self, value: &str) -> Result<(), EnhanceError>;
}

/// Keeps exactly one of two panels visible. The markup decides which one is
/// visible before the first toggle; nothing is synchronised up front.
pub struct PanelSwitch<P> {
    transactions: P,
    transfers: P,
}

impl<P: PanelHandle> PanelSwitch<P> {
    pub fn new(transactions: P, transfers: P) -> Self {
        Self {
            transactions,
            transfers,
        }
    }

    pub fn show(&self, active: ActivePanel) -> Result<(), EnhanceError> {
        let (transactions, transfers) = match active {
            ActivePanel::Transactions => (DISPLAY_SHOWN, DISPLAY_HIDDEN),
            ActivePanel::Transfers => (DISPLAY_HIDDEN, DISPLAY_SHOWN),
        };
        self.transactions.set_display(transactions)?;
        self.transfers.set_display(transfers)
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlElement};

    use super::*;
    use crate::{config::PanelIds, utils::dom};

    impl PanelHandle for HtmlElement {
        fn set_display(&self, value: &str) -> Result<(), EnhanceError> {
            Ok(self.style().set_property("display", value)?)
        }
    }

    fn listen(
        control: &Element,
        active: ActivePanel,
        switch: Rc<PanelSwitch<HtmlElement>>,
    ) -> Result<(), EnhanceError> {
        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Err(err) = switch.show(active) {
                log::error!("failed to show {active:?} panel: {err}");
            }
        }) as Box<dyn FnMut(_)>);
        control.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Binds a `change` listener to each toggle control. All four elements
    /// are looked up first, so a missing one binds nothing.
    pub fn bind(document: &Document, ids: &PanelIds) -> Result<(), EnhanceError> {
        let transactions_toggle = dom::query(document, &ids.transactions_toggle)?;
        let transfers_toggle = dom::query(document, &ids.transfers_toggle)?;
        let switch = Rc::new(PanelSwitch::new(
            dom::query_as::<HtmlElement>(document, &ids.transactions_panel)?,
            dom::query_as::<HtmlElement>(document, &ids.transfers_panel)?,
        ));

        listen(&transfers_toggle, ActivePanel::Transfers, Rc::clone(&switch))?;
        listen(&transactions_toggle, ActivePanel::Transactions, switch)?;
        log::debug!("panel toggle bound");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::bind;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::fakes::RecordingElement;

    #[test]
    fn transfers_hides_transactions() {
        let switch = PanelSwitch::new(RecordingElement::default(), RecordingElement::default());
        switch.show(ActivePanel::Transfers).unwrap();
        assert_eq!(switch.transactions.last("display").as_deref(), Some("none"));
        assert_eq!(switch.transfers.last("display").as_deref(), Some("block"));
    }

    #[test]
    fn transactions_hides_transfers() {
        let switch = PanelSwitch::new(RecordingElement::default(), RecordingElement::default());
        switch.show(ActivePanel::Transactions).unwrap();
        assert_eq!(switch.transactions.last("display").as_deref(), Some("block"));
        assert_eq!(switch.transfers.last("display").as_deref(), Some("none"));
    }

    #[test]
    fn last_event_wins() {
        let switch = PanelSwitch::new(RecordingElement::default(), RecordingElement::default());
        switch.show(ActivePanel::Transfers).unwrap();
        switch.show(ActivePanel::Transactions).unwrap();
        assert_eq!(switch.transactions.last("display").as_deref(), Some("block"));
        assert_eq!(switch.transfers.last("display").as_deref(), Some("none"));
    }

    #[test]
    fn nothing_is_written_before_first_toggle() {
        let switch = PanelSwitch::new(RecordingElement::default(), RecordingElement::default());
        assert_eq!(switch.transactions.write_count(), 0);
        assert_eq!(switch.transfers.write_count(), 0);
    }
}
