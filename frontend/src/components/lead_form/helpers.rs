//! Glue between the generic pipeline and the Yew component.
//!
//! The pipeline drives a [`FormView`]; `LinkView` turns each call into a
//! component message so every state change goes through `update`.

use std::time::Duration;

use common::lead::ValidationError;
use common::pipeline::FormView;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::LeadFormComponent;

pub struct LinkView {
    link: Scope<LeadFormComponent>,
}

impl LinkView {
    pub fn new(link: Scope<LeadFormComponent>) -> Self {
        Self { link }
    }
}

impl FormView for LinkView {
    fn clear_messages(&self) {
        self.link.send_message(Msg::ClearMessages);
    }

    fn show_invalid(&self, error: ValidationError) {
        self.link.send_message(Msg::ShowInvalid(error));
    }

    fn set_busy(&self, busy: bool) {
        self.link.send_message(Msg::SetBusy(busy));
    }

    fn show_success(&self) {
        self.link.send_message(Msg::ShowSuccess);
    }

    fn show_error(&self, message: &str) {
        self.link.send_message(Msg::ShowError(message.to_string()));
    }

    fn reset_fields(&self) {
        self.link.send_message(Msg::ResetFields);
    }

    fn schedule_dismiss(&self, after: Duration, close_modal: bool) {
        self.link
            .send_message(Msg::ScheduleDismiss { after, close_modal });
    }
}

/// Blocking browser alert, used by variants with alert-style feedback.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Moves keyboard focus to the input behind `node`.
pub fn focus(node: &NodeRef) {
    if let Some(input) = node.cast::<web_sys::HtmlElement>() {
        let _ = input.focus();
    }
}

/// Reads the current value of the input that fired `e`.
pub fn input_value(e: &InputEvent) -> String {
    e.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Writes `value` straight into the input that fired `e`.
///
/// Needed for the phone mask: when a keystroke is rejected the component state
/// does not change, so a re-render alone would leave the stray character in
/// the DOM.
pub fn write_back(e: &InputEvent, value: &str) {
    if let Some(input) = e
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
    {
        if input.value() != value {
            input.set_value(value);
        }
    }
}
