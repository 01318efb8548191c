//! Modal dialog hosting a lead form.
//!
//! The parent owns the open flag; this component mirrors it in a
//! [`ModalState`] to manage what comes with it: the `show` class, the body
//! scroll lock and the `Escape` key listener. Every dismissal (close button,
//! backdrop, `Escape`) is reported through `on_close`.

use common::ui::modal::{CloseReason, ModalState};
use uuid::Uuid;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::{html, Callback, Component, Context, Html, MouseEvent, Properties};

pub struct ModalDialog {
    title_id: String,
    state: ModalState,
    keydown: Option<Closure<dyn Fn(KeyboardEvent)>>,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    /// DOM id of the modal container.
    pub id: String,
    pub title: String,
    pub open: bool,
    pub on_close: Callback<CloseReason>,
    #[prop_or_default]
    pub children: Html,
}

pub enum Msg {
    Key(String),
    Dismiss(CloseReason),
}

impl Component for ModalDialog {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let mut state = ModalState::default();
        if ctx.props().open {
            state.open();
        }
        Self {
            title_id: format!("modal-title-{}", Uuid::new_v4()),
            state,
            keydown: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let closed = match msg {
            Msg::Key(key) => self.state.handle_key(&key).then_some(CloseReason::EscapeKey),
            Msg::Dismiss(reason) => self.state.close(reason).then_some(reason),
        };
        match closed {
            Some(reason) => {
                self.sync_document(ctx);
                ctx.props().on_close.emit(reason);
                true
            }
            None => false,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let changed = if ctx.props().open {
            self.state.open()
        } else {
            self.state.close(CloseReason::Programmatic)
        };
        if changed {
            self.sync_document(ctx);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let on_backdrop = link.callback(|_: MouseEvent| Msg::Dismiss(CloseReason::Backdrop));
        let on_close = link.callback(|_: MouseEvent| Msg::Dismiss(CloseReason::CloseButton));
        let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
        let class = if self.state.is_open() { "modal show" } else { "modal" };

        html! {
            <div
                id={props.id.clone()}
                class={class}
                aria-hidden={(!self.state.is_open()).to_string()}
                onclick={on_backdrop}
            >
                <div
                    class="modal-content"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby={self.title_id.clone()}
                    onclick={keep_open}
                >
                    <button class="modal-close" aria-label="Close" onclick={on_close}>{ "✕" }</button>
                    <h2 id={self.title_id.clone()}>{ props.title.clone() }</h2>
                    { props.children.clone() }
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && self.state.is_open() {
            self.sync_document(ctx);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.detach_keydown();
        if self.state.is_open() {
            set_body_overflow("");
        }
    }
}

impl ModalDialog {
    /// Applies the scroll lock and the key listener for the current state.
    fn sync_document(&mut self, ctx: &Context<Self>) {
        set_body_overflow(self.state.body_overflow());
        if self.state.is_open() {
            self.attach_keydown(ctx);
        } else {
            self.detach_keydown();
        }
    }

    fn attach_keydown(&mut self, ctx: &Context<Self>) {
        if self.keydown.is_some() {
            return;
        }
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let link = ctx.link().clone();
        let closure = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
            link.send_message(Msg::Key(e.key()));
        });
        if document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .is_ok()
        {
            self.keydown = Some(closure);
        }
    }

    fn detach_keydown(&mut self) {
        if let Some(closure) = self.keydown.take() {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let _ = document
                    .remove_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            }
        }
    }
}

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.style().set_property("overflow", value);
    }
}
