//! Update function for the lead form component.
//!
//! Submission itself runs in the shared pipeline on a spawned task; every
//! visible change it makes arrives back here as a message.

use std::rc::Rc;

use common::lead::Field;
use common::model::lead::LeadFields;
use common::model::site_config::FeedbackStyle;
use common::pipeline::{DeliveryError, Outcome};
use gloo_timers::callback::Timeout;
use log::{debug, error};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{alert, focus, LinkView};
use super::messages::Msg;
use super::state::LeadFormComponent;

pub fn update(component: &mut LeadFormComponent, ctx: &Context<LeadFormComponent>, msg: Msg) -> bool {
    match msg {
        Msg::UpdateField(field, value) => {
            let fields = &mut component.fields;
            let slot = match field {
                Field::Name => &mut fields.name,
                Field::Mobile => &mut fields.mobile,
                Field::Email => &mut fields.email,
                Field::Date => &mut fields.date,
                Field::Time => &mut fields.time,
            };
            if *slot == value {
                return false;
            }
            *slot = value;
            true
        }
        Msg::Submit => {
            let Some(pipeline) = component.pipeline.clone() else {
                component.error = Some(DeliveryError::Transport(String::new()).to_string());
                return true;
            };
            submit(pipeline, ctx, component.fields.clone());
            false
        }
        Msg::ClearMessages => {
            component.dismiss = None;
            component.success_visible = false;
            component.error = None;
            true
        }
        Msg::ShowInvalid(err) => {
            match ctx.props().variant.feedback {
                FeedbackStyle::Inline => component.error = Some(err.to_string()),
                FeedbackStyle::Alert => alert(&err.to_string()),
            }
            if let Some(node) = component.field_ref(err.field()) {
                focus(node);
            }
            true
        }
        Msg::SetBusy(busy) => {
            component.busy = busy;
            true
        }
        Msg::ShowSuccess => {
            component.error = None;
            component.success_visible = true;
            true
        }
        Msg::ShowError(message) => {
            error!("{}: {}", ctx.props().variant.source, message);
            component.success_visible = false;
            component.error = Some(message);
            true
        }
        Msg::ResetFields => {
            component.fields = LeadFields::default();
            true
        }
        Msg::ScheduleDismiss { after, close_modal } => {
            let link = ctx.link().clone();
            let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
            component.dismiss = Some(Timeout::new(millis, move || {
                link.send_message(Msg::Dismiss { close_modal });
            }));
            false
        }
        Msg::Dismiss { close_modal } => {
            component.dismiss = None;
            component.success_visible = false;
            if close_modal {
                ctx.props().on_close.emit(());
            }
            true
        }
    }
}

fn submit(
    pipeline: Rc<crate::platform::BrowserPipeline>,
    ctx: &Context<LeadFormComponent>,
    fields: LeadFields,
) {
    let view = LinkView::new(ctx.link().clone());
    spawn_local(async move {
        let outcome = pipeline.submit(&view, fields).await;
        match outcome {
            Outcome::Success => debug!("{} submission delivered", pipeline.variant().source),
            Outcome::Busy => debug!("{} submission already in flight", pipeline.variant().source),
            Outcome::Invalid(_) | Outcome::DeliveryFailed(_) => {}
        }
    });
}
