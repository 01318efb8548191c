//! Runtime state of a lead form.

use std::rc::Rc;

use common::lead::Field;
use common::model::lead::LeadFields;
use gloo_timers::callback::Timeout;
use log::error;
use yew::prelude::*;

use super::props::LeadFormProps;
use crate::platform::{page_url, BrowserClock, BrowserPipeline, GlooTransport};

pub struct LeadFormComponent {
    /// Live field values; the mobile value is already masked.
    pub fields: LeadFields,

    /// Submit control disabled and showing the busy label.
    pub busy: bool,

    pub success_visible: bool,

    /// Inline error message, if any.
    pub error: Option<String>,

    /// `None` when the variant could not be wired up; submitting then shows
    /// the generic error instead of silently doing nothing.
    pub pipeline: Option<Rc<BrowserPipeline>>,

    pub name_ref: NodeRef,
    pub mobile_ref: NodeRef,
    pub email_ref: NodeRef,

    /// Pending success dismissal; dropping it cancels the timer.
    pub dismiss: Option<Timeout>,
}

impl LeadFormComponent {
    pub fn new(props: &LeadFormProps) -> Self {
        Self {
            fields: LeadFields::default(),
            busy: false,
            success_visible: false,
            error: None,
            pipeline: build_pipeline(props),
            name_ref: NodeRef::default(),
            mobile_ref: NodeRef::default(),
            email_ref: NodeRef::default(),
            dismiss: None,
        }
    }

    pub fn field_ref(&self, field: Field) -> Option<&NodeRef> {
        match field {
            Field::Name => Some(&self.name_ref),
            Field::Mobile => Some(&self.mobile_ref),
            Field::Email => Some(&self.email_ref),
            Field::Date | Field::Time => None,
        }
    }
}

pub fn build_pipeline(props: &LeadFormProps) -> Option<Rc<BrowserPipeline>> {
    match BrowserPipeline::new(
        &props.site,
        props.variant.clone(),
        GlooTransport,
        BrowserClock,
    ) {
        Ok(pipeline) => Some(Rc::new(
            pipeline
                .with_page(page_url())
                .with_analytics((*props.analytics).clone()),
        )),
        Err(e) => {
            error!("form {} disabled: {}", props.variant.form_id, e);
            None
        }
    }
}
