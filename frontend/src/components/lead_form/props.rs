//! Defines the properties for the `LeadFormComponent`.
//!
//! One component renders every form variant on the page; the variant decides
//! which fields appear, how the payload is encoded, where validation messages
//! go and whether a success closes the surrounding modal.

use std::rc::Rc;

use common::model::site_config::{FormVariant, SiteConfig};
use yew::prelude::*;

use crate::platform::AnalyticsHandle;

/// Properties for the `LeadFormComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct LeadFormProps {
    /// The form variant to render and submit.
    pub variant: FormVariant,

    /// Site-wide settings (endpoint, default timings, timezone). Read-only.
    pub site: Rc<SiteConfig>,

    /// Analytics sinks detected at startup; may be empty.
    #[prop_or_default]
    pub analytics: AnalyticsHandle,

    /// `false` while the form sits in a closed modal. Going inactive cancels
    /// a pending success dismissal.
    #[prop_or(true)]
    pub active: bool,

    /// Invoked when a successful submission asks the enclosing modal to close.
    #[prop_or_default]
    pub on_close: Callback<()>,

    /// Extra classes for the form container, e.g. the floating form's
    /// scroll-hidden state.
    #[prop_or_default]
    pub class: Classes,
}
