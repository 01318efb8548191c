//! Lead form: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `LeadFormProps`, `LeadFormComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - Rebuild the submission pipeline when the variant or site settings change.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::LeadFormProps;
pub use state::LeadFormComponent;

impl Component for LeadFormComponent {
    type Message = Msg;
    type Properties = LeadFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        LeadFormComponent::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.variant != old_props.variant
            || props.site != old_props.site
            || props.analytics != old_props.analytics
        {
            self.pipeline = state::build_pipeline(props);
        }
        if old_props.active && !props.active {
            self.dismiss = None;
            self.success_visible = false;
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
