//! View rendering for the lead form component.
//!
//! Element ids are derived from the variant's `form_id` so page scripts and
//! styles can address every form the same way (`<form_id>-name`,
//! `<form_id>-success`, `<form_id>-submit`, ...).

use common::lead::{mask_phone, Field};
use common::model::site_config::FormVariant;
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{input_value, write_back};
use super::messages::Msg;
use super::state::LeadFormComponent;

pub fn view(component: &LeadFormComponent, ctx: &Context<LeadFormComponent>) -> Html {
    let props = ctx.props();
    let variant = &props.variant;
    let link = ctx.link();

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class={classes!("lead-form", props.class.clone())}>
            <form id={variant.form_id.clone()} {onsubmit} novalidate={true}>
                { text_input(variant, link, Field::Name, "text", "Your Name", &component.fields.name, &component.name_ref) }
                { phone_input(variant, link, &component.fields.mobile, &component.mobile_ref) }
                {
                    if variant.collect_email {
                        text_input(variant, link, Field::Email, "email", "Email (optional)", &component.fields.email, &component.email_ref)
                    } else {
                        html! {}
                    }
                }
                { schedule_inputs(component, variant, link) }
                <button
                    id={variant.submit_id()}
                    class="submit-btn"
                    type="submit"
                    disabled={component.busy}
                >
                    { if component.busy { variant.busy_label.clone() } else { variant.submit_label.clone() } }
                </button>
            </form>
            <div
                id={variant.success_id()}
                class="form-message success"
                role="status"
                style={display(component.success_visible)}
            >
                { "Thank you! Our team will call you shortly." }
            </div>
            <div
                id={variant.error_id()}
                class="form-message error"
                role="alert"
                style={display(component.error.is_some())}
            >
                { component.error.clone().unwrap_or_default() }
            </div>
        </div>
    }
}

fn text_input(
    variant: &FormVariant,
    link: &Scope<LeadFormComponent>,
    field: Field,
    kind: &'static str,
    placeholder: &'static str,
    value: &str,
    node: &NodeRef,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| Msg::UpdateField(field, input_value(&e)));
    html! {
        <input
            id={variant.field_id(field.key())}
            name={field.key()}
            type={kind}
            placeholder={placeholder}
            value={value.to_string()}
            ref={node.clone()}
            {oninput}
        />
    }
}

/// The mobile input applies the mask on every input event, which covers
/// typing and pasting alike.
fn phone_input(
    variant: &FormVariant,
    link: &Scope<LeadFormComponent>,
    value: &str,
    node: &NodeRef,
) -> Html {
    let oninput = link.callback(|e: InputEvent| {
        let masked = mask_phone(&input_value(&e));
        write_back(&e, &masked);
        Msg::UpdateField(Field::Mobile, masked)
    });
    html! {
        <input
            id={variant.field_id(Field::Mobile.key())}
            name={Field::Mobile.key()}
            type="tel"
            inputmode="numeric"
            placeholder="10-digit Mobile Number"
            value={value.to_string()}
            ref={node.clone()}
            {oninput}
        />
    }
}

fn schedule_inputs(
    component: &LeadFormComponent,
    variant: &FormVariant,
    link: &Scope<LeadFormComponent>,
) -> Html {
    if !variant.collect_schedule {
        return html! {};
    }
    let on_date = link.callback(|e: InputEvent| Msg::UpdateField(Field::Date, input_value(&e)));
    let on_time = link.callback(|e: InputEvent| Msg::UpdateField(Field::Time, input_value(&e)));
    html! {
        <div class="schedule-row">
            <input
                id={variant.field_id(Field::Date.key())}
                name={Field::Date.key()}
                type="date"
                value={component.fields.date.clone()}
                oninput={on_date}
            />
            <input
                id={variant.field_id(Field::Time.key())}
                name={Field::Time.key()}
                type="time"
                value={component.fields.time.clone()}
                oninput={on_time}
            />
        </div>
    }
}

fn display(visible: bool) -> &'static str {
    if visible { "display:block;" } else { "display:none;" }
}
