use std::rc::Rc;

use common::analytics::{AnalyticsEvent, EventName};
use common::model::site_config::{FormVariant, SiteConfig};
use common::ui::modal::{CloseReason, OpenDialog};
use common::ui::scroll::{ScrollState, ScrollTracker};
use gloo_net::http::Request;
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::{classes, html, Callback, Component, Context, Html, MouseEvent};

use crate::components::carousel::{CarouselComponent, Slide};
use crate::components::lead_form::LeadFormComponent;
use crate::components::modal::ModalDialog;
use crate::components::particles::Particles;
use crate::components::reveal::RevealObserver;
use crate::components::section_grid::SectionGrid;
use crate::navigation::{scroll_to_section, scroll_y};
use crate::platform::{detect_analytics, AnalyticsHandle};

const CONFIG_URL: &str = "/api/config";
const PAGE_SOURCE: &str = "Landing Page";

pub struct App {
    site: Rc<SiteConfig>,
    analytics: AnalyticsHandle,
    /// Keyed by the modal variant's `form_id`.
    dialogs: OpenDialog,
    scroll: ScrollState,
    tracker: ScrollTracker,
    on_scroll: Option<Closure<dyn Fn()>>,
    reveal: Option<RevealObserver>,
    /// Set when a re-render may have added reveal targets.
    reveal_stale: bool,
    loaded: bool,
}

pub enum Msg {
    ConfigLoaded(SiteConfig),
    OpenModal(String),
    CloseModal(String),
    Scrolled(f64),
    Navigate { label: String, target: String },
    PhoneClick,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let analytics = AnalyticsHandle::new(detect_analytics());
        analytics.emit(&AnalyticsEvent::new(EventName::PageLoad, PAGE_SOURCE));
        Self {
            site: Rc::new(SiteConfig::default()),
            analytics,
            dialogs: OpenDialog::default(),
            scroll: ScrollTracker::new().update(0.0),
            tracker: ScrollTracker::new(),
            on_scroll: None,
            reveal: None,
            reveal_stale: false,
            loaded: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(site) => {
                if *self.site == site {
                    return false;
                }
                self.site = Rc::new(site);
                self.reveal_stale = true;
                true
            }
            Msg::OpenModal(form_id) => {
                if let Some(variant) = self.site.form(&form_id) {
                    self.analytics
                        .emit(&AnalyticsEvent::new(EventName::CtaClick, variant.source.clone()));
                }
                self.dialogs.open(form_id);
                true
            }
            Msg::CloseModal(form_id) => self.dialogs.close(&form_id),
            Msg::Scrolled(y) => {
                let state = self.tracker.update(y);
                let changed = state != self.scroll;
                self.scroll = state;
                changed
            }
            Msg::Navigate { label, target } => {
                self.analytics
                    .emit(&AnalyticsEvent::new(EventName::CtaClick, label).with("target", target.clone()));
                scroll_to_section(&target);
                false
            }
            Msg::PhoneClick => {
                self.analytics
                    .emit(&AnalyticsEvent::new(EventName::PhoneClick, PAGE_SOURCE));
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let site = &self.site;
        let (floating, inline) = split_inline(site);
        let modals: Vec<&FormVariant> = site.forms.iter().filter(|f| f.in_modal).collect();

        let nav = |label: &'static str, target: &'static str| {
            link.callback(move |e: MouseEvent| {
                e.prevent_default();
                Msg::Navigate {
                    label: label.to_string(),
                    target: target.to_string(),
                }
            })
        };
        let on_phone = link.callback(|_: MouseEvent| Msg::PhoneClick);

        html! {
            <>
                <header class={classes!("site-header", self.scroll.header_scrolled.then_some("scrolled"))}>
                    <a class="brand" href="#home" onclick={nav("Home", "home")}>{ "Serviced Apartments" }</a>
                    <nav>
                        <a href="#amenities" onclick={nav("Amenities", "amenities")}>{ "Amenities" }</a>
                        <a href="#gallery" onclick={nav("Gallery", "gallery")}>{ "Gallery" }</a>
                        <a href="#contact" onclick={nav("Contact", "contact")}>{ "Contact" }</a>
                    </nav>
                    <a class="phone-link" href={format!("tel:{}", site.phone)} onclick={on_phone.clone()}>
                        { site.phone.clone() }
                    </a>
                </header>

                <main>
                    <section id="home" class="hero">
                        <Particles />
                        <h1 data-reveal="">{ "Fully furnished apartments, ready when you are" }</h1>
                        <div class="hero-actions" data-reveal="">
                            { for modals.iter().map(|variant| {
                                let form_id = variant.form_id.clone();
                                html! {
                                    <button class="cta" onclick={link.callback(move |_: MouseEvent| Msg::OpenModal(form_id.clone()))}>
                                        { variant.source.clone() }
                                    </button>
                                }
                            }) }
                        </div>
                    </section>

                    <SectionGrid id="amenities" title="Amenities" columns={3}>
                        { for AMENITIES.iter().map(|(title, text)| html! {
                            <article class="amenity">
                                <h3>{ *title }</h3>
                                <p>{ *text }</p>
                            </article>
                        }) }
                    </SectionGrid>

                    <section id="gallery" class="section">
                        <h2 class="section-title" data-reveal="">{ "Gallery" }</h2>
                        <CarouselComponent slides={gallery()} />
                    </section>

                    <SectionGrid id="contact" title="Get in touch" columns={inline.len().max(1)}>
                        { for inline.iter().map(|variant| self.lead_form(variant, true, Callback::noop(), classes!())) }
                    </SectionGrid>
                </main>

                if let Some(variant) = floating {
                    { self.lead_form(
                        variant,
                        true,
                        Callback::noop(),
                        classes!("floating-form", self.scroll.floating_hidden.then_some("hidden")),
                    ) }
                }

                { for modals.iter().map(|variant| {
                    let open = self.dialogs.is_open(&variant.form_id);
                    let form_id = variant.form_id.clone();
                    let close = link.callback(move |_: CloseReason| Msg::CloseModal(form_id.clone()));
                    let form_id = variant.form_id.clone();
                    let after_success = link.callback(move |_: ()| Msg::CloseModal(form_id.clone()));
                    html! {
                        <ModalDialog
                            id={format!("{}-modal", variant.form_id)}
                            title={variant.source.clone()}
                            {open}
                            on_close={close}
                        >
                            { self.lead_form(variant, open, after_success, classes!()) }
                        </ModalDialog>
                    }
                }) }

                <footer class="site-footer">
                    <a href={format!("tel:{}", site.phone)} onclick={on_phone}>{ format!("Call us: {}", site.phone) }</a>
                </footer>
            </>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if self.reveal_stale {
            self.reveal_stale = false;
            self.reveal = RevealObserver::attach();
        }
        if !first_render || self.loaded {
            return;
        }
        self.loaded = true;

        let link = ctx.link().clone();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_site_config().await {
                Ok(site) => link.send_message(Msg::ConfigLoaded(site)),
                Err(e) => warn!("using built-in site settings: {}", e),
            }
        });

        if let Some(window) = web_sys::window() {
            let link = ctx.link().clone();
            let closure = Closure::<dyn Fn()>::new(move || link.send_message(Msg::Scrolled(scroll_y())));
            if window
                .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
                .is_ok()
            {
                self.on_scroll = Some(closure);
            }
        }

        self.reveal = RevealObserver::attach();
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(closure)) = (web_sys::window(), self.on_scroll.take()) {
            let _ = window.remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }
        self.reveal = None;
    }
}

impl App {
    fn lead_form(
        &self,
        variant: &FormVariant,
        active: bool,
        on_close: Callback<()>,
        class: yew::Classes,
    ) -> Html {
        html! {
            <LeadFormComponent
                key={variant.form_id.clone()}
                variant={variant.clone()}
                site={Rc::clone(&self.site)}
                analytics={self.analytics.clone()}
                {active}
                {on_close}
                {class}
            />
        }
    }
}

/// The first non-modal variant floats beside the page; the rest sit in the
/// contact section.
fn split_inline(site: &SiteConfig) -> (Option<&FormVariant>, Vec<&FormVariant>) {
    let mut page_forms = site.forms.iter().filter(|f| !f.in_modal);
    let floating = page_forms.next();
    (floating, page_forms.collect())
}

async fn fetch_site_config() -> Result<SiteConfig, String> {
    let response = Request::get(CONFIG_URL)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("{} returned {}", CONFIG_URL, response.status()));
    }
    let site = response
        .json::<SiteConfig>()
        .await
        .map_err(|e| e.to_string())?;
    site.validate().map_err(|e| e.to_string())?;
    info!("site settings loaded: {} forms", site.forms.len());
    Ok(site)
}

const AMENITIES: [(&str, &str); 6] = [
    ("Housekeeping", "Daily cleaning and fresh linen."),
    ("High-speed Wi-Fi", "Fibre broadband in every unit."),
    ("Kitchenette", "Fully equipped for longer stays."),
    ("24/7 Security", "Staffed reception and CCTV."),
    ("Flexible Terms", "Stay a week, a month or longer."),
    ("Prime Location", "Minutes from business districts."),
];

fn gallery() -> Vec<Slide> {
    [
        ("/img/living.jpg", "Living room"),
        ("/img/bedroom.jpg", "Bedroom"),
        ("/img/kitchen.jpg", "Kitchen"),
        ("/img/lounge.jpg", "Residents' lounge"),
    ]
    .into_iter()
    .map(|(image, caption)| Slide {
        image: image.to_string(),
        caption: caption.to_string(),
    })
    .collect()
}
