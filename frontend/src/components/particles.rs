use common::ui::particles::{scatter, Particle, PARTICLE_COUNT};
use yew::{html, Component, Context, Html};

/// Decorative floating particles. The layout is drawn once per mount.
pub struct Particles {
    layout: Vec<Particle>,
}

impl Component for Particles {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            layout: scatter(PARTICLE_COUNT, js_sys::Math::random),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div id="particles" class="particles" aria-hidden="true">
                { for self.layout.iter().map(|p| html! {
                    <div class="particle" style={p.style()} />
                }) }
            </div>
        }
    }
}
