use common::ui::carousel::{Carousel, AUTO_ADVANCE};
use gloo_timers::callback::Interval;
use yew::{classes, html, Component, Context, Html, MouseEvent, Properties};

#[derive(Debug, PartialEq, Clone)]
pub struct Slide {
    pub image: String,
    pub caption: String,
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub slides: Vec<Slide>,
}

pub enum Msg {
    Next,
    Prev,
    Show(usize),
}

/// Looping image carousel with dots and a fixed auto-advance interval.
pub struct CarouselComponent {
    carousel: Carousel,
    _ticker: Option<Interval>,
}

impl Component for CarouselComponent {
    type Message = Msg;
    type Properties = CarouselProps;

    fn create(ctx: &Context<Self>) -> Self {
        let carousel = Carousel::new(ctx.props().slides.len());
        let ticker = (carousel.len() > 1).then(|| {
            let link = ctx.link().clone();
            let millis = u32::try_from(AUTO_ADVANCE.as_millis()).unwrap_or(u32::MAX);
            Interval::new(millis, move || link.send_message(Msg::Next))
        });
        Self {
            carousel,
            _ticker: ticker,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let before = self.carousel.current();
        match msg {
            Msg::Next => {
                self.carousel.next();
            }
            Msg::Prev => {
                self.carousel.prev();
            }
            Msg::Show(n) => {
                self.carousel.show(isize::try_from(n).unwrap_or(0));
            }
        }
        before != self.carousel.current()
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let len = ctx.props().slides.len();
        if len != self.carousel.len() {
            *self = Self::create(ctx);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let slides = &ctx.props().slides;
        if slides.is_empty() {
            return html! {};
        }
        let link = ctx.link();
        let current = self.carousel.current();

        html! {
            <div class="carousel">
                { for slides.iter().enumerate().map(|(i, slide)| html! {
                    <figure class={classes!("slide", (i == current).then_some("active"))}>
                        <img src={slide.image.clone()} alt={slide.caption.clone()} loading="lazy" />
                        <figcaption>{ slide.caption.clone() }</figcaption>
                    </figure>
                }) }
                <button class="carousel-prev" aria-label="Previous"
                    onclick={link.callback(|_: MouseEvent| Msg::Prev)}>{ "‹" }</button>
                <button class="carousel-next" aria-label="Next"
                    onclick={link.callback(|_: MouseEvent| Msg::Next)}>{ "›" }</button>
                <div class="carousel-dots">
                    { for (0..slides.len()).map(|i| html! {
                        <button
                            class={classes!("dot", (i == current).then_some("active"))}
                            aria-label={format!("Slide {}", i + 1)}
                            onclick={link.callback(move |_: MouseEvent| Msg::Show(i))}
                        />
                    }) }
                </div>
            </div>
        }
    }
}
