use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct SectionGridProps {
    pub id: String,
    pub title: String,
    pub columns: usize,
    pub children: Children,
}

/// Titled page section laying its children out on an even grid.
/// Each cell fades in on scroll.
pub struct SectionGrid;

impl Component for SectionGrid {
    type Message = ();
    type Properties = SectionGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SectionGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat({}, minmax(0, 1fr));
             gap: 1.5rem;",
            props.columns.max(1)
        );

        html! {
            <section id={props.id.clone()} class="section">
                <h2 class="section-title" data-reveal="">{ props.title.clone() }</h2>
                <div class="section-grid" style={style}>
                    { for props.children.iter().map(|child| html! {
                        <div class="reveal" data-reveal="">{ child }</div>
                    }) }
                </div>
            </section>
        }
    }
}
