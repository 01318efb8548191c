use crate::app::App;

mod app;
mod components;
mod logger;
mod navigation;
mod platform;

fn main() {
    logger::init(log::LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
