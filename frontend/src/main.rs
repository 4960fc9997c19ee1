use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod logging;

fn main() {
    logging::init(config::LOG_LEVEL);
    yew::Renderer::<App>::new().render();
}
