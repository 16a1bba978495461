use common::Catalog;
use std::rc::Rc;
use yew::prelude::*;

pub mod components;
pub mod hooks;
pub mod settings;

use components::report::ReportPage;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub catalog: Rc<Catalog>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ReportPage catalog={props.catalog.clone()} />
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    let settings = settings::AppSettings::from_environment();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Aptitude Report Starting ===");
    log::info!("Application settings: {:?}", settings);

    // Content is built once here and passed down; nothing below reads a global
    let catalog = Rc::new(Catalog::builtin());
    log::debug!(
        "Catalog loaded: {} citations, {} expandable topics",
        catalog.citations.len(),
        catalog.expandable_topics().count()
    );

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::with_props(AppProps { catalog }).render();
    log::info!("Application initialized successfully");
}
