use yew::prelude::*;

mod components;
pub mod common;
pub mod dataset;
pub mod hooks;
pub mod settings;

use components::dashboard::Dashboard;

#[function_component(App)]
pub fn app() -> Html {
    html! { <Dashboard /> }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Solar Output Regression Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Dataset URL: {}", settings.dataset_url);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
