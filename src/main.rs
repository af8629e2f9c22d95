mod components;
mod config;
mod hooks;
mod models;
mod router;
mod services;
mod utils;

use components::App;
use config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.logger_level()));
    log::info!("🚀 LeadGen dashboard starting (API: {})", CONFIG.api_url);

    yew::Renderer::<App>::new().render();
}
