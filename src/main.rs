use covid_dashboard::config::CONFIG;
use covid_dashboard::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 COVID-19 Dashboard starting (API: {})", CONFIG.api_base_url);

    yew::Renderer::<App>::new().render();
}
