use shenation_web::components::App;
use shenation_web::config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 SheNation starting ({})...", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
