use frontend::{config, App};

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("Starting shop frontend, backend at {:?}", config::get_backend_url());
    yew::Renderer::<App>::new().render();
}
