/// Base URL of the shop API. Set `BACKEND_URL` at build time to override.
pub fn get_backend_url() -> &'static str {
    if let Some(url) = option_env!("BACKEND_URL") {
        return url;
    }
    if cfg!(debug_assertions) {
        "http://localhost:3000"
    } else {
        ""
    }
}

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
