//! Browser entry point for `trunk serve` / `trunk build`.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Debug).is_err() {
            web_sys::console::warn_1(&"console logger was already initialized".into());
        }
        log::info!("parameter table started");

        leptos::mount::mount_to_body(param_table::app::App);
    }
}
