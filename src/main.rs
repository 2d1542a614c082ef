//! Trunk entry point. Mounts the app in `csr` builds; does nothing in
//! headless builds.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);

        log::info!("Welcome to Vitrina Fresh Market 🛒");
        log::info!("Fresh produce daily. Orders by phone or WhatsApp.");

        leptos::mount::mount_to_body(vitrina::app::App);
    }
}
