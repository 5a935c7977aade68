use log::{error, info};

use tangent_site::config;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Tangent Analytics site");
    let ready = tangent_site::on_dom_ready(|| {
        if let Err(e) = tangent_site::init() {
            error!("Failed to initialize page behaviors: {}", e);
        }
    });
    if let Err(e) = ready {
        error!("Could not wait for the DOM: {}", e);
    }
}
