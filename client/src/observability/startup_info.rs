use tracing::info;

use domain::endpoint::Endpoint;
use imgconsole_application::infrastructure_config::Config;

pub fn print_session_info(config: &Config) {
    info!("⚙️  Configuration:");
    info!("  🌐 Remote service: {}", config.api.base_url);
    info!("  📁 Processed images: {}/", config.output.directory);
    info!(
        "  ⏱️  Request timeout: {}s, upload chunk: {} bytes",
        config.api.request_timeout_secs, config.api.upload_chunk_bytes
    );
    print_endpoint_info();
}

fn print_endpoint_info() {
    let names: Vec<&str> = Endpoint::ALL.iter().map(Endpoint::name).collect();
    info!("📋 Endpoints: {}", names.join(", "));
}
