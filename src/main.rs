use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use wicket::core::config::{self, WicketConfig};

#[derive(Parser)]
#[command(name = "wicket", about = "Terminal chat window for JSON chat backends")]
struct Args {
    /// Chat backend endpoint, e.g. http://localhost:5000
    #[arg(short, long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to wicket.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("wicket.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    // A malformed config file falls back to defaults; the error goes to the log
    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Config load failed ({e}), using defaults");
        WicketConfig::default()
    });
    let config = config::resolve(&file_config, args.endpoint.as_deref());

    log::info!("Wicket starting up against {}", config.endpoint);

    wicket::tui::run(config)
}
