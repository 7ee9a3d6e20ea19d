use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use tutorials::core::config::{self, CliOverrides};
use tutorials::{headless, tui};

#[derive(Parser)]
#[command(name = "tutorials", about = "Featured tutorials, fetched from the tutorials backend")]
struct Args {
    /// Backend base URL (the list is fetched from <BASE_URL>/api/tutorials)
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Print the rendered page as HTML to stdout instead of starting the TUI
    #[arg(long)]
    html: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to tutorials.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("tutorials.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        Default::default()
    });
    let cli = CliOverrides {
        base_url: args.base_url,
        timeout_secs: args.timeout,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Tutorials starting up: base_url={} timeout={:?} html={}",
        resolved.base_url,
        resolved.timeout,
        args.html
    );

    if args.html {
        headless::run(&resolved).await
    } else {
        tui::run(resolved)
    }
}
