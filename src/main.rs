use clap::Parser;
use facebatch::cli::Cli;
use facebatch::config::{LoggingSettings, Settings};
use facebatch::core::run;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "json" => subscriber.json().init(),
        "pretty" => subscriber.pretty().init(),
        _ => subscriber.compact().init(),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging);

    let config = cli.into_run_config(&settings);
    info!(
        "Starting batch: {} -> {}",
        config.input.display(),
        config.output.display()
    );

    match run(&config).await {
        Ok(summary) => {
            info!(
                "Batch complete: {} image(s), {} face(s)",
                summary.images, summary.faces
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Batch failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
