use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::fs::OpenOptions;
use std::sync::Mutex;
use termcv::cli::{self, Cli};
use termcv::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    init_logging(&cli, &config)?;
    tracing::debug!("{}", config.summary());

    cli::run(&cli, &config).await
}

/// Combine the configured level with `RUST_LOG`. While the viewer owns the
/// screen, logs go to the configured file or are limited to errors.
fn init_logging(cli: &Cli, config: &AppConfig) -> Result<()> {
    let log_file = config.logging.file.as_ref().filter(|_| cli.is_interactive());
    let level = if cli.is_interactive() && log_file.is_none() {
        "error".to_string()
    } else {
        config.logging.level.to_lowercase()
    };

    let default_directive = format!("termcv={}", level);
    let env_override = env::var("RUST_LOG").unwrap_or_default();
    let combined_filter = if env_override.trim().is_empty() {
        default_directive
    } else if env_override.contains("termcv") {
        env_override
    } else {
        format!("{},{}", env_override, default_directive)
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(combined_filter)
        .with_target(true);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            subscriber
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => subscriber.with_writer(std::io::stderr).init(),
    }
    Ok(())
}
