//! Command line surface
//!
//! Precedence for every setting: CLI flag > environment > config file >
//! defaults.

use crate::app::ResumeApp;
use crate::config::AppConfig;
use crate::model::Resume;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use termcv_tui::{AppRunner, EventLoop, Terminal};
use tracing::info;

/// Width used for `--print` when neither `--width` nor a terminal is available
pub const FALLBACK_WIDTH: usize = 80;

/// CLI arguments for termcv
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "termcv")]
#[command(version)]
#[command(about = "View a résumé in the terminal", long_about = None)]
pub struct Cli {
    /// JSON résumé to display (defaults to the built-in sample)
    #[arg(short, long, value_name = "FILE")]
    pub resume: Option<PathBuf>,

    /// Path to a config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Palette name (default, simple)
    #[arg(short, long, value_name = "NAME")]
    pub palette: Option<String>,

    /// Viewer identifier recorded in the logs
    #[arg(long, value_name = "NAME")]
    pub viewer: Option<String>,

    /// Print the whole document once and exit
    #[arg(long)]
    pub print: bool,

    /// Width for --print (defaults to the terminal width)
    #[arg(short, long, value_name = "COLS")]
    pub width: Option<usize>,
}

impl Cli {
    /// Load, override and validate configuration for this invocation
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load_from_file(path)?,
            None => AppConfig::load()?,
        };
        config.apply_env_overrides();
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(path) = &self.resume {
            config.resume.path = Some(path.clone());
        }
        if let Some(palette) = &self.palette {
            config.theme.palette = palette.clone();
        }
    }

    /// True when the viewer will own the screen
    pub fn is_interactive(&self) -> bool {
        !self.print
    }
}

/// Load the configured résumé, or the built-in sample
pub fn load_resume(config: &AppConfig) -> Result<Resume> {
    match &config.resume.path {
        Some(path) => Resume::from_path(path)
            .with_context(|| format!("Failed to load résumé {}", path.display())),
        None => Resume::sample().context("Failed to load built-in sample résumé"),
    }
}

/// Lay out the whole document at `width` as one ANSI string
pub fn render_to_string(app: &ResumeApp, resume: &Resume, width: usize) -> String {
    app.engine().layout(resume, width).to_ansi_string()
}

fn print_width(cli: &Cli) -> usize {
    cli.width.unwrap_or_else(|| {
        crossterm::terminal::size()
            .ok()
            .map(|(width, _)| width as usize)
            .filter(|width| *width > 0)
            .unwrap_or(FALLBACK_WIDTH)
    })
}

/// Run the viewer, or print the document with `--print`
pub async fn run(cli: &Cli, config: &AppConfig) -> Result<()> {
    let resume = Arc::new(load_resume(config)?);
    let app = ResumeApp::from_config(Arc::clone(&resume), config)
        .context("Invalid theme configuration")?
        .viewer(cli.viewer.clone());

    if cli.print {
        let width = print_width(cli);
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", render_to_string(&app, &resume, width))?;
        return Ok(());
    }

    let mut terminal = Terminal::stdout().context("Failed to query terminal size")?;
    let _guard = terminal
        .enter_raw_mode()
        .context("Failed to enter raw mode")?;

    let mut runner = AppRunner::new(app, EventLoop::terminal(), terminal);
    let session = runner.run().await.context("Terminal I/O failed")?;
    info!(offset = session.viewport().offset(), "viewer closed");
    Ok(())
}
