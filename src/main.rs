#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use codex_core::logging::init_logging;
use codex_core::{CodexResult, SiteConfig};
use dioxus::desktop::{Config, WindowBuilder};

/// Global site configuration, resolved once from file and flags
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the site configuration (resolved at startup or default)
pub fn get_site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// The Identity Codex - research portfolio
#[derive(Parser, Debug)]
#[command(name = "codex-desktop")]
#[command(about = "The Identity Codex - animated AI security research portfolio")]
struct Args {
    /// JSON config file (defaults to <config dir>/codex/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// POST target for the footer contact form
    #[arg(long)]
    form_endpoint: Option<String>,

    /// Preloader duration in milliseconds
    #[arg(long)]
    splash_ms: Option<u64>,

    /// Skip the preloader entirely
    #[arg(long, conflicts_with = "splash_ms")]
    no_splash: bool,

    /// Log at debug level (RUST_LOG still takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

/// Load the config file, then let flags override it
fn resolve_config(args: &Args) -> CodexResult<SiteConfig> {
    let mut config = SiteConfig::load_or_default(args.config.as_deref())?;

    if let Some(ref endpoint) = args.form_endpoint {
        config.form_endpoint = endpoint.clone();
    }
    if let Some(ms) = args.splash_ms {
        config.splash_ms = ms;
    }
    if args.no_splash {
        config.splash_ms = 0;
    }

    config.validate()?;
    Ok(config)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to resolve configuration: {}", e);
            eprintln!("codex-desktop: {}", e);
            std::process::exit(2);
        }
    };

    let title = config.window_title();
    tracing::info!(
        owner = %config.owner,
        splash_ms = config.splash_ms,
        "Starting '{}'",
        title
    );

    // Store configuration globally
    let _ = SITE_CONFIG.set(config);

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
}
