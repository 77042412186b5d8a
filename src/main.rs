//! Smart Health Care - Desktop admin dashboard for patients, medications and reminders.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use smart_health_care as app;

use app::config::{AppConfig, ConfigLoadResult};
use app::ui::App;

/// Desktop admin dashboard for patients, medications and reminders.
#[derive(Parser)]
#[command(name = "smart-health-care")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Explicit config file path (overrides --dev)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    tracing::info!("Smart Health Care starting...");

    // Determine config path based on mode
    let config_path = match cli.config {
        Some(path) => path,
        None if cli.dev => {
            tracing::info!("Dev mode: loading config from current directory");
            PathBuf::from("config.toml")
        }
        None => AppConfig::default_path(),
    };
    tracing::info!("Config path: {:?}", config_path);

    let (config, initial_error) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded successfully");
            (config, None)
        }
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, using defaults");
            (AppConfig::default(), None)
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::warn!("Config invalid, using defaults: {}", e);
            (AppConfig::default(), Some(format!("{e}. Using default settings.")))
        }
    };

    run_app(config, initial_error)
}

/// Run the dashboard window.
fn run_app(config: AppConfig, initial_error: Option<String>) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Smart Health Care")
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([app::config::MIN_WINDOW_WIDTH, app::config::MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "Smart Health Care",
        options,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(App::new(config, initial_error)))
        }),
    )
}
