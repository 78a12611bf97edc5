use vitrine::app::VitrineApp;
use vitrine::cli::Args;
use vitrine::entities::{Catalog, Order};
use vitrine::paths::{self, PathConfig};

use clap::Parser;
use eframe::egui;
use log::{debug, info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments first (needed for log setup)
    let args = Args::parse();

    // Create path configuration from CLI args and environment
    let path_config = PathConfig::from_env_and_cli(args.config_dir.clone());

    // Ensure directories exist
    if let Err(e) = paths::ensure_dirs(&path_config) {
        eprintln!("Warning: Failed to create application directories: {}", e);
    }

    // Determine log level based on verbosity flags
    // 0 (default) = warn, 1 (-v) = info, 2 (-vv) = debug, 3+ (-vvv) = trace
    let log_level = match args.verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    // Initialize logger based on --log flag
    if let Some(log_path_opt) = &args.log_file {
        // File logging with specified verbosity level
        let log_path = log_path_opt
            .as_ref()
            .cloned()
            .unwrap_or_else(|| paths::data_file("vitrine.log", &path_config));

        let file = std::fs::File::create(&log_path)?;

        env_logger::Builder::new()
            .filter_level(log_level)
            .filter_module("egui", log::LevelFilter::Info) // Suppress egui DEBUG spam
            .format_timestamp_millis()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();

        info!(
            "Logging to file: {} (level: {:?})",
            log_path.display(),
            log_level
        );
    } else {
        // Console logging with specified verbosity level (respects RUST_LOG if set)
        let default_level = match args.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
            .filter_module("egui", log::LevelFilter::Info) // Suppress egui DEBUG spam
            .format_timestamp_millis()
            .init();
    }

    info!("Vitrine storefront showcase starting...");
    debug!("Command-line args: {:?}", args);

    info!(
        "Config path: {}",
        paths::config_file("vitrine.json", &path_config).display()
    );

    // Catalog: CLI-provided JSON file, falling back to the built-in demo
    let catalog = match &args.catalog {
        Some(path) => match Catalog::from_json(path) {
            Ok(catalog) => {
                info!(
                    "Catalog loaded from {}: {} product(s)",
                    path.display(),
                    catalog.products.len()
                );
                catalog
            }
            Err(e) => {
                warn!("{:#}; falling back to demo catalog", e);
                Catalog::demo()
            }
        },
        None => Catalog::demo(),
    };

    if let Some(ref dir) = args.assets_dir {
        info!("Assets directory: {}", dir.display());
    } else {
        info!("No assets directory provided, using painted placeholders");
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "Vitrine v{} • storefront showcase",
                env!("CARGO_PKG_VERSION")
            ))
            .with_inner_size(egui::vec2(1100.0, 760.0))
            .with_resizable(true),
        persist_window: true,
        persistence_path: Some(paths::config_file("vitrine.json", &path_config)),
        ..Default::default()
    };

    // Run the app
    eframe::run_native(
        "Vitrine",
        native_options,
        Box::new(move |cc| {
            // Load persisted settings if available, otherwise create default
            let mut app: VitrineApp = cc
                .storage
                .and_then(|storage| storage.get_string(eframe::APP_KEY))
                .and_then(|json| serde_json::from_str(&json).ok())
                .unwrap_or_else(|| {
                    info!("No persisted state found, creating default app");
                    VitrineApp::default()
                });

            // CLI overrides persisted settings
            if let Some(period) = args.period {
                app.settings.auto_advance_secs = period;
            }

            // Channels and controllers do not survive (de)serialization
            app.rebuild_runtime(catalog, Order::demo_history(), args.assets_dir.clone());

            if args.fullscreen {
                cc.egui_ctx
                    .send_viewport_cmd(egui::ViewportCommand::Fullscreen(true));
            }

            Ok(Box::new(app))
        }),
    )?;

    info!("Application exiting");
    Ok(())
}
