use basket::core::config::{self, CliOverrides, ConfigSource};
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "basket", about = "Shopping list for the terminal")]
struct Args {
    /// Read settings from this file instead of ~/.basket/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Write the log here instead of basket.log
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Switch screens without animating
    #[arg(long)]
    no_animation: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config is read before the logger exists, so its outcome is reported after init
    let loaded = match &args.config {
        Some(path) => config::load_config_from(path)
            .map(|file_config| (file_config, ConfigSource::File(path.clone()))),
        None => config::load_config(),
    };
    let (file_config, config_source, config_error) = match loaded {
        Ok((file_config, source)) => (file_config, Some(source), None),
        Err(e) => (Default::default(), None, Some(e)),
    };

    let cli = CliOverrides {
        log_level: args.log_level,
        log_file: args.log_file,
        no_animation: args.no_animation,
    };
    let resolved = config::resolve(&file_config, &cli);

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(source) = &config_source {
        source.log();
    }
    if let Some(e) = config_error {
        log::warn!("Ignoring config file, using defaults: {}", e);
    }
    for level in &resolved.ignored_levels {
        log::warn!("Ignoring unknown log level {:?}", level);
    }
    log::debug!("Config: {:?}", file_config);
    log::info!(
        "Basket starting up (animation: {}, icons: {})",
        resolved.animation.enabled,
        resolved.show_icons
    );

    basket::tui::run(resolved)
}
