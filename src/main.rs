#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
mod modules;

include_modules!();

use crate::model::Config;
use crate::processing::processor::exec_processing;
use crate::utils::{get_config_file_path, init_logger, read_config, sanitize_sensitive_info, set_sanitize_sensitive_info};
use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(name = "iptv-catalog")]
#[command(version)]
#[command(about = "Aggregates IPTV playlists into static m3u catalogs", long_about = None)]
struct Args {
    /// The config file
    #[arg(short = 'c', long = "config")]
    config_file: Option<String>,

    /// The master index playlist, file path or url
    #[arg(short = 'i', long = "index")]
    index: Option<String>,

    /// The output directory
    #[arg(short = 'o', long = "output")]
    output_dir: Option<String>,

    /// log level
    #[arg(short = 'l', long = "log-level", default_missing_value = "info")]
    log_level: Option<String>,
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let args = Args::parse();

    let config_file = get_config_file_path(args.config_file.as_ref());
    init_logger(args.log_level.as_ref(), config_file.as_deref().unwrap_or_default());

    info!("Version: {VERSION}");
    let config = read_config(config_file.as_deref(), args.index.as_ref(), args.output_dir.as_ref())
        .unwrap_or_else(|err| exit!("{}", err));
    set_sanitize_sensitive_info(config.log.as_ref().map_or(true, |l| l.sanitize_sensitive_info));
    print_info(&config, config_file.as_deref());

    if let Err(err) = exec_processing(&config) {
        exit!("{}", err);
    }
}

fn print_info(config: &Config, config_file: Option<&str>) {
    info!("Current time: {}", chrono::offset::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("Working dir: {:?}", &config.working_dir);
    info!("Config file: {:?}", config_file.unwrap_or("not used"));
    info!("Index: {}", sanitize_sensitive_info(&config.index));
    info!("Output dir: {:?}", &config.output_dir);
    let category_catalog = config.category_catalog();
    info!("Categories: {} ({} nsfw)", category_catalog.len(), category_catalog.iter().filter(|c| c.nsfw).count());
}
