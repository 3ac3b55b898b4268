use crate::model::LogLevelConfig;
use crate::utils::read_config_text;
use env_logger::{Builder, Target};
use log::{error, info, LevelFilter};

pub const LOG_ENV_VAR: &str = "IPTV_CATALOG_LOG";

const LOG_ERROR_LEVEL_MOD: &[&str] = &[
    "reqwest::blocking",
    "reqwest::connect",
    "hyper_util::client",
    "rustls",
];

fn get_log_level(log_level: &str) -> LevelFilter {
    match log_level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        // "info" => LevelFilter::Info,
        _ => LevelFilter::Info,
    }
}

fn read_config_log_level(config_file: &str) -> Option<String> {
    let text = read_config_text(config_file).ok()?;
    serde_yaml::from_str::<LogLevelConfig>(&text)
        .map_err(|e| error!("Failed to parse log config file: {e}"))
        .ok()
        .and_then(|cfg| cfg.log.and_then(|l| l.log_level))
}

/// Splits a level expression like `info,iptv_catalog::processing=debug`
/// into the global level and the per module levels.
fn parse_log_levels(log_level: &str) -> (Option<LevelFilter>, Vec<(String, LevelFilter)>) {
    let mut global = None;
    let mut modules = vec![];
    for pair in log_level.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if pair.contains('=') {
            let mut kv_iter = pair.split('=').map(str::trim);
            if let (Some(module), Some(level)) = (kv_iter.next(), kv_iter.next()) {
                modules.push((module.to_string(), get_log_level(level)));
            }
        } else {
            global = Some(get_log_level(pair));
        }
    }
    (global, modules)
}

pub fn init_logger(user_log_level: Option<&String>, config_file: &str) {
    let env_log_level = std::env::var(LOG_ENV_VAR).ok();

    let mut log_builder = Builder::from_default_env();
    log_builder.target(Target::Stdout);

    // priority  CLI-Argument, Env-Var, Config, Default
    let log_level = user_log_level
        .map(std::string::ToString::to_string) // cli-argument
        .or(env_log_level) // env
        .or_else(|| read_config_log_level(config_file)) // config
        .unwrap_or_else(|| "info".to_string()); // Default

    let (global, modules) = parse_log_levels(&log_level);
    log_builder.filter_level(global.unwrap_or(LevelFilter::Info));
    let mut log_levels = vec![global.unwrap_or(LevelFilter::Info).to_string()];
    for (module, level) in modules {
        log_levels.push(format!("{module}={level}"));
        log_builder.filter_module(&module, level);
    }
    for module in LOG_ERROR_LEVEL_MOD {
        log_builder.filter_module(module, LevelFilter::Error);
    }
    log_builder.init();
    info!("Log Level {}", &log_levels.join(", "));
}
