use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use fern::colors::{
    Color,
    ColoredLevelConfig
};
use log::info;

pub fn setup_logging(config: &Configuration) -> Result<(), ConfigurationError>
{
    let level = config.log_level_filter()?;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let dispatch = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level);

    let dispatch = match config.log_file.as_str() {
        "" | "-" => dispatch.chain(std::io::stdout()),
        path => dispatch.chain(fern::log_file(path)?),
    };

    dispatch.apply()?;
    info!("logging initialized.");
    Ok(())
}

pub fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}

/// Peer lists travel comma-joined on the control channel.
pub fn join_peers(peers: &[String]) -> String {
    peers.join(",")
}

pub fn split_peers(peers: &str) -> Vec<String> {
    peers
        .split(',')
        .map(str::trim)
        .filter(|peer| !peer.is_empty())
        .map(String::from)
        .collect()
}
