use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create config.toml file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Configuration file to load.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Mirror web base URL, conflicts with --upstream.
    #[arg(long)]
    pub mirror: Option<String>,
    /// Master base URL, conflicts with --mirror.
    #[arg(long)]
    pub upstream: Option<String>,
    /// Listen address.
    #[arg(long)]
    pub addr: Option<String>,
    /// Shared token, must be the same on master and slaves.
    #[arg(long)]
    pub token: Option<String>,
    /// Log file, "-" for stdout.
    #[arg(long)]
    pub log: Option<String>,
}
