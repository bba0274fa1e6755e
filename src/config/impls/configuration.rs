use crate::config::enums::cluster_encoding::ClusterEncoding;
use crate::config::enums::cluster_mode::ClusterMode;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::cluster_config::ClusterConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::node_config::NodeConfig;
use crate::structs::Cli;
use reqwest::Url;
use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use std::time::Duration;

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self::init()
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self::init()
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::init()
    }
}

impl NodeConfig {
    pub fn init() -> NodeConfig {
        NodeConfig {
            bind_address: String::from("0.0.0.0:5000"),
            mirror: String::new(),
            upstream: String::new(),
            token: String::from("1234567890ABCDEFG"),
            keep_alive: 60,
            request_timeout: 15,
            disconnect_timeout: 15,
            max_connections: 25000,
            threads: available_parallelism().map(|n| n.get() as u64).unwrap_or(4),
        }
    }
}

impl ClusterConfig {
    pub fn init() -> ClusterConfig {
        ClusterConfig {
            control_path: String::from("/_ws/"),
            encoding: ClusterEncoding::json,
            reconnect_interval: 10,
            drain_grace_period: 500,
            drain_poll_interval: 100,
        }
    }

    pub fn reconnect_interval(&self) -> Duration {
        Duration::from_secs(self.reconnect_interval)
    }

    pub fn drain_grace_period(&self) -> Duration {
        Duration::from_millis(self.drain_grace_period)
    }

    pub fn drain_poll_interval(&self) -> Duration {
        Duration::from_millis(self.drain_poll_interval.max(1))
    }
}

impl CacheConfig {
    pub fn init() -> CacheConfig {
        CacheConfig {
            group: String::from("thumbnail"),
            cache_bytes: 512 << 20,
            peer_path: String::from("/_cache/"),
            origin_timeout: 30,
        }
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_file: String::from("-"),
            log_console_interval: 60,
            node: NodeConfig::init(),
            cluster: ClusterConfig::init(),
            cache: CacheConfig::init(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config)?;
        Self::save_file(path, config_toml)
    }

    /// Loads the file at `path`, falling back to defaults when it does not
    /// exist. With `create` set, a default file is written instead.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        match Configuration::load_file(path) {
            Ok(config) => Ok(config),
            Err(ConfigurationError::IOError(error)) if !create => {
                eprintln!("No config file found at {path} ({error}), using defaults.");
                eprintln!("You can create one by starting this app using '--create-config' as parameter.");
                Ok(Configuration::init())
            }
            Err(ConfigurationError::IOError(_)) => {
                eprintln!("Creating config file {path}..");
                let config = Configuration::init();
                Configuration::save_from_config(&config, path)?;
                Ok(config)
            }
            Err(error) => {
                eprintln!("Config file {path} is corrupt.");
                eprintln!("[ERROR] {error}");
                Err(error)
            }
        }
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(mirror) = &cli.mirror {
            self.node.mirror = mirror.clone();
        }
        if let Some(upstream) = &cli.upstream {
            self.node.upstream = upstream.clone();
        }
        if let Some(addr) = &cli.addr {
            self.node.bind_address = addr.clone();
        }
        if let Some(token) = &cli.token {
            self.node.token = token.clone();
        }
        if let Some(log) = &cli.log {
            self.log_file = log.clone();
        }
    }

    pub fn cluster_mode(&self) -> Result<ClusterMode, ConfigurationError> {
        match (self.node.mirror.is_empty(), self.node.upstream.is_empty()) {
            (false, false) => Err(ConfigurationError::ConflictingRoles),
            (true, true) => Err(ConfigurationError::MissingRole),
            (false, true) => Ok(ClusterMode::master),
            (true, false) => Ok(ClusterMode::slave),
        }
    }

    pub fn bind_address(&self) -> Result<SocketAddr, ConfigurationError> {
        let address = self.node.bind_address.as_str();
        // ":5000" means every interface
        let normalized = if address.starts_with(':') {
            format!("0.0.0.0{address}")
        } else {
            address.to_string()
        };
        normalized.parse::<SocketAddr>()
            .map_err(|_| ConfigurationError::InvalidBindAddress(address.to_string()))
    }

    pub fn log_level_filter(&self) -> Result<log::LevelFilter, ConfigurationError> {
        match self.log_level.as_str() {
            "off" => Ok(log::LevelFilter::Off),
            "trace" => Ok(log::LevelFilter::Trace),
            "debug" => Ok(log::LevelFilter::Debug),
            "info" => Ok(log::LevelFilter::Info),
            "warn" => Ok(log::LevelFilter::Warn),
            "error" => Ok(log::LevelFilter::Error),
            other => Err(ConfigurationError::InvalidLogLevel(other.to_string())),
        }
    }

    /// Checks everything a node needs before it may start and returns its role.
    pub fn validate(&self) -> Result<ClusterMode, ConfigurationError> {
        let mode = self.cluster_mode()?;
        match mode {
            ClusterMode::master => Self::validate_url("mirror", &self.node.mirror)?,
            ClusterMode::slave => Self::validate_url("upstream", &self.node.upstream)?,
        }
        self.bind_address()?;
        self.log_level_filter()?;
        Ok(mode)
    }

    pub fn validate_url(field: &'static str, value: &str) -> Result<(), ConfigurationError> {
        let invalid = || ConfigurationError::InvalidUrl { field, value: value.to_string() };
        let url = Url::parse(value).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(invalid());
        }
        Ok(())
    }
}
