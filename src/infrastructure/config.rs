use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;
use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub simulation: SimulationSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimulationSettings {
    pub refresh_interval_secs: u64,
    /// Fixed seed for a reproducible session; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("simulation.refresh_interval_secs must be at least 1")]
    ZeroRefreshInterval,
    #[error("invalid server.bind_addr {addr:?}")]
    InvalidBindAddress {
        addr: String,
        #[source]
        source: AddrParseError,
    },
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.refresh_interval_secs == 0 {
            return Err(ConfigError::ZeroRefreshInterval);
        }
        self.bind_addr()?;
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .bind_addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddress {
                addr: self.server.bind_addr.clone(),
                source,
            })
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.simulation.refresh_interval_secs)
    }
}

/// Load `config/aqi.toml` (optional) overlaid with `AQI__SECTION__KEY` variables
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let builder = defaults()?
        .add_source(config::File::with_name("config/aqi").required(false))
        .add_source(
            config::Environment::with_prefix("AQI")
                .separator("__")
                .try_parsing(true),
        );

    from_builder(builder)
}

fn defaults() -> anyhow::Result<ConfigBuilder<DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.bind_addr", "0.0.0.0:8080")?
        .set_default("simulation.refresh_interval_secs", 30_i64)?)
}

fn from_builder(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<AppConfig> {
    let settings: AppConfig = builder.build()?.try_deserialize()?;
    settings.validate()?;
    Ok(settings)
}
