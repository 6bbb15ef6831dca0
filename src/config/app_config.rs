use std::time::Duration;

use serde::Deserialize;

use crate::domain::chain::{AddressingDiscipline, ChainSettings, InstanceId, DEFAULT_SEQUENCE};
use crate::infrastructure::observability::ObservabilityConfig;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub instance: InstanceConfig,
    #[serde(default)]
    pub chain: ChainConfig,
    #[serde(default)]
    pub simulators: SimulatorConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Identity of this instance and how peers are addressed
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InstanceConfig {
    pub id: InstanceId,
    pub name: String,
    /// Base URL peers are derived from, e.g. `http://instance`
    pub base_url: String,
    /// Port every peer listens on
    pub port: u16,
    /// Instance 0 resolves to the bare base URL
    pub zero_is_unsuffixed: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    pub discipline: AddressingDiscipline,
    pub hop_timeout_ms: u64,
    pub default_sequence: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Delay used when `/delay` gets no usable value
    pub default_delay_ms: u64,
    /// Upper bound for `/delay`
    pub max_delay_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            id: 0,
            name: "instance".to_string(),
            base_url: "http://localhost".to_string(),
            port: 3000,
            zero_is_unsuffixed: true,
        }
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            discipline: AddressingDiscipline::default(),
            hop_timeout_ms: 10_000,
            default_sequence: DEFAULT_SEQUENCE.to_string(),
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            default_delay_ms: 1000,
            max_delay_ms: 60_000,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Coordinator settings for this instance
    pub fn chain_settings(&self) -> ChainSettings {
        ChainSettings {
            instance_id: self.instance.id,
            discipline: self.chain.discipline,
            hop_timeout: Duration::from_millis(self.chain.hop_timeout_ms),
            default_sequence: self.chain.default_sequence.clone(),
        }
    }
}
