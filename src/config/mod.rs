pub mod toml_config;

use crate::domain::ports::ServiceLocator;
use crate::utils::error::Result;
use crate::utils::validation::{validate_host, validate_range, validate_url, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::core::presenter::OutputFormat;
#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8000;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "order-lookup")]
#[command(about = "Fetch an order from the order service and print it")]
pub struct CliConfig {
    #[arg(long, help = "Order service host [default: localhost]")]
    pub host: Option<String>,

    #[arg(long, help = "Order service port [default: 8000]")]
    pub port: Option<u16>,

    #[arg(long, help = "Path to a TOML config file with a [service] table")]
    pub config: Option<String>,

    #[arg(long, help = "Order ID to fetch instead of prompting for one")]
    pub order_id: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Flags win over the config file, which wins over the defaults.
    pub fn service_config(&self) -> Result<ServiceConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config file: {}", path);
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };

        let service = ServiceConfig::resolve(self.host.clone(), self.port, file.as_ref());
        service.validate()?;
        Ok(service)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServiceConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn resolve(host: Option<String>, port: Option<u16>, file: Option<&TomlConfig>) -> Self {
        let file_service = file.map(|f| &f.service);

        let host = host
            .or_else(|| file_service.and_then(|s| s.host.clone()))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = port
            .or_else(|| file_service.and_then(|s| s.port))
            .unwrap_or(DEFAULT_PORT);

        Self { host, port }
    }
}

impl ServiceLocator for ServiceConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_host("service.host", &self.host)?;
        validate_range("service.port", self.port, 1, u16::MAX)?;
        validate_url("service", &self.base_url())
    }
}
