use std::env;
use std::net::SocketAddr;
use thiserror::Error;

/// Environment variable containing the wallbox IP address
pub const ENV_TESLA_WALLBOX_IP: &str = "TESLA_WALLBOX_IP";
/// Enables debug output when set to `true`
pub const ENV_DEBUG: &str = "DEBUG";
/// Keeps power meter stats when the wallbox becomes unreachable
pub const ENV_KEEP_POWER_METER: &str = "KEEP_POWER_METER";

pub const LISTEN_ADDRESS: SocketAddr =
    SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED), 8420);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Env variable {0} not found")]
    MissingVariable(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExporterConfig {
    pub wallbox_address: String,
    pub debug: bool,
    pub keep_power_meter: bool,
}

impl ExporterConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, only the wallbox address is mandatory
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let wallbox_address = lookup(ENV_TESLA_WALLBOX_IP)
            .ok_or(ConfigError::MissingVariable(ENV_TESLA_WALLBOX_IP))?;

        Ok(Self {
            wallbox_address,
            debug: is_enabled(lookup(ENV_DEBUG)),
            keep_power_meter: is_enabled(lookup(ENV_KEEP_POWER_METER)),
        })
    }
}

/// Flags are switched on only by the exact value `true`
fn is_enabled(val: Option<String>) -> bool {
    val.as_deref() == Some("true")
}
