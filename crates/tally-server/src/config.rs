use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tally_ledger::GenesisConfig;

use crate::error::{ServerError, ServerResult};

/// Environment variable holding the listen address (a port or `host:port`).
pub const ADDR_ENV: &str = "ADDR";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub genesis: GenesisConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080),
            genesis: GenesisConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ServerError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> ServerResult<String> {
        toml::to_string_pretty(self).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Override the listen address with an `ADDR`-style value; `None` leaves it unchanged.
    pub fn apply_addr(&mut self, value: Option<&str>) -> ServerResult<()> {
        if let Some(value) = value {
            self.bind_addr = parse_bind_addr(value)?;
        }
        Ok(())
    }
}

/// Parse a listen address. A bare port binds to localhost.
pub fn parse_bind_addr(value: &str) -> ServerResult<SocketAddr> {
    let value = value.trim();
    if let Ok(addr) = value.parse::<SocketAddr>() {
        return Ok(addr);
    }
    value
        .parse::<u16>()
        .map(|port| SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), port))
        .map_err(|_| ServerError::Config(format!("invalid listen address: {value:?}")))
}
