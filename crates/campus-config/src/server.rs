use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::env::{ConfigError, lookup, parsed_or};

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(lookup("HOST"), lookup("PORT"))
    }

    pub fn from_values(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            host: parsed_or("HOST", host, defaults.host)?,
            port: parsed_or("PORT", port, defaults.port)?,
        })
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
