use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use pawsafety_email_lettre::EmailSettings;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_EMAIL_HOST: &str = "smtp.gmail.com";

const REQUIRED_VARS: [&str; 3] = ["EMAIL_USER", "EMAIL_PASS", "RECEIVE_EMAIL"];

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub email: EmailSettings,
    pub listen_addr: SocketAddr,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("PORT must be a valid port number, got '{0}'")]
    InvalidPort(String),
    #[error("BIND_ADDRESS must be an IP address, got '{0}'")]
    InvalidBindAddress(String),
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let missing: Vec<&'static str> = REQUIRED_VARS
            .into_iter()
            .filter(|key| get(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let port = match get("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?,
            None => DEFAULT_PORT,
        };
        let ip = match get("BIND_ADDRESS") {
            Some(addr) => addr
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidBindAddress(addr.clone()))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        Ok(Self {
            email: EmailSettings {
                host: get("EMAIL_HOST").unwrap_or_else(|| DEFAULT_EMAIL_HOST.to_string()),
                user: get("EMAIL_USER").unwrap_or_default(),
                password: get("EMAIL_PASS").unwrap_or_default(),
                recipient: get("RECEIVE_EMAIL").unwrap_or_default(),
            },
            listen_addr: SocketAddr::new(ip, port),
        })
    }
}
