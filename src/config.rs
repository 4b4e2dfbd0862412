use anyhow::{Context, Result};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::logging::Profile;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub log_profile: Profile,
}

impl Config {
    /// Read PORT, HOST and LOG_FORMAT from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT").filter(|p| !p.is_empty()) {
            // ":8080" is accepted too
            Some(p) => p
                .trim_start_matches(':')
                .parse::<u16>()
                .with_context(|| format!("PORT must be a TCP port number, got {p:?}"))?,
            None => DEFAULT_PORT,
        };

        let host = match lookup("HOST").filter(|h| !h.is_empty()) {
            Some(h) => h
                .parse::<IpAddr>()
                .with_context(|| format!("HOST must be an IP address, got {h:?}"))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let log_profile = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => Profile::Production,
            _ => Profile::Development,
        };

        Ok(Self {
            addr: SocketAddr::new(host, port),
            log_profile,
        })
    }
}
