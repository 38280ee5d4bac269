//! Process configuration read from the environment.

use std::net::SocketAddr;
use std::time::Duration;

pub const BIND_ADDR_VAR: &str = "STOCKLIST_BIND_ADDR";
pub const FLASH_TTL_VAR: &str = "STOCKLIST_FLASH_TTL_SECS";
pub const SEED_DEMO_DATA_VAR: &str = "STOCKLIST_SEED_DEMO_DATA";

const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 8080);
const DEFAULT_FLASH_TTL_SECS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub flash_ttl: Duration,
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(DEFAULT_BIND_ADDR),
            flash_ttl: Duration::from_secs(DEFAULT_FLASH_TTL_SECS),
            seed_demo_data: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unparseable values keep the
    /// default and log a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(BIND_ADDR_VAR) {
            match raw.trim().parse::<SocketAddr>() {
                Ok(addr) => config.bind_addr = addr,
                Err(e) => tracing::warn!(var = BIND_ADDR_VAR, value = %raw, error = %e, "ignoring invalid value"),
            }
        }

        if let Some(raw) = lookup(FLASH_TTL_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.flash_ttl = Duration::from_secs(secs),
                _ => tracing::warn!(var = FLASH_TTL_VAR, value = %raw, "ignoring invalid value"),
            }
        }

        if let Some(raw) = lookup(SEED_DEMO_DATA_VAR) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.seed_demo_data = true,
                "0" | "false" | "no" | "off" => config.seed_demo_data = false,
                _ => tracing::warn!(var = SEED_DEMO_DATA_VAR, value = %raw, "ignoring invalid value"),
            }
        }

        config
    }
}
