use std::{
    env,
    net::{AddrParseError, SocketAddr},
};

use status_sim::SimConfig;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

const ENV_ADDR_KEY: &str = "DASHBOARD_ADDR";
const ENV_METRICS_INTERVAL_KEY: &str = "DASHBOARD_METRICS_INTERVAL_MS";
const ENV_COUNTDOWN_CEILING_KEY: &str = "DASHBOARD_COUNTDOWN_CEILING_SECS";
const ENV_SEED_KEY: &str = "DASHBOARD_SIM_SEED";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub sim: SimConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DASHBOARD_ADDR is not a valid socket address: {0}")]
    InvalidListenAddr(#[source] AddrParseError),
    #[error("DASHBOARD_METRICS_INTERVAL_MS must be a whole number of milliseconds greater than 0")]
    InvalidMetricsInterval,
    #[error("DASHBOARD_COUNTDOWN_CEILING_SECS must be a whole number of seconds greater than 0")]
    InvalidCountdownCeiling,
    #[error("DASHBOARD_SIM_SEED must be an unsigned 64-bit integer")]
    InvalidSimSeed,
    #[error("{0} contains non-unicode data")]
    NonUnicode(&'static str),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = match read_env(ENV_ADDR_KEY)? {
            Some(value) => value.parse().map_err(ConfigError::InvalidListenAddr)?,
            None => DEFAULT_LISTEN_ADDR
                .parse()
                .expect("default listen address must be valid"),
        };

        let defaults = SimConfig::default();

        let metrics_interval_ms = match read_env(ENV_METRICS_INTERVAL_KEY)? {
            Some(value) => parse_positive::<u64>(&value).ok_or(ConfigError::InvalidMetricsInterval)?,
            None => defaults.metrics_interval_ms,
        };

        let countdown_ceiling_secs = match read_env(ENV_COUNTDOWN_CEILING_KEY)? {
            Some(value) => {
                parse_positive::<u32>(&value).ok_or(ConfigError::InvalidCountdownCeiling)?
            }
            None => defaults.countdown_ceiling_secs,
        };

        let seed = match read_env(ENV_SEED_KEY)? {
            Some(value) => Some(
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSimSeed)?,
            ),
            None => None,
        };

        Ok(Self {
            listen_addr,
            sim: SimConfig {
                metrics_interval_ms,
                countdown_ceiling_secs,
                seed,
                ..defaults
            },
        })
    }
}

fn read_env(key: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NonUnicode(key)),
    }
}

fn parse_positive<T>(value: &str) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    value
        .trim()
        .parse::<T>()
        .ok()
        .filter(|parsed| *parsed > T::default())
}
