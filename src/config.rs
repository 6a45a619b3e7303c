//! Server configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Every key has a default, so an empty
//! environment starts a fully working demo.

use std::net::SocketAddr;
use std::time::Duration;

use crate::service::ActionLatency;

/// Top-level server configuration.
///
/// Loaded once at startup via [`MarketConfig::from_env`].
#[derive(Debug, Clone)]
pub struct MarketConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Period of the price perturbation tick.
    pub tick_interval: Duration,

    /// Whether to spawn the ticker at all.
    pub ticker_enabled: bool,

    /// Seed of the ticker's random source; random when unset.
    pub rng_seed: Option<u64>,

    /// Simulated settlement delay of a room join.
    pub join_latency: Duration,

    /// Simulated settlement delay of an investment.
    pub invest_latency: Duration,

    /// Simulated settlement delay of a room creation.
    pub create_room_latency: Duration,

    /// Simulated delay of a portfolio refresh.
    pub refresh_latency: Duration,

    /// Capacity of the EventBus broadcast channel.
    pub event_bus_capacity: usize,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            tick_interval: Duration::from_millis(5_000),
            ticker_enabled: true,
            rng_seed: None,
            join_latency: Duration::from_millis(1_000),
            invest_latency: Duration::from_millis(2_000),
            create_room_latency: Duration::from_millis(2_000),
            refresh_latency: Duration::from_millis(2_000),
            event_bus_capacity: 10_000,
        }
    }
}

impl MarketConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to the [`Default`] values when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr: SocketAddr = match std::env::var("LISTEN_ADDR") {
            Ok(addr) => addr.parse()?,
            Err(_) => defaults.listen_addr,
        };

        Ok(Self {
            listen_addr,
            tick_interval: parse_env_millis("TICK_INTERVAL_MS", defaults.tick_interval),
            ticker_enabled: parse_env_bool("TICKER_ENABLED", defaults.ticker_enabled),
            rng_seed: std::env::var("RNG_SEED").ok().and_then(|v| v.parse().ok()),
            join_latency: parse_env_millis("JOIN_LATENCY_MS", defaults.join_latency),
            invest_latency: parse_env_millis("INVEST_LATENCY_MS", defaults.invest_latency),
            create_room_latency: parse_env_millis(
                "CREATE_ROOM_LATENCY_MS",
                defaults.create_room_latency,
            ),
            refresh_latency: parse_env_millis("REFRESH_LATENCY_MS", defaults.refresh_latency),
            event_bus_capacity: parse_env("EVENT_BUS_CAPACITY", defaults.event_bus_capacity),
        })
    }

    /// Settlement delays for the simulated room backend.
    #[must_use]
    pub const fn action_latency(&self) -> ActionLatency {
        ActionLatency {
            join: self.join_latency,
            invest: self.invest_latency,
            create: self.create_room_latency,
        }
    }

    /// Returns a copy with every simulated delay set to zero. Used by
    /// integration tests that do not pause time.
    #[must_use]
    pub fn without_latency(self) -> Self {
        Self {
            join_latency: Duration::ZERO,
            invest_latency: Duration::ZERO,
            create_room_latency: Duration::ZERO,
            refresh_latency: Duration::ZERO,
            ..self
        }
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses an environment variable as a whole number of milliseconds.
fn parse_env_millis(key: &str, default: Duration) -> Duration {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .map_or(default, Duration::from_millis)
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key).ok().as_deref().map(str::to_ascii_lowercase) {
        Some(v) if v == "true" || v == "1" => true,
        Some(v) if v == "false" || v == "0" => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_demo_timings() {
        let config = MarketConfig::default();
        assert_eq!(config.tick_interval, Duration::from_secs(5));
        assert_eq!(config.action_latency(), ActionLatency::default());
        assert_eq!(config.refresh_latency, Duration::from_secs(2));
        assert!(config.ticker_enabled);
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn without_latency_zeroes_every_delay() {
        let config = MarketConfig::default().without_latency();
        let latency = config.action_latency();
        assert_eq!(latency.join, Duration::ZERO);
        assert_eq!(latency.invest, Duration::ZERO);
        assert_eq!(latency.create, Duration::ZERO);
        assert_eq!(config.refresh_latency, Duration::ZERO);
        assert_eq!(config.tick_interval, Duration::from_secs(5));
    }

    #[test]
    fn unset_keys_fall_back() {
        assert_eq!(parse_env("QX_TEST_UNSET_NUMBER", 7u32), 7);
        assert!(parse_env_bool("QX_TEST_UNSET_FLAG", true));
        assert_eq!(
            parse_env_millis("QX_TEST_UNSET_MILLIS", Duration::from_millis(3)),
            Duration::from_millis(3)
        );
    }
}
