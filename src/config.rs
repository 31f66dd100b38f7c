use std::net::SocketAddr;

use tracing::warn;

const DEFAULT_EVENT_CAPACITY: usize = 1000;

/// Runtime configuration for the relay, read from the environment
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub bind_addr: SocketAddr,
    /// When disabled the relay keeps no presence table and rejects
    /// `getMembersEvent` / `idleEvent`
    pub track_presence: bool,
    /// Capacity of the internal event bus
    pub event_capacity: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            track_presence: true,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl RelayConfig {
    /// Reads `CHAT_RELAY_BIND_ADDR`, `CHAT_RELAY_TRACK_PRESENCE` and
    /// `CHAT_RELAY_EVENT_CAPACITY`, falling back to defaults for anything
    /// missing or unparseable
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bind_addr = match lookup("CHAT_RELAY_BIND_ADDR") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "Invalid CHAT_RELAY_BIND_ADDR, using default");
                default_bind_addr()
            }),
            None => default_bind_addr(),
        };

        let track_presence = match lookup("CHAT_RELAY_TRACK_PRESENCE") {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "Invalid CHAT_RELAY_TRACK_PRESENCE, using default");
                true
            }),
            None => true,
        };

        let event_capacity = lookup("CHAT_RELAY_EVENT_CAPACITY")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|capacity| *capacity > 0)
            .unwrap_or(DEFAULT_EVENT_CAPACITY);

        Self {
            bind_addr,
            track_presence,
            event_capacity,
        }
    }

    pub fn with_track_presence(mut self, track_presence: bool) -> Self {
        self.track_presence = track_presence;
        self
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3000))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
