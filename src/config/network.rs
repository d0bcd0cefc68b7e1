//! Network configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::NetworkId;

/// Settings for a single deployment target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NetworkConfig {
    /// Whether this network is visible to lookups (disabled = commented out).
    #[serde(default = "default_enabled", skip_serializing_if = "is_enabled")]
    pub enabled: bool,
    /// Node hostname for a direct connection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Node port for a direct connection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Chain id this profile deploys to, or "*".
    pub network_id: NetworkId,
    /// Remote RPC provider, used instead of host/port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderConfig>,
    /// Default sender address for transactions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

/// Provider-backed connection settings.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// RPC endpoint URL.
    pub url: String,
    /// Wallet seed phrase (loaded from {NETWORK}_MNEMONIC env var).
    #[serde(skip)]
    pub mnemonic: String,
}

// Keeps the seed phrase out of logs.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mnemonic = if self.mnemonic.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("ProviderConfig")
            .field("url", &self.url)
            .field("mnemonic", &mnemonic)
            .finish()
    }
}

/// How a network is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// Direct JSON-RPC connection to a node.
    Direct { host: &'a str, port: u16 },
    /// Connection through a provider URL.
    Provider(&'a ProviderConfig),
}

impl NetworkConfig {
    /// Network reached directly at `host:port`.
    pub fn direct(host: impl Into<String>, port: u16, network_id: NetworkId) -> Self {
        Self {
            enabled: true,
            host: Some(host.into()),
            port: Some(port),
            network_id,
            provider: None,
            from: None,
        }
    }

    /// Resolved connection endpoint; the provider wins over host/port.
    ///
    /// Returns `None` when neither is fully configured.
    pub fn endpoint(&self) -> Option<Endpoint<'_>> {
        if let Some(ref provider) = self.provider {
            return Some(Endpoint::Provider(provider));
        }

        match (self.host.as_deref(), self.port) {
            (Some(host), Some(port)) => Some(Endpoint::Direct { host, port }),
            _ => None,
        }
    }
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Direct { host, port } => write!(f, "http://{}:{}", host, port),
            Endpoint::Provider(provider) => write!(f, "{}", provider.url),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn is_enabled(enabled: &bool) -> bool {
    *enabled
}
