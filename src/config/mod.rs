//! Configuration loading and lookup for the contract toolchain.
//!
//! Uses serde_yaml (or serde_json for `.json` files) to load the document,
//! with provider mnemonics taken from environment variables so they never
//! live in the file.

mod compiler;
mod error;
mod format;
mod network;
mod network_id;

pub use compiler::CompilerConfig;
pub use error::ConfigError;
pub use format::Format;
pub use network::{Endpoint, NetworkConfig};
pub use network_id::NetworkId;

use semver::Version;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, env, fs, path::Path};
use tracing::{debug, warn};

/// Root configuration document.
///
/// Both sections map a unique name to its profile. Unknown keys anywhere
/// in the file are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Deployment targets keyed by network name (e.g., "development").
    #[serde(default)]
    networks: BTreeMap<String, NetworkConfig>,
    /// Compiler selections keyed by compiler name (e.g., "solc").
    #[serde(default)]
    compilers: BTreeMap<String, CompilerConfig>,
}

impl Config {
    /// Built-in document: a local development node and solc 0.8.0.
    pub fn development() -> Self {
        let mut networks = BTreeMap::new();
        networks.insert(
            "development".to_string(),
            NetworkConfig::direct("localhost", 7545, NetworkId::Any),
        );

        let mut compilers = BTreeMap::new();
        compilers.insert(
            "solc".to_string(),
            CompilerConfig::new(Version::new(0, 8, 0)),
        );

        Self {
            networks,
            compilers,
        }
    }

    /// Load configuration from a YAML or JSON file at the given path.
    ///
    /// First loads environment variables from `.env` file (if exists),
    /// then parses the document and reads `{NETWORK}_MNEMONIC` for every
    /// enabled provider-backed network.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore error if not found)
        dotenvy::dotenv().ok();

        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let content = fs::read_to_string(path)?;
        let mut config = Self::parse(&content, format)?;

        config.load_secrets_from_env();
        let config = config.validated()?;

        debug!(
            path = %path.display(),
            %format,
            networks = config.networks.len(),
            compilers = config.compilers.len(),
            "Config loaded"
        );

        Ok(config)
    }

    /// Parse a document without touching the filesystem or environment.
    ///
    /// Only the shape is checked here; call [`Config::validated`] before
    /// trusting ports and endpoints.
    pub fn parse(content: &str, format: Format) -> Result<Self, ConfigError> {
        let config = match format {
            Format::Yaml => serde_yaml::from_str(content)?,
            Format::Json => serde_json::from_str(content)?,
        };
        Ok(config)
    }

    /// Run the semantic checks, handing the document back on success.
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }

    /// Serialize the document. Secrets are never written.
    pub fn to_string_as(&self, format: Format) -> Result<String, ConfigError> {
        let out = match format {
            Format::Yaml => serde_yaml::to_string(self)?,
            Format::Json => serde_json::to_string_pretty(self)?,
        };
        Ok(out)
    }

    /// Look up an enabled network by name.
    pub fn get_network(&self, name: &str) -> Result<&NetworkConfig, ConfigError> {
        self.networks
            .get(name)
            .filter(|network| network.enabled)
            .ok_or_else(|| ConfigError::NotFound {
                section: "network",
                name: name.to_string(),
            })
    }

    /// Look up a compiler by name.
    pub fn get_compiler(&self, name: &str) -> Result<&CompilerConfig, ConfigError> {
        self.compilers
            .get(name)
            .ok_or_else(|| ConfigError::NotFound {
                section: "compiler",
                name: name.to_string(),
            })
    }

    /// Enabled networks in name order.
    pub fn networks(&self) -> impl Iterator<Item = (&str, &NetworkConfig)> {
        self.networks
            .iter()
            .filter(|(_, network)| network.enabled)
            .map(|(name, network)| (name.as_str(), network))
    }

    /// Compilers in name order.
    pub fn compilers(&self) -> impl Iterator<Item = (&str, &CompilerConfig)> {
        self.compilers
            .iter()
            .map(|(name, compiler)| (name.as_str(), compiler))
    }

    /// Load provider mnemonics from environment variables.
    fn load_secrets_from_env(&mut self) {
        for (name, network) in self.networks.iter_mut() {
            if !network.enabled {
                continue;
            }

            if let Some(ref mut provider) = network.provider {
                let var = mnemonic_env_var(name);
                match env::var(&var) {
                    Ok(mnemonic) => provider.mnemonic = mnemonic,
                    Err(_) => warn!(network = %name, var = %var, "Provider mnemonic not set"),
                }
            }
        }
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.networks.is_empty() {
            return Err(ConfigError::Validation(
                "at least one network is required".into(),
            ));
        }

        if self.compilers.is_empty() {
            return Err(ConfigError::Validation(
                "at least one compiler is required".into(),
            ));
        }

        let mut enabled_networks = 0;
        for (name, network) in &self.networks {
            if !network.enabled {
                continue;
            }
            enabled_networks += 1;

            if let Some(ref host) = network.host {
                if host.trim().is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "network {}: host must not be empty",
                        name
                    )));
                }
            }

            if network.port == Some(0) {
                return Err(ConfigError::Validation(format!(
                    "network {}: port must be positive",
                    name
                )));
            }

            if let Some(ref provider) = network.provider {
                const SCHEMES: [&str; 4] = ["http://", "https://", "ws://", "wss://"];
                if !SCHEMES.iter().any(|s| provider.url.starts_with(s)) {
                    return Err(ConfigError::Validation(format!(
                        "network {}: provider url must be http(s) or ws(s): {}",
                        name, provider.url
                    )));
                }
            } else if network.endpoint().is_none() {
                return Err(ConfigError::Validation(format!(
                    "network {}: either provider or both host and port are required",
                    name
                )));
            }
        }

        if enabled_networks == 0 {
            return Err(ConfigError::Validation(
                "at least one network must be enabled".into(),
            ));
        }

        for (name, compiler) in &self.compilers {
            if let Some(optimizer) = compiler.settings.as_ref().and_then(|s| s.optimizer) {
                if optimizer.enabled && optimizer.runs == 0 {
                    return Err(ConfigError::Validation(format!(
                        "compiler {}: optimizer runs must be positive",
                        name
                    )));
                }
            }
        }

        Ok(())
    }
}

fn mnemonic_env_var(network: &str) -> String {
    format!("{}_MNEMONIC", network.to_uppercase().replace('-', "_"))
}
