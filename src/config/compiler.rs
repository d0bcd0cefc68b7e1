//! Compiler configuration.

use semver::Version;
use serde::{Deserialize, Serialize};

/// Settings selecting and configuring one compiler.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CompilerConfig {
    /// Exact compiler version to fetch.
    pub version: Version,
    /// Use a locally installed docker image instead of downloading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker: Option<bool>,
    /// Optimizer and target settings passed through to the compiler.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<CompilerSettings>,
}

/// Compiler settings block.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimizer: Option<OptimizerConfig>,
    /// Target EVM hardfork name (e.g., "byzantium"), passed through as is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evm_version: Option<String>,
}

/// Bytecode optimizer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct OptimizerConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Expected number of contract runs the optimizer tunes for.
    #[serde(default = "default_runs")]
    pub runs: u32,
}

impl CompilerConfig {
    /// Compiler pinned to `version` with no extra settings.
    pub fn new(version: Version) -> Self {
        Self {
            version,
            docker: None,
            settings: None,
        }
    }

    /// Whether the docker toolchain is requested (absent means false).
    pub fn uses_docker(&self) -> bool {
        self.docker.unwrap_or(false)
    }

    /// Optimizer runs, only when the optimizer is enabled.
    pub fn optimizer_runs(&self) -> Option<u32> {
        self.settings
            .as_ref()
            .and_then(|s| s.optimizer)
            .filter(|o| o.enabled)
            .map(|o| o.runs)
    }
}

fn default_runs() -> u32 {
    200
}
