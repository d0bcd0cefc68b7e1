//! Network identifier: a decimal chain id or the `"*"` wildcard.
//!
//! Accepted in the file either as a string (`"*"`, `"4"`) or as a bare
//! integer (`5777`). Always written back as a string.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifier of the chain a network profile deploys to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkId {
    /// `"*"`, matches any network id.
    Any,
    /// A specific chain id.
    Id(u64),
}

impl NetworkId {
    /// Whether a node reporting `id` is acceptable for this profile.
    pub fn matches(&self, id: u64) -> bool {
        match self {
            NetworkId::Any => true,
            NetworkId::Id(expected) => *expected == id,
        }
    }
}

impl FromStr for NetworkId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "*" {
            return Ok(NetworkId::Any);
        }

        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("invalid network id: {:?}", s));
        }

        s.parse::<u64>()
            .map(NetworkId::Id)
            .map_err(|_| format!("network id out of range: {}", s))
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkId::Any => write!(f, "*"),
            NetworkId::Id(id) => write!(f, "{}", id),
        }
    }
}

impl Serialize for NetworkId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NetworkId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(id) => Ok(NetworkId::Id(id)),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}
