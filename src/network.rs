use serde::{de, Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

/// Connection parameters for a chain endpoint a network environment points
/// at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub host: String,
    pub port: u16,
    pub network_id: NetworkId,
}

impl NetworkConfig {
    pub fn new(host: impl Into<String>, port: u16, network_id: NetworkId) -> Self {
        Self { host: host.into(), port, network_id }
    }

    /// The conventional local development endpoint: `127.0.0.1:8545`,
    /// accepting any chain id.
    pub fn development() -> Self {
        Self::new("127.0.0.1", 8545, NetworkId::Any)
    }

    /// Returns the http endpoint for this network.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::development()
    }
}

/// Chain identifier a network endpoint is expected to report.
///
/// The config file allows a bare integer, a free-form string, or the `"*"`
/// wildcard which accepts any chain. Integers are serialized as JSON numbers,
/// everything else as strings, so a loaded record writes back byte-for-byte
/// equivalent.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NetworkId {
    /// The `"*"` wildcard, matches any chain id.
    Any,
    Id(u64),
    Named(String),
}

impl NetworkId {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Returns true if this id accepts the given chain id.
    ///
    /// Named ids match if they are the decimal spelling of `chain_id`.
    pub fn matches(&self, chain_id: u64) -> bool {
        match self {
            Self::Any => true,
            Self::Id(id) => *id == chain_id,
            Self::Named(name) => name.parse::<u64>().map_or(false, |id| id == chain_id),
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::Id(id) => write!(f, "{id}"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

impl FromStr for NetworkId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "*" => Self::Any,
            s => match s.parse::<u64>() {
                Ok(id) if id > 0 => Self::Id(id),
                _ => Self::Named(s.to_string()),
            },
        })
    }
}

impl From<u64> for NetworkId {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl Serialize for NetworkId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Any => serializer.serialize_str("*"),
            Self::Id(id) => serializer.serialize_u64(*id),
            Self::Named(name) => serializer.serialize_str(name),
        }
    }
}

impl<'de> Deserialize<'de> for NetworkId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NetworkIdVisitor;

        impl de::Visitor<'_> for NetworkIdVisitor {
            type Value = NetworkId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a positive integer, a string, or the \"*\" wildcard")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                if v == 0 {
                    return Err(E::custom("network id must be a positive integer"));
                }
                Ok(NetworkId::Id(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u64::try_from(v)
                    .map_err(|_| E::custom("network id must be a positive integer"))
                    .and_then(|v| self.visit_u64(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                // String forms are kept verbatim so serialization round-trips.
                Ok(match v {
                    "*" => NetworkId::Any,
                    v => NetworkId::Named(v.to_string()),
                })
            }
        }

        deserializer.deserialize_any(NetworkIdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_parse_network_id_forms() {
        assert_eq!("*".parse::<NetworkId>().unwrap(), NetworkId::Any);
        assert_eq!("5777".parse::<NetworkId>().unwrap(), NetworkId::Id(5777));
        assert_eq!("goerli".parse::<NetworkId>().unwrap(), NetworkId::Named("goerli".to_string()));
    }

    #[test]
    fn network_id_serde_preserves_json_type() {
        let id: NetworkId = serde_json::from_str("1337").unwrap();
        assert_eq!(id, NetworkId::Id(1337));
        assert_eq!(serde_json::to_string(&id).unwrap(), "1337");

        let id: NetworkId = serde_json::from_str("\"*\"").unwrap();
        assert_eq!(id, NetworkId::Any);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"*\"");

        // numeric strings stay strings
        let id: NetworkId = serde_json::from_str("\"1337\"").unwrap();
        assert_eq!(id, NetworkId::Named("1337".to_string()));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1337\"");
    }

    #[test]
    fn rejects_non_positive_network_ids() {
        assert!(serde_json::from_str::<NetworkId>("0").is_err());
        assert!(serde_json::from_str::<NetworkId>("-5").is_err());
    }

    #[test]
    fn wildcard_matches_any_chain() {
        assert!(NetworkId::Any.matches(1));
        assert!(NetworkId::Any.matches(u64::MAX));
        assert!(NetworkId::Id(5777).matches(5777));
        assert!(!NetworkId::Id(5777).matches(1));
        assert!(NetworkId::Named("1337".to_string()).matches(1337));
        assert!(!NetworkId::Named("goerli".to_string()).matches(5));
    }

    #[test]
    fn development_endpoint() {
        let dev = NetworkConfig::development();
        assert_eq!(dev.url(), "http://127.0.0.1:8545");
        assert!(dev.network_id.is_wildcard());
    }
}
