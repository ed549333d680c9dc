use crate::serde_helpers;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tracing::trace;

/// The solc release shipped when no version is pinned explicitly.
pub const DEFAULT_SOLC_VERSION: Version = Version::new(0, 8, 12);

// Earliest solc releases accepting each `evmVersion` value. The setting
// itself exists since 0.4.21.
const BYZANTIUM_SOLC: Version = Version::new(0, 4, 21);
const CONSTANTINOPLE_SOLC: Version = Version::new(0, 4, 22);
const PETERSBURG_SOLC: Version = Version::new(0, 5, 5);
const ISTANBUL_SOLC: Version = Version::new(0, 5, 14);
const BERLIN_SOLC: Version = Version::new(0, 8, 5);
const LONDON_SOLC: Version = Version::new(0, 8, 7);
const PARIS_SOLC: Version = Version::new(0, 8, 18);
const SHANGHAI_SOLC: Version = Version::new(0, 8, 20);
const CANCUN_SOLC: Version = Version::new(0, 8, 24);

/// The `compilers.solc` section: the exact compiler release to pin and the
/// settings forwarded to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolcConfig {
    /// Exact release to compile with. This is a pin, not a range.
    pub version: Version,
    #[serde(default)]
    pub settings: SolcSettings,
}

impl SolcConfig {
    pub fn new(version: Version) -> Self {
        Self { version, settings: Default::default() }
    }

    /// Removes settings the pinned release cannot accept, currently an
    /// `evm_version` newer than the release knows about.
    pub fn sanitized(mut self) -> Self {
        if let Some(evm_version) = self.settings.evm_version {
            if !evm_version.supported_by(&self.version) {
                trace!("removing evm version {evm_version} not supported by solc {}", self.version);
                self.settings.evm_version = None;
            }
        }
        self
    }
}

impl Default for SolcConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SOLC_VERSION)
    }
}

/// Settings forwarded to the solc invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolcSettings {
    #[serde(default)]
    pub optimizer: Optimizer,
    #[serde(
        default,
        with = "serde_helpers::display_from_str_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub evm_version: Option<EvmVersion>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Optimizer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Number of times the deployed code is expected to run, trading deploy
    /// cost against runtime gas. Ignored by the compiler unless `enabled`,
    /// but retained either way.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runs: Option<usize>,
}

impl Optimizer {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    pub fn enable(&mut self) {
        self.enabled = Some(true)
    }

    pub fn disable(&mut self) {
        self.enabled = Some(false)
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self { enabled: Some(false), runs: Some(200) }
    }
}

/// EVM fork the compiler targets, in solc's spelling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EvmVersion {
    Homestead,
    TangerineWhistle,
    SpuriousDragon,
    Byzantium,
    Constantinople,
    Petersburg,
    Istanbul,
    Berlin,
    #[default]
    London,
    Paris,
    Shanghai,
    Cancun,
}

impl EvmVersion {
    /// Whether the given solc release accepts this fork as an `evmVersion`
    /// setting.
    pub fn supported_by(&self, version: &Version) -> bool {
        let min = match self {
            Self::Homestead | Self::TangerineWhistle | Self::SpuriousDragon | Self::Byzantium => {
                BYZANTIUM_SOLC
            }
            Self::Constantinople => CONSTANTINOPLE_SOLC,
            Self::Petersburg => PETERSBURG_SOLC,
            Self::Istanbul => ISTANBUL_SOLC,
            Self::Berlin => BERLIN_SOLC,
            Self::London => LONDON_SOLC,
            Self::Paris => PARIS_SOLC,
            Self::Shanghai => SHANGHAI_SOLC,
            Self::Cancun => CANCUN_SOLC,
        };
        *version >= min
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Homestead => "homestead",
            Self::TangerineWhistle => "tangerineWhistle",
            Self::SpuriousDragon => "spuriousDragon",
            Self::Byzantium => "byzantium",
            Self::Constantinople => "constantinople",
            Self::Petersburg => "petersburg",
            Self::Istanbul => "istanbul",
            Self::Berlin => "berlin",
            Self::London => "london",
            Self::Paris => "paris",
            Self::Shanghai => "shanghai",
            Self::Cancun => "cancun",
        }
    }
}

impl fmt::Display for EvmVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvmVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "homestead" => Ok(Self::Homestead),
            "tangerineWhistle" => Ok(Self::TangerineWhistle),
            "spuriousDragon" => Ok(Self::SpuriousDragon),
            "byzantium" => Ok(Self::Byzantium),
            "constantinople" => Ok(Self::Constantinople),
            "petersburg" => Ok(Self::Petersburg),
            "istanbul" => Ok(Self::Istanbul),
            "berlin" => Ok(Self::Berlin),
            "london" => Ok(Self::London),
            "paris" => Ok(Self::Paris),
            "shanghai" => Ok(Self::Shanghai),
            "cancun" => Ok(Self::Cancun),
            s => Err(format!("Unknown evm version: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optimizer_defaults() {
        let optimizer = Optimizer::default();
        assert!(!optimizer.is_enabled());
        assert_eq!(optimizer.runs, Some(200));
    }

    #[test]
    fn optimizer_runs_parse_while_disabled() {
        let optimizer: Optimizer =
            serde_json::from_str(r#"{"enabled": false, "runs": 999}"#).unwrap();
        assert!(!optimizer.is_enabled());
        assert_eq!(optimizer.runs, Some(999));
    }

    #[test]
    fn version_is_an_exact_pin() {
        let solc: SolcConfig = serde_json::from_str(r#"{"version": "0.8.12"}"#).unwrap();
        assert_eq!(solc.version, Version::new(0, 8, 12));
        assert!(serde_json::from_str::<SolcConfig>(r#"{"version": "^0.8.12"}"#).is_err());
    }

    #[test]
    fn evm_version_serde_spelling() {
        let settings: SolcSettings =
            serde_json::from_str(r#"{"evmVersion": "tangerineWhistle"}"#).unwrap();
        assert_eq!(settings.evm_version, Some(EvmVersion::TangerineWhistle));
        assert_eq!(
            serde_json::to_value(&settings).unwrap()["evmVersion"],
            "tangerineWhistle"
        );
        assert!(serde_json::from_str::<SolcSettings>(r#"{"evmVersion": "munich"}"#).is_err());
    }

    #[test]
    fn sanitized_removes_unsupported_evm_version() {
        let mut solc = SolcConfig::new(Version::new(0, 8, 12));
        solc.settings.evm_version = Some(EvmVersion::Cancun);
        assert_eq!(solc.sanitized().settings.evm_version, None);

        let mut solc = SolcConfig::new(Version::new(0, 8, 12));
        solc.settings.evm_version = Some(EvmVersion::London);
        assert_eq!(solc.sanitized().settings.evm_version, Some(EvmVersion::London));
    }
}
