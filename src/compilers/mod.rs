//! Per-language compiler configuration.

use serde::{Deserialize, Serialize};

pub mod solc;
pub use solc::{EvmVersion, Optimizer, SolcConfig, SolcSettings};

/// The `compilers` section, keyed by compiler name the way the config file
/// lays it out. Only solc is recognized.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerConfig {
    #[serde(default)]
    pub solc: SolcConfig,
}

impl From<SolcConfig> for CompilerConfig {
    fn from(solc: SolcConfig) -> Self {
        Self { solc }
    }
}
