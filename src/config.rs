use crate::{
    compilers::CompilerConfig,
    error::{ConfigError, Result},
    mocha::MochaConfig,
    network::NetworkConfig,
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, io::Write, path::Path};
use tracing::{instrument, trace};

/// Name of the network environment local development tooling targets by
/// convention.
pub const DEV_NETWORK: &str = "development";

/// The project configuration record.
///
/// This is pure data: it is read once at process start and handed to the
/// build tool's subsystems, network parameters to the deployment client,
/// mocha options to the test runner, plugin identifiers to the plugin
/// loader, and compiler settings to the solc invocation. Nothing here is
/// mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Network environments by name, e.g. `"development"`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub networks: BTreeMap<String, NetworkConfig>,
    /// Test runner configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mocha: Option<MochaConfig>,
    /// Plugin identifiers, loaded in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,
    #[serde(default)]
    pub compilers: CompilerConfig,
}

impl BuildConfig {
    /// Reads and validates the configuration from a JSON file.
    #[instrument(level = "debug", skip_all, err)]
    pub fn read(path: &Path) -> Result<Self> {
        trace!(file = %path.display());
        let content = fs::read_to_string(path).map_err(|err| ConfigError::io(err, path))?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to the given file as pretty-printed
    /// JSON.
    #[instrument(level = "debug", skip_all, err)]
    pub fn write(&self, path: &Path) -> Result<()> {
        trace!(file = %path.display());
        let file = fs::File::create(path).map_err(|err| ConfigError::io(err, path))?;
        let mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush().map_err(|err| ConfigError::io(err, path))
    }

    /// Checks the shape constraints the types alone cannot express.
    pub fn validate(&self) -> Result<()> {
        for (name, network) in &self.networks {
            if network.host.is_empty() {
                return Err(ConfigError::EmptyHost(name.clone()));
            }
            if network.port == 0 {
                return Err(ConfigError::InvalidPort(name.clone()));
            }
        }
        if let Some(idx) = self.plugins.iter().position(|plugin| plugin.is_empty()) {
            return Err(ConfigError::EmptyPlugin(idx));
        }
        Ok(())
    }

    /// Returns this config with compiler settings the pinned release cannot
    /// accept removed.
    pub fn sanitized(mut self) -> Self {
        self.compilers.solc = self.compilers.solc.sanitized();
        self
    }

    /// The network environment with the given name.
    pub fn network(&self, name: &str) -> Option<&NetworkConfig> {
        self.networks.get(name)
    }

    /// The conventional `"development"` network environment.
    pub fn development(&self) -> Option<&NetworkConfig> {
        self.network(DEV_NETWORK)
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            networks: BTreeMap::from([(DEV_NETWORK.to_string(), NetworkConfig::development())]),
            mocha: None,
            plugins: Vec::new(),
            compilers: Default::default(),
        }
    }
}
