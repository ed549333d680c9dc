//! Typed bindings for Truffle project configuration files.
//!
//! The configuration is declarative data consumed by an external build tool:
//! it names the chain endpoints to deploy against, the test reporter and its
//! options, the plugins to load, and the solc release (and optimizer
//! settings) to compile with. This crate owns the shape of that record,
//! loading it once at process start, and nothing else.
//!
//! ```no_run
//! use truffle_config::BuildConfig;
//!
//! let config = BuildConfig::read("truffle-config.json".as_ref())?;
//! if let Some(dev) = config.development() {
//!     println!("deploying via {}", dev.url());
//! }
//! # Ok::<_, truffle_config::ConfigError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod compilers;
mod config;
pub mod error;
mod mocha;
mod network;
pub mod serde_helpers;

pub use compilers::{CompilerConfig, EvmVersion, Optimizer, SolcConfig, SolcSettings};
pub use config::{BuildConfig, DEV_NETWORK};
pub use error::{ConfigError, ConfigIoError, Result};
pub use mocha::{MochaConfig, ReporterOptions};
pub use network::{NetworkConfig, NetworkId};
