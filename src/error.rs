use std::{
    io,
    path::{Path, PathBuf},
};

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

/// Various error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] ConfigIoError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("network {0:?} declares port 0, expected a port in 1..=65535")]
    InvalidPort(String),
    #[error("network {0:?} declares an empty host")]
    EmptyHost(String),
    #[error("plugin identifier at index {0} is empty")]
    EmptyPlugin(usize),
    #[error("{0}")]
    Message(String),
}

impl ConfigError {
    pub fn io(err: io::Error, path: impl Into<PathBuf>) -> Self {
        ConfigIoError::new(err, path).into()
    }

    pub fn msg(msg: impl std::fmt::Display) -> Self {
        ConfigError::Message(msg.to_string())
    }
}

/// An io error paired with the path that triggered it.
#[derive(Debug, thiserror::Error)]
#[error("\"{}\": {io}", self.path.display())]
pub struct ConfigIoError {
    io: io::Error,
    path: PathBuf,
}

impl ConfigIoError {
    pub fn new(io: io::Error, path: impl Into<PathBuf>) -> Self {
        Self { io, path: path.into() }
    }

    /// The path that failed.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl From<ConfigIoError> for io::Error {
    fn from(err: ConfigIoError) -> Self {
        err.io
    }
}
