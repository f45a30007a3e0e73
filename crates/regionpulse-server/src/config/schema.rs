use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;
use regionpulse_core::error::{Result, RegionPulseError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub dataset: DatasetSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            dataset: DatasetSection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(RegionPulseError::UnsupportedVersion);
        }
        self.server.validate()?;
        self.dataset.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            RegionPulseError::BadRequest(format!(
                "server.listen must be a socket address (got {:?}): {e}",
                self.listen
            ))
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetSection {
    /// Relative paths resolve against the config file's directory.
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

impl Default for DatasetSection {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

impl DatasetSection {
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(RegionPulseError::BadRequest(
                "dataset.path must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/telemetry.json")
}
