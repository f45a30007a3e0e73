//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use regionpulse_core::error::{Result, RegionPulseError};

pub use schema::{DatasetSection, ServerConfig, ServerSection};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "regionpulse.yaml";

/// A validated config plus the directory relative paths resolve against.
#[derive(Debug)]
pub struct LoadedConfig {
    pub cfg: ServerConfig,
    pub root: PathBuf,
}

impl LoadedConfig {
    /// Absolute (or root-relative) location of the telemetry file.
    pub fn dataset_path(&self) -> PathBuf {
        self.root.join(&self.cfg.dataset.path)
    }
}

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ServerConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        RegionPulseError::Internal(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| RegionPulseError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Directory holding the running binary.
pub fn install_root() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(Path::to_path_buf)
}

/// Resolve the config for this process against its installation root.
pub fn resolve(explicit: Option<&Path>) -> Result<LoadedConfig> {
    resolve_from(explicit, install_root().as_deref())
}

/// An explicit path must exist. Without one, `regionpulse.yaml` is looked up
/// in the working directory, then in `install_root`; if neither exists the
/// built-in defaults apply with `install_root` as root (working directory when
/// the root is unknown).
pub fn resolve_from(
    explicit: Option<&Path>,
    install_root: Option<&Path>,
) -> Result<LoadedConfig> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let found = std::iter::once(PathBuf::from(DEFAULT_CONFIG_FILE))
                .chain(install_root.map(|r| r.join(DEFAULT_CONFIG_FILE)))
                .find(|candidate| candidate.exists());
            match found {
                Some(p) => p,
                None => {
                    let root = install_root.map_or_else(|| PathBuf::from("."), Path::to_path_buf);
                    tracing::info!(root = %root.display(), "no config file, using defaults");
                    return Ok(LoadedConfig {
                        cfg: ServerConfig::default(),
                        root,
                    });
                }
            }
        }
    };

    let cfg = load_from_file(&path)?;
    let root = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    tracing::info!(path = %path.display(), root = %root.display(), "config loaded");
    Ok(LoadedConfig { cfg, root })
}
