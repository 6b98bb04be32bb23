use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const SETTINGS_PATH: &str = "./.launcher/configs/Client.toml";

/// Settings of the UI layer itself. Launcher and game options belong to the backend.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientSettings {
    pub log_dir: PathBuf,
    /// An `EnvFilter` directive, e.g. `info` or `launcher_ui=debug`.
    pub log_level: String,
    pub stdout_logs: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("./.launcher/logs"),
            log_level: "info".to_owned(),
            stdout_logs: true,
        }
    }
}

impl ClientSettings {
    pub async fn read(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        let body = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("cannot read {}", path.display()))?;
        let settings = toml::from_str(&body).with_context(|| format!("{} is not valid", path.display()))?;

        tracing::info!("Config {} has been read successfully", path.display());
        Ok(settings)
    }

    /// Reads the settings file at [`SETTINGS_PATH`].
    pub async fn load() -> Self {
        Self::read_or_default(SETTINGS_PATH).await
    }

    /// Reads `path`, falling back to the defaults when it is missing or broken.
    pub async fn read_or_default(path: impl AsRef<Path>) -> Self {
        Self::read(path).await.unwrap_or_else(|error| {
            tracing::debug!("Using default client settings: {error:#}");
            Self::default()
        })
    }

    pub async fn write(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }

        let body = toml::to_string_pretty(self)?;
        tokio::fs::write(path, body).await?;

        tracing::info!("Config {} has been written successfully", path.display());
        Ok(())
    }
}
