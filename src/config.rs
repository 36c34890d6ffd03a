//! Site configuration: an optional TOML file plus command line overrides.

use std::{
    io,
    path::{Path, PathBuf},
};

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, level_filters::LevelFilter};

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "nautilus.toml";

#[derive(Debug, Parser)]
#[command(name = "nautilus", version, about = "Nautilus PvP site and store")]
pub struct Cli {
    /// Configuration file. Must exist when given explicitly.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to open at startup, e.g. `/magaza`.
    #[arg(short, long, value_name = "PATH")]
    pub path: Option<String>,

    /// Log level used when `RUST_LOG` is not set.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid configuration in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Nautilus PvP".to_owned(),
            width: 1280.0,
            height: 860.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Copied to the clipboard by the join buttons.
    pub server_address: String,
    pub discord_url: String,
    pub minecraft_version: String,
    pub start_path: String,
    pub log_level: String,
    pub window: WindowSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            server_address: "play.atomland.xyz".to_owned(),
            discord_url: "https://discord.gg/nautilus".to_owned(),
            minecraft_version: "1.20.4".to_owned(),
            start_path: "/".to_owned(),
            log_level: "info".to_owned(),
            window: WindowSettings::default(),
        }
    }
}

impl SiteConfig {
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::load_with_default(cli, Path::new(DEFAULT_CONFIG_FILE))
    }

    fn load_with_default(cli: &Cli, default_file: &Path) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None if default_file.exists() => Self::from_file(default_file)?,
            None => Self::default(),
        };

        if let Some(path) = &cli.path {
            config.start_path = path.clone();
        }
        if let Some(level) = &cli.log_level {
            config.log_level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "reading configuration");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.start_path.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "start path `{}` must begin with `/`",
                self.start_path
            )));
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ConfigError::Invalid("window size must be positive".to_owned()));
        }
        if self.server_address.trim().is_empty() {
            return Err(ConfigError::Invalid("server address is empty".to_owned()));
        }
        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "unknown log level `{}`",
                self.log_level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("nautilus").chain(args.iter().copied()))
    }

    fn missing() -> PathBuf {
        PathBuf::from("definitely/not/here/nautilus.toml")
    }

    #[test]
    fn defaults_without_file() {
        let config = SiteConfig::load_with_default(&cli(&[]), &missing()).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.server_address, "play.atomland.xyz");
    }

    #[test]
    fn file_overrides_some_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "server_address = \"mc.example.org\"\n\n[window]\nwidth = 900.0"
        )
        .unwrap();

        let path = file.path().to_str().unwrap().to_owned();
        let config = SiteConfig::load_with_default(&cli(&["--config", &path]), &missing()).unwrap();
        assert_eq!(config.server_address, "mc.example.org");
        assert_eq!(config.window.width, 900.0);
        assert_eq!(config.window.height, WindowSettings::default().height);
        assert_eq!(config.minecraft_version, "1.20.4");
    }

    #[test]
    fn cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "start_path = \"/sunucular\"\nlog_level = \"warn\"").unwrap();

        let path = file.path().to_str().unwrap().to_owned();
        let config = SiteConfig::load_with_default(
            &cli(&["-c", &path, "--path", "/magaza", "--log-level", "debug"]),
            &missing(),
        )
        .unwrap();
        assert_eq!(config.start_path, "/magaza");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = SiteConfig::load_with_default(
            &cli(&["--config", "definitely/not/here.toml"]),
            &missing(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn bad_toml_and_bad_values_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "window = 3").unwrap();
        let path = file.path().to_str().unwrap().to_owned();
        let err = SiteConfig::load_with_default(&cli(&["--config", &path]), &missing()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));

        let err =
            SiteConfig::load_with_default(&cli(&["--path", "magaza"]), &missing()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let err = SiteConfig::load_with_default(&cli(&["--log-level", "verbose"]), &missing())
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("verbose")));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"loud\"").unwrap();
        let path = file.path().to_str().unwrap().to_owned();
        let err = SiteConfig::load_with_default(&cli(&["--config", &path]), &missing()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        for level in ["trace", "DEBUG", "warn", "off"] {
            let config =
                SiteConfig::load_with_default(&cli(&["--log-level", level]), &missing()).unwrap();
            assert_eq!(config.log_level, level);
        }
    }
}
