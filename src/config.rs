use std::path::PathBuf;

use serde::Deserialize;

/// Environment variable naming the tool's own TOML config. Unset means defaults.
pub const CONFIG_ENV: &str = "NAGSTATS_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    /// Daemon main config consulted when no status file is given.
    #[serde(default = "default_main_config_file")]
    pub main_config_file: PathBuf,
    /// Status file to read directly, bypassing the main config.
    #[serde(default)]
    pub status_file: Option<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            main_config_file: default_main_config_file(),
            status_file: None,
        }
    }
}

fn default_main_config_file() -> PathBuf {
    PathBuf::from("/usr/local/nagios/etc/nagios.cfg")
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Written after every MRTG value.
    #[serde(default = "default_mrtg_delimiter")]
    pub mrtg_delimiter: String,
    /// Comma-separated variables used by `--mrtg` when `--data` is absent.
    #[serde(default)]
    pub mrtg_variables: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            mrtg_delimiter: default_mrtg_delimiter(),
            mrtg_variables: None,
        }
    }
}

fn default_mrtg_delimiter() -> String {
    "\n".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when neither `--log-level` nor `RUST_LOG` is set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "warn".into()
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let Ok(path) = std::env::var(CONFIG_ENV) else {
            return Ok(Self::default());
        };
        let s = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("reading {CONFIG_ENV}={path}: {e}"))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.paths.main_config_file.as_os_str().is_empty(),
            "paths.main_config_file must be non-empty"
        );
        anyhow::ensure!(
            self.paths
                .status_file
                .as_ref()
                .is_none_or(|p| !p.as_os_str().is_empty()),
            "paths.status_file must be non-empty when set"
        );
        anyhow::ensure!(
            !self.output.mrtg_delimiter.is_empty(),
            "output.mrtg_delimiter must be non-empty"
        );
        anyhow::ensure!(
            self.output
                .mrtg_variables
                .as_deref()
                .is_none_or(|v| v.split(',').any(|k| !k.trim().is_empty())),
            "output.mrtg_variables must name at least one variable, got {:?}",
            self.output.mrtg_variables
        );
        anyhow::ensure!(
            !self.logging.filter.trim().is_empty(),
            "logging.filter must be non-empty"
        );
        Ok(())
    }
}
