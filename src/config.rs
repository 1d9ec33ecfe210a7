use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Typo dictionary file; the table compiled into the binary is used
    /// when unset.
    pub dictionary: Option<PathBuf>,

    /// Words on this list are never reported.
    pub ignore_file: Option<PathBuf>,

    /// Extension allow-list for directory recursion; an empty list scans
    /// every file.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Print the offending source line under each finding.
    #[serde(default)]
    pub with_context: bool,
}

fn default_extensions() -> Vec<String> {
    vec![
        "php".to_string(),
        "phtml".to_string(),
        "inc".to_string(),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: None,
            ignore_file: None,
            extensions: default_extensions(),
            with_context: false,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global
    /// config > defaults.
    pub fn load(
        dictionary: Option<PathBuf>,
        ignore_file: Option<PathBuf>,
        cli_extensions: Vec<String>,
        all_types: bool,
        with_context: bool,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".typochk.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if let Some(dict) = dictionary {
            config.dictionary = Some(dict);
        }
        if let Some(ignore) = ignore_file {
            config.ignore_file = Some(ignore);
        }
        if !cli_extensions.is_empty() {
            config.extensions = cli_extensions;
        }
        if all_types {
            config.extensions.clear();
        }
        if with_context {
            config.with_context = true;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        if other.dictionary.is_some() {
            self.dictionary = other.dictionary;
        }
        if other.ignore_file.is_some() {
            self.ignore_file = other.ignore_file;
        }
        if other.extensions != default_extensions() {
            self.extensions = other.extensions;
        }
        if other.with_context {
            self.with_context = true;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "typochk").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
