//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (`user-registry.toml` in the working directory, or `USER_REGISTRY_CONFIG`)
//! 3. Environment variables (`USER_REGISTRY_*` prefix)
//!
//! Environment variables take precedence over config file values.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix
const ENV_PREFIX: &str = "USER_REGISTRY";

/// Config file looked up in the working directory when `USER_REGISTRY_CONFIG` is unset
const DEFAULT_CONFIG_FILE: &str = "user-registry.toml";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Address the HTTP server listens on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Capacity of the User actor's request channel
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,

    /// Start with the two demo users (John Doe, Jane Smith)
    #[serde(default = "default_seed_demo_users")]
    pub seed_demo_users: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            channel_capacity: default_channel_capacity(),
            seed_demo_users: default_seed_demo_users(),
        }
    }
}

impl Config {
    /// Load configuration from the default location and environment
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the config file path
    ///
    /// Can be overridden with the USER_REGISTRY_CONFIG environment variable
    pub fn config_file_path() -> PathBuf {
        match std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        // USER_REGISTRY_BIND_ADDR
        if let Some(val) = env_var("BIND_ADDR") {
            self.bind_addr = val;
        }

        // USER_REGISTRY_CHANNEL_CAPACITY
        if let Some(val) = env_var("CHANNEL_CAPACITY") {
            self.channel_capacity = val
                .parse()
                .with_context(|| format!("Invalid {}_CHANNEL_CAPACITY: {:?}", ENV_PREFIX, val))?;
        }

        // USER_REGISTRY_SEED_DEMO_USERS
        if let Some(val) = env_var("SEED_DEMO_USERS") {
            self.seed_demo_users = parse_bool(&val)
                .with_context(|| format!("Invalid {}_SEED_DEMO_USERS", ENV_PREFIX))?;
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.channel_capacity == 0 {
            bail!("channel_capacity must be greater than zero");
        }
        Ok(())
    }
}

fn env_var(suffix: &str) -> Option<String> {
    std::env::var(format!("{}_{}", ENV_PREFIX, suffix)).ok()
}

fn parse_bool(val: &str) -> Result<bool> {
    match val.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => bail!("expected true/false, got {:?}", val),
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_channel_capacity() -> usize {
    32
}

fn default_seed_demo_users() -> bool {
    true
}
