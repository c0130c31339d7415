//! Configuration file management for coach.
//!
//! Provides a TOML-based config file at `~/.config/coach/config.toml` holding
//! default plan inputs, and a per-field resolution chain:
//! CLI flag > env var > config file > built-in default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use coach_core::PlanInputs;

use crate::InputArgs;

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub inputs: InputsSection,
}

/// Plan inputs stored in the config file. Every field is optional.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InputsSection {
    pub niche: Option<String>,
    pub audience: Option<String>,
    pub product: Option<String>,
    pub transformation: Option<String>,
    pub price_range: Option<String>,
    pub goals: Option<String>,
    pub start_date: Option<String>,
}

impl From<&PlanInputs> for InputsSection {
    fn from(inputs: &PlanInputs) -> Self {
        Self {
            niche: Some(inputs.niche.clone()),
            audience: Some(inputs.audience.clone()),
            product: Some(inputs.product.clone()),
            transformation: Some(inputs.transformation.clone()),
            price_range: Some(inputs.price_range.clone()),
            goals: Some(inputs.goals.clone()),
            start_date: Some(inputs.start_date.clone()),
        }
    }
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the coach config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/coach` or `~/.config/coach`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("coach");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("coach")
}

/// Return the config file path: `--config` flag > `COACH_CONFIG` > XDG default.
pub fn config_path(cli_path: Option<&Path>) -> PathBuf {
    if let Some(path) = cli_path {
        return path.to_path_buf();
    }
    if let Ok(path) = std::env::var("COACH_CONFIG") {
        return PathBuf::from(path);
    }
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. A missing file yields `Ok(None)`.
pub fn load_config(path: &Path) -> Result<Option<ConfigFile>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(None);
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("failed to read config file at {}", path.display()));
        }
    };
    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file at {}", path.display()))?;
    Ok(Some(config))
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config(path: &Path, config: &ConfigFile) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create config directory {}", dir.display()))?;
    }

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;
    tracing::info!(path = %path.display(), "config written");
    Ok(())
}

// -----------------------------------------------------------------------
// Input resolution
// -----------------------------------------------------------------------

/// Resolve plan inputs from flags, the process environment and the config file.
pub fn resolve_inputs(flags: &InputArgs, file: Option<&ConfigFile>) -> PlanInputs {
    resolve_inputs_with(flags, |key| std::env::var(key).ok(), file)
}

/// Resolve plan inputs with an explicit environment lookup.
///
/// Each field independently takes the first value found in: `flags`,
/// `env(COACH_<FIELD>)`, the config file, [`PlanInputs::starter`].
pub fn resolve_inputs_with<E>(flags: &InputArgs, env: E, file: Option<&ConfigFile>) -> PlanInputs
where
    E: Fn(&str) -> Option<String>,
{
    let defaults = PlanInputs::starter();
    let stored = file.map(|f| &f.inputs);

    PlanInputs {
        niche: pick(
            &flags.niche,
            env("COACH_NICHE"),
            stored.map(|s| &s.niche),
            defaults.niche,
        ),
        audience: pick(
            &flags.audience,
            env("COACH_AUDIENCE"),
            stored.map(|s| &s.audience),
            defaults.audience,
        ),
        product: pick(
            &flags.product,
            env("COACH_PRODUCT"),
            stored.map(|s| &s.product),
            defaults.product,
        ),
        transformation: pick(
            &flags.transformation,
            env("COACH_TRANSFORMATION"),
            stored.map(|s| &s.transformation),
            defaults.transformation,
        ),
        price_range: pick(
            &flags.price_range,
            env("COACH_PRICE_RANGE"),
            stored.map(|s| &s.price_range),
            defaults.price_range,
        ),
        goals: pick(
            &flags.goals,
            env("COACH_GOALS"),
            stored.map(|s| &s.goals),
            defaults.goals,
        ),
        start_date: pick(
            &flags.start_date,
            env("COACH_START_DATE"),
            stored.map(|s| &s.start_date),
            defaults.start_date,
        ),
    }
}

fn pick(
    flag: &Option<String>,
    env_value: Option<String>,
    stored: Option<&Option<String>>,
    default: String,
) -> String {
    flag.clone()
        .or(env_value)
        .or_else(|| stored.cloned().flatten())
        .unwrap_or(default)
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
