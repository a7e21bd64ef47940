//! Tooling configuration that front-ends (the CLI) can serialize/deserialize.
//!
//! The decoder itself takes no configuration; its fallbacks are fixed.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How a flat map is laid out on disk / stdin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// A JSON object of string values.
    #[default]
    Json,
    /// `key=value` per line.
    Lines,
}

impl FromStr for InputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "lines" | "kv" => Ok(InputFormat::Lines),
            other => Err(Error::Config(format!("unknown input format '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    pub input_format: InputFormat,

    /// Pretty-print JSON output.
    pub pretty: bool,

    /// `tracing-subscriber` env-filter directive.
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input_format: InputFormat::Json,
            pretty: false,
            log_filter: "warn".to_string(),
        }
    }
}

impl CliConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `RUNMETA_INPUT_FORMAT`: `json` or `lines`
    /// - `RUNMETA_PRETTY`: `true`/`1` to pretty-print
    /// - `RUNMETA_LOG`: log filter, e.g. `runmeta_decode=debug`
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`CliConfig::from_env`] but with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(s) = lookup("RUNMETA_INPUT_FORMAT") {
            if let Ok(v) = s.parse::<InputFormat>() {
                cfg.input_format = v;
            }
        }

        if let Some(s) = lookup("RUNMETA_PRETTY") {
            if let Some(v) = parse_flag(&s) {
                cfg.pretty = v;
            }
        }

        if let Some(s) = lookup("RUNMETA_LOG") {
            if !s.trim().is_empty() {
                cfg.log_filter = s;
            }
        }

        cfg
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
