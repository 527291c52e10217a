//! Configuration schema types for `titlewave.toml`
//!
//! Defines the structure and validation rules for titlewave configuration.
//! Only output concerns are configurable; the effect list, tick period,
//! stagger and selectors are fixed.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Host page settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Document language for the `lang` attribute
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Module script exposing `start()`, relative to the page
    #[serde(default = "default_wasm_module")]
    pub wasm_module: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self { lang: default_lang(), wasm_module: default_wasm_module() }
    }
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_wasm_module() -> String {
    "./pkg/titlewave.js".to_string()
}

/// Build output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for generated pages
    #[serde(default = "default_out")]
    pub out: PathBuf,
    /// Minify generated CSS
    #[serde(default)]
    pub minify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self { out: default_out(), minify: false }
    }
}

fn default_out() -> PathBuf {
    PathBuf::from("build")
}

/// Complete `titlewave.toml` configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitlewaveConfig {
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub build: BuildConfig,
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "page.lang")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "titlewave.toml: '{}' {}", self.field, self.message)
    }
}

impl TitlewaveConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        let lang = &self.page.lang;
        if lang.is_empty() || !lang.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            errors.push(ConfigValidationError {
                field: "page.lang".to_string(),
                message: "must be a non-empty language tag (letters, digits, '-')".to_string(),
            });
        }

        if self.page.wasm_module.trim().is_empty() {
            errors.push(ConfigValidationError {
                field: "page.wasm_module".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        if self.build.out.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "build.out".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        errors
    }
}
