//! Configuration management for asmalign.
//!
//! This module provides the [`Config`] struct which controls all formatting behavior.
//! Configuration can be loaded from:
//! - TOML files (`asmalign.toml`)
//! - CLI arguments (which override file settings)
//! - In-file directives (`; asmalign: --col 48`)
//!
//! Config files are auto-discovered by searching parent directories from the file
//! being formatted up to the filesystem root, plus the user's home directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::format::{IndentStyle, LayoutParams};

/// Config file names to search for (in order of priority, later overrides earlier)
const CONFIG_FILE_NAMES: &[&str] = &["asmalign.toml", ".asmalign.toml"];

/// Get the user's home directory
fn dirs_home() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home));
    }
    // Fallback for Windows
    if let Ok(userprofile) = std::env::var("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }
    None
}

// Serde default functions
fn default_comment_column() -> usize {
    40
}
fn default_comment_char() -> String {
    ";".to_string()
}
fn default_gap() -> usize {
    2
}

/// Main configuration struct for asmalign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Column trailing comments are aligned to (default: 40)
    #[serde(default = "default_comment_column")]
    pub comment_column: usize,

    /// Comment marker (default: `;`)
    #[serde(default = "default_comment_char")]
    pub comment_char: String,

    /// Spaces between label, mnemonic and operand columns (default: 2)
    #[serde(default = "default_gap")]
    pub gap: usize,

    /// Report lines whose indentation breaks `indent_style` (default: false)
    #[serde(default)]
    pub check_indent: bool,

    /// Expected indentation character for the checker (default: spaces)
    #[serde(default)]
    pub indent_style: IndentStyle,
}

/// Partial configuration for TOML parsing
///
/// All fields are `Option<T>` so we can distinguish between
/// "explicitly set" and "not specified" when merging configs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    pub comment_column: Option<usize>,
    pub comment_char: Option<String>,
    pub gap: Option<usize>,
    pub check_indent: Option<bool>,
    pub indent_style: Option<IndentStyle>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            comment_column: 40,
            comment_char: ";".to_string(),
            gap: 2,
            check_indent: false,
            indent_style: IndentStyle::Spaces,
        }
    }
}

impl Config {
    /// Maximum reasonable comment column
    const MAX_COMMENT_COLUMN: usize = 1000;
    /// Maximum reasonable column gap
    const MAX_GAP: usize = 32;

    /// Validate configuration values are within reasonable bounds
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.comment_char.is_empty() {
            return Some("comment_char must not be empty".to_string());
        }
        if self.comment_char.chars().any(char::is_whitespace) {
            return Some(format!(
                "comment_char {:?} must not contain whitespace",
                self.comment_char
            ));
        }
        if self.gap == 0 {
            return Some("gap must be at least 1".to_string());
        }
        if self.gap > Self::MAX_GAP {
            return Some(format!(
                "gap {} exceeds maximum of {}",
                self.gap,
                Self::MAX_GAP
            ));
        }
        if self.comment_column > Self::MAX_COMMENT_COLUMN {
            return Some(format!(
                "comment_column {} exceeds maximum of {}",
                self.comment_column,
                Self::MAX_COMMENT_COLUMN
            ));
        }
        None
    }

    /// Layout parameters borrowed from this config
    #[must_use]
    pub fn layout_params(&self) -> LayoutParams<'_> {
        LayoutParams {
            comment_char: &self.comment_char,
            comment_column: self.comment_column,
            gap: self.gap,
        }
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let partial: PartialConfig = toml::from_str(&contents)?;
        let mut config = Self::default();
        config.apply_partial(&partial);
        Ok(config)
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: &PartialConfig) {
        if let Some(v) = partial.comment_column {
            self.comment_column = v;
        }
        if let Some(v) = &partial.comment_char {
            self.comment_char.clone_from(v);
        }
        if let Some(v) = partial.gap {
            self.gap = v;
        }
        if let Some(v) = partial.check_indent {
            self.check_indent = v;
        }
        if let Some(v) = partial.indent_style {
            self.indent_style = v;
        }
    }

    /// Discover config files from parent directories of a given path
    ///
    /// Collects the home directory config first, then every ancestor of the file from the root down.
    /// Returns list of config file paths in order of priority (least specific first).
    #[must_use]
    pub fn discover_config_files(start_path: &Path) -> Vec<PathBuf> {
        let mut config_files = Vec::new();

        // Home directory config has the lowest priority
        if let Some(home) = dirs_home() {
            for config_name in CONFIG_FILE_NAMES {
                let home_config = home.join(config_name);
                if home_config.is_file() {
                    config_files.push(home_config);
                }
            }
        }

        let start_dir = if start_path.is_file() {
            start_path
                .parent()
                .map(Path::to_path_buf)
                .filter(|dir| !dir.as_os_str().is_empty())
                .or_else(|| std::env::current_dir().ok())
        } else if start_path.is_dir() {
            Some(start_path.to_path_buf())
        } else {
            std::env::current_dir().ok()
        };

        if let Some(dir) = start_dir {
            let mut ancestors: Vec<PathBuf> = dir.ancestors().map(Path::to_path_buf).collect();
            // Root first, so nearer configs override
            ancestors.reverse();

            for ancestor in ancestors {
                for config_name in CONFIG_FILE_NAMES {
                    let config_path = ancestor.join(config_name);
                    if config_path.is_file() && !config_files.contains(&config_path) {
                        config_files.push(config_path);
                    }
                }
            }
        }

        config_files
    }

    /// Load and merge configuration from discovered config files
    ///
    /// Later files override earlier ones (only explicitly set values).
    /// Unreadable or invalid files are reported to stderr and skipped.
    #[must_use]
    pub fn from_discovered_files(start_path: &Path) -> Self {
        let mut config = Self::default();
        for path in &Self::discover_config_files(start_path) {
            match std::fs::read_to_string(path) {
                Ok(contents) => match toml::from_str::<PartialConfig>(&contents) {
                    Ok(partial) => config.apply_partial(&partial),
                    Err(e) => eprintln!("Warning: failed to parse {}: {e}", path.display()),
                },
                Err(e) => eprintln!("Warning: failed to read {}: {e}", path.display()),
            }
        }
        config
    }
}
