//! Session and portfolio configuration.
//!
//! Loaded from a TOML file. Every field has a default, so an empty file (or
//! no file at all) yields a working session.

use std::path::Path;

use serde::Deserialize;

use crate::error::{FolioError, Result};

/// Default number of commands the history ring retains.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FolioConfig {
    /// Terminal session behaviour.
    #[serde(default)]
    pub terminal: TerminalConfig,
    /// Content behind the `profile` and `projects` blocks.
    #[serde(default)]
    pub portfolio: PortfolioConfig,
}

/// Terminal session behaviour.
#[derive(Debug, Clone, Deserialize)]
pub struct TerminalConfig {
    /// System messages seeded into a fresh output log.
    #[serde(default = "default_welcome")]
    pub welcome: Vec<String>,
    /// Maximum number of history entries (oldest evicted first).
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    /// Glyph drawn in front of command echoes.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Emit ANSI colours.
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            welcome: default_welcome(),
            history_capacity: default_history_capacity(),
            prompt: default_prompt(),
            color: default_color(),
        }
    }
}

fn default_welcome() -> Vec<String> {
    vec![
        "Welcome to my Portfolio".to_string(),
        "Type 'help' to get started".to_string(),
    ]
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

fn default_prompt() -> String {
    "\u{279C}".to_string()
}

fn default_color() -> bool {
    true
}

/// Portfolio content rendered by the `profile` and `projects` commands.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            role: String::new(),
            summary: String::new(),
            links: Vec::new(),
            projects: Vec::new(),
        }
    }
}

fn default_name() -> String {
    "Anonymous".to_string()
}

/// A labelled external link (e.g. GitHub, email).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// One portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl FolioConfig {
    /// Parse a configuration from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!(
            "Loaded config from {} ({} projects)",
            path.display(),
            config.portfolio.projects.len()
        );
        Ok(config)
    }

    /// Reject values the session cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.terminal.history_capacity == 0 {
            return Err(FolioError::Config(
                "terminal.history_capacity must be at least 1".to_string(),
            ));
        }
        if let Some(project) = self.portfolio.projects.iter().find(|p| p.name.trim().is_empty()) {
            return Err(FolioError::Config(format!(
                "project with empty name (description: {:?})",
                project.description
            )));
        }
        Ok(())
    }
}
