use crate::error::{Result, TabsumError};
use crate::types::constants::{
    CONFIG_SECTION, DEFAULT_PREVIEW_ROWS, ENV_COLUMN, ENV_DELIMITER, ENV_PREVIEW_ROWS,
};
use crate::types::Delimiter;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Forced delimiter; detected from the first line when `None`
    pub delimiter: Option<Delimiter>,
    /// Column to sum; the last column when `None`
    pub column: Option<String>,
    /// Number of records echoed back in the output
    pub preview_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            delimiter: None,
            column: None,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Config::default()
    }

    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }

    /// Override values from environment variables that are set
    pub fn merge_env(self) -> Result<Self> {
        self.merge_values(|key| env::var(key).ok(), [ENV_DELIMITER, ENV_COLUMN, ENV_PREVIEW_ROWS])
    }

    /// Load configuration from a config file.
    /// Reads from the [TABSUM] section; missing keys keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            TabsumError::Config(format!("Failed to read config file: {}", e))
        })?;

        Config::from_config_str(&content)
    }

    pub fn from_config_str(content: &str) -> Result<Self> {
        let mut sections = parse_sections(content);
        let section = sections.remove(CONFIG_SECTION).ok_or_else(|| {
            TabsumError::Config(format!("Missing [{}] section in config file", CONFIG_SECTION))
        })?;

        Config::default().merge_values(
            |key| section.get(key).cloned(),
            ["DELIMITER", "COLUMN", "PREVIEW_ROWS"],
        )
    }

    /// Apply `[delimiter, column, preview_rows]` values found through `lookup`
    fn merge_values<F>(mut self, lookup: F, keys: [&str; 3]) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let [delimiter_key, column_key, rows_key] = keys;

        if let Some(value) = lookup(delimiter_key).filter(|v| !v.is_empty()) {
            let delimiter = value
                .parse::<Delimiter>()
                .map_err(|e| TabsumError::Config(format!("{}: {}", delimiter_key, e)))?;
            self.delimiter = Some(delimiter);
        }

        if let Some(value) = lookup(column_key).filter(|v| !v.is_empty()) {
            self.column = Some(value);
        }

        if let Some(value) = lookup(rows_key).filter(|v| !v.is_empty()) {
            self.preview_rows = value.parse().map_err(|_| {
                TabsumError::Config(format!("{} must be a non-negative number", rows_key))
            })?;
        }

        Ok(self)
    }
}

/// Split INI-like text into upper-cased sections of upper-cased keys
fn parse_sections(content: &str) -> HashMap<String, HashMap<String, String>> {
    let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
    let mut current_section = String::new();

    for line in content.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            current_section = line[1..line.len() - 1].trim().to_uppercase();
            sections.entry(current_section.clone()).or_default();
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim().to_uppercase();
            let value = value
                .trim()
                .trim_matches('"')
                .trim_matches('\'')
                .to_string();

            if let Some(section) = sections.get_mut(&current_section) {
                section.insert(key, value);
            }
        }
    }

    sections
}
