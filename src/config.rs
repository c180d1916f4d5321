use crate::utils::{check_num, check_text};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Dashboard display configuration.
///
/// Loaded from a TOML file and validated before use.
/// Every key is optional; missing keys take their [`Default`] value.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Number of pickers in the top ranking.
    pub top_n: usize,
    /// Number of pickers in the bottom ranking.
    pub bottom_n: usize,

    /// Number of daily columns in the detail table.
    pub column_count: usize,

    /// Dashboard title.
    pub title: String,
    /// Observation period shown under the title.
    pub period: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_n: 10,
            bottom_n: 10,
            column_count: 13,
            title: "Picker Performance".to_string(),
            period: "December 2025".to_string(),
        }
    }
}

impl Config {
    /// Load a [`Config`] from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        check_num(self.top_n, 1..=1000).context("invalid top ranking size")?;
        check_num(self.bottom_n, 1..=1000).context("invalid bottom ranking size")?;

        check_num(self.column_count, 1..=366).context("invalid number of columns")?;

        check_text(&self.title, 120).context("invalid title")?;
        check_text(&self.period, 120).context("invalid period")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.top_n, 10);
        assert_eq!(config.bottom_n, 10);
        assert_eq!(config.column_count, 13);
    }

    #[test]
    fn partial_file_overrides_given_keys() {
        let config = Config::from_toml("top_n = 3\ncolumn_count = 7\n").unwrap();
        assert_eq!(config.top_n, 3);
        assert_eq!(config.bottom_n, 10);
        assert_eq!(config.column_count, 7);
    }

    #[test]
    fn zero_sized_ranking_is_rejected() {
        let err = Config::from_toml("bottom_n = 0\n").unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("invalid bottom ranking size"), "{chain}");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_toml("top = 5\n").is_err());
    }

    #[test]
    fn blank_title_is_rejected() {
        assert!(Config::from_toml("title = \"  \"\n").is_err());
    }
}
