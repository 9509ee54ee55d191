use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

use crate::{quiz::{DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND, QuizOptions, WindowBounds}, report::NumberFormat, stats::DEFAULT_TOP_COUNTIES};

/// Settings for a run, layered as defaults < config file < command-line flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Count the District of Columbia as a state in quiz answers.
    pub include_dc: bool,
    pub lower_bound: u64,
    pub upper_bound: u64,
    /// How many of the most-populous counties the summary reports.
    pub top_counties: usize,
    /// Locale name for number rendering, e.g. `en_US.UTF-8`.
    pub locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_dc: false,
            lower_bound: DEFAULT_LOWER_BOUND,
            upper_bound: DEFAULT_UPPER_BOUND,
            top_counties: DEFAULT_TOP_COUNTIES,
            locale: "en_US.UTF-8".into(),
        }
    }
}

impl Config {
    /// Read a TOML config file. Missing keys keep their defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("[config] Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("[config] Invalid config file: {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.top_counties > 0, "[config] top_counties must be at least 1");
        self.window()?;
        self.number_format()?;
        Ok(())
    }

    pub fn window(&self) -> Result<WindowBounds> {
        WindowBounds::new(self.lower_bound, self.upper_bound)
    }

    pub fn quiz_options(&self) -> Result<QuizOptions> {
        Ok(QuizOptions { include_dc: self.include_dc, window: self.window()? })
    }

    pub fn number_format(&self) -> Result<NumberFormat> {
        NumberFormat::for_locale(&self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.quiz_options().unwrap(), QuizOptions::default());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("include_dc = true\nlocale = \"de_DE\"\n").unwrap();
        assert!(config.include_dc);
        assert_eq!(config.upper_bound, DEFAULT_UPPER_BOUND);
        assert_eq!(config.number_format().unwrap().decimal_separator, ',');
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_toml_str("include_territories = true\n").is_err());
    }

    #[test]
    fn inverted_bounds_fail_validation() {
        let config = Config { lower_bound: 10, upper_bound: 1, ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_top_counties_fails_validation() {
        let config = Config { top_counties: 0, ..Config::default() };
        assert!(config.validate().is_err());
    }
}
