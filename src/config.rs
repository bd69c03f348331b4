//! This module implements the config for training and the interactive classifier.
//!
//! A config can be built with setters or read from JSON. Missing JSON fields keep their
//! default values.
//!
//! # Example
//! ```rust
//! use id3tree::config::Config;
//! let cfg = Config::from_json(r#"{ "unknown_label": "n/a", "input": { "delimiter": ";" } }"#).unwrap();
//! assert_eq!(cfg.unknown_label, "n/a");
//! assert_eq!(cfg.input.delimiter, ';');
//! assert_eq!(cfg.input.has_header, true);
//! ```

use crate::decision_tree::UNKNOWN_LABEL;
use crate::errors::Result;
use crate::input::InputFormat;

use std::fs;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// returned by prediction when a sample's value has no trained branch
    pub unknown_label: String,
    /// how the training file is read
    pub input: InputFormat,
    /// log the config when the classifier starts
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Config {
        Config {
            unknown_label: UNKNOWN_LABEL.to_string(),
            input: InputFormat::csv_format(),
            debug: false,
        }
    }

    /// Parse a config from a JSON string.
    pub fn from_json(s: &str) -> Result<Config> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read a config from a JSON file.
    pub fn load(path: &str) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        Config::from_json(&content)
    }

    pub fn set_unknown_label(&mut self, label: &str) {
        self.unknown_label = label.to_string();
    }

    pub fn set_input_format(&mut self, fmt: InputFormat) {
        self.input = fmt;
    }

    pub fn set_debug(&mut self, option: bool) {
        self.debug = option;
    }

    pub fn to_string(&self) -> String {
        let mut s = String::from("");
        s.push_str(&format!("unknown label = {}\n", self.unknown_label));
        s.push_str(&format!("delimiter = [{}]\n", self.input.delimiter));
        s.push_str(&format!("has header = {}\n", self.input.has_header));
        s.push_str(&format!("trim fields = {}\n", self.input.trim));
        s.push_str(&format!("debug enabled = {}\n", self.debug));
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::new();
        assert_eq!(cfg.unknown_label, "Unknown");
        assert_eq!(cfg.input, InputFormat::csv_format());
        assert_eq!(cfg.debug, false);
        assert_eq!(Config::default(), cfg);
    }

    #[test]
    fn config_express() {
        let mut cfg = Config::new();
        cfg.set_debug(true);
        assert_eq!(
            cfg.to_string(),
            "unknown label = Unknown\ndelimiter = [,]\nhas header = true\ntrim fields = true\ndebug enabled = true\n"
        );
    }

    #[test]
    fn json_round_trip() {
        let mut cfg = Config::new();
        cfg.set_unknown_label("?");
        let mut fmt = InputFormat::csv_format();
        fmt.set_delimiter('\t');
        cfg.set_input_format(fmt);
        let s = serde_json::to_string(&cfg).unwrap();
        assert_eq!(Config::from_json(&s).unwrap(), cfg);
    }

    #[test]
    fn debug_from_json() {
        let cfg = Config::from_json(r#"{ "debug": true }"#).unwrap();
        assert!(cfg.debug);
        assert_eq!(cfg.unknown_label, "Unknown");
    }

    #[test]
    fn empty_json_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::new());
        assert!(Config::from_json("{ not json").is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::load("no/such/config.json").unwrap_err();
        assert!(err.to_string().starts_with("IO error"));
    }
}
