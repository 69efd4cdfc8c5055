//! esparse_options: parser configuration.
//!
//! Holds the language edition and strict-mode flag a parse runs under, and
//! loads them from JSON documents of the form
//! `{ "mode": "es8OrGreater", "strict": false }`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// The language edition the parser accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LanguageMode {
    Es3,
    Es5,
    Es6OrEs7,
    Es8OrGreater,
}

impl Default for LanguageMode {
    fn default() -> Self {
        LanguageMode::Es8OrGreater
    }
}

impl LanguageMode {
    /// ES6 and later grammar (arrow functions, classes, destructuring, ...).
    pub fn at_least_6(self) -> bool {
        !matches!(self, LanguageMode::Es3 | LanguageMode::Es5)
    }

    /// ES8 and later grammar (trailing commas in parameter and argument lists).
    pub fn at_least_8(self) -> bool {
        self == LanguageMode::Es8OrGreater
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LanguageMode::Es3 => "es3",
            LanguageMode::Es5 => "es5",
            LanguageMode::Es6OrEs7 => "es6OrEs7",
            LanguageMode::Es8OrGreater => "es8OrGreater",
        }
    }
}

impl fmt::Display for LanguageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageMode {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "es3" => Ok(LanguageMode::Es3),
            "es5" => Ok(LanguageMode::Es5),
            "es6" | "es7" | "es2015" | "es2016" | "es6ores7" => Ok(LanguageMode::Es6OrEs7),
            "es8" | "es2017" | "es2018" | "es2019" | "es2020" | "es2021" | "es2022"
            | "esnext" | "latest" | "es8orgreater" => Ok(LanguageMode::Es8OrGreater),
            _ => Err(OptionsError::UnknownMode(s.to_string())),
        }
    }
}

/// Options for one parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParserOptions {
    pub mode: LanguageMode,
    /// Whether strict-mode reserved words are rejected as identifiers.
    pub strict: bool,
}

impl ParserOptions {
    pub fn new(mode: LanguageMode, strict: bool) -> Self {
        Self { mode, strict }
    }

    pub fn from_json(content: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> Result<String, OptionsError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Failure to load parser options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("unknown language mode '{0}'")]
    UnknownMode(String),
    #[error("invalid parser options: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot read parser options: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParserOptions::default();
        assert_eq!(options.mode, LanguageMode::Es8OrGreater);
        assert!(!options.strict);
    }

    #[test]
    fn test_mode_predicates() {
        assert!(!LanguageMode::Es3.at_least_6());
        assert!(!LanguageMode::Es5.at_least_6());
        assert!(LanguageMode::Es6OrEs7.at_least_6());
        assert!(!LanguageMode::Es6OrEs7.at_least_8());
        assert!(LanguageMode::Es8OrGreater.at_least_8());
    }

    #[test]
    fn test_from_json() {
        let options = ParserOptions::from_json(r#"{ "mode": "es5", "strict": true }"#).unwrap();
        assert_eq!(options, ParserOptions::new(LanguageMode::Es5, true));
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let options = ParserOptions::from_json(r#"{ "strict": true }"#).unwrap();
        assert_eq!(options.mode, LanguageMode::Es8OrGreater);
        assert!(options.strict);
    }

    #[test]
    fn test_from_json_rejects_unknown_mode() {
        let err = ParserOptions::from_json(r#"{ "mode": "es99" }"#).unwrap_err();
        assert!(matches!(err, OptionsError::Json(_)));
    }

    #[test]
    fn test_json_round_trip_uses_camel_case() {
        let json = ParserOptions::new(LanguageMode::Es6OrEs7, false).to_json().unwrap();
        assert_eq!(json, r#"{"mode":"es6OrEs7","strict":false}"#);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("ES3".parse::<LanguageMode>().unwrap(), LanguageMode::Es3);
        assert_eq!("es2015".parse::<LanguageMode>().unwrap(), LanguageMode::Es6OrEs7);
        assert_eq!("esnext".parse::<LanguageMode>().unwrap(), LanguageMode::Es8OrGreater);
        let err = "cobol".parse::<LanguageMode>().unwrap_err();
        assert_eq!(err.to_string(), "unknown language mode 'cobol'");
    }
}
