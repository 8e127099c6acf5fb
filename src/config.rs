// =============================================================================
// Snippet inputs
// =============================================================================
//
// Every field defaults to the literal the snippet was written against, so an
// empty TOML file (or no file at all) reproduces the canonical output.

use crate::error::{Result, SnippetError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnippetConfig {
    pub capture: CaptureConfig,
    pub transform: TransformConfig,
    pub transform_reduce: ReduceConfig,
    pub views: ViewsConfig,
    pub count: CountConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaptureConfig {
    pub x: i64,
    pub y: i64,
    pub reassign: i64,
    pub calls: usize,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        CaptureConfig {
            x: 0,
            y: 42,
            reassign: 77,
            calls: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformConfig {
    pub word: String,
    pub numbers: Vec<i32>,
    pub values: Vec<i32>,
    pub other_values: Vec<f32>,
}

impl Default for TransformConfig {
    fn default() -> Self {
        TransformConfig {
            word: "hello".to_string(),
            numbers: (1..=10).collect(),
            values: vec![1, 2, 3, 4, 5],
            other_values: vec![10.1, 20.2, 30.3, 40.4, 50.5],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReduceConfig {
    pub numbers: Vec<i32>,
}

impl Default for ReduceConfig {
    fn default() -> Self {
        ReduceConfig {
            numbers: (1..=10).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewsConfig {
    pub numbers: Vec<i32>,
    pub threshold: i32,
    pub factor: i32,
    pub take: usize,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        ViewsConfig {
            numbers: vec![3, 7, 2, 8, 1, 9, 4, 6, 5],
            threshold: 5,
            factor: 2,
            take: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CountConfig {
    pub numbers: Vec<i32>,
    pub threshold: i32,
}

impl Default for CountConfig {
    fn default() -> Self {
        CountConfig {
            numbers: vec![3, 6, 2, 9, 1, 7, 5, 8],
            threshold: 5,
        }
    }
}

impl SnippetConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| SnippetError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| SnippetError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text, path)?;
        tracing::debug!(path = %path.display(), "loaded snippet config");
        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to the built-in literals.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
