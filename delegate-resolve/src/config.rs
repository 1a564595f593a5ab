//! Resolver chain configuration.
//!
//! A chain is described in TOML:
//!
//! ```toml
//! [ambiguity]
//! strategies = ["binding-priority", "declaring-type", "argument-type", "method-name", "parameter-length"]
//! tie_breaker = "left"
//! ```
//!
//! Missing keys fall back to the standard chain with no tie breaker.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::resolve::{
    ArgumentTypeResolver, BindingPriorityResolver, Compound, DeclaringTypeResolver, Directional,
    MethodNameEqualityResolver, ParameterLengthResolver,
};

/// Errors that can occur while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {}", .path.display(), .error)]
    Io {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("invalid resolver configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("strategy `{0}` listed more than once")]
    DuplicateStrategy(Strategy),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Ambiguity resolution settings.
    pub ambiguity: AmbiguityConfig,
}

/// Ambiguity resolution settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbiguityConfig {
    /// Resolvers to consult, in order.
    pub strategies: Vec<Strategy>,

    /// Side to pick when every strategy leaves the pair unresolved.
    pub tie_breaker: Option<TieBreaker>,
}

impl Default for AmbiguityConfig {
    fn default() -> Self {
        Self {
            strategies: vec![
                Strategy::BindingPriority,
                Strategy::DeclaringType,
                Strategy::ArgumentType,
                Strategy::MethodName,
                Strategy::ParameterLength,
            ],
            tie_breaker: None,
        }
    }
}

/// A single resolver in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Higher binding priority wins.
    BindingPriority,
    /// Target declared in the more specific type wins.
    DeclaringType,
    /// More specific target parameter types win.
    ArgumentType,
    /// Target named like the source method wins.
    MethodName,
    /// Target with more parameters wins.
    ParameterLength,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::BindingPriority => "binding-priority",
            Strategy::DeclaringType => "declaring-type",
            Strategy::ArgumentType => "argument-type",
            Strategy::MethodName => "method-name",
            Strategy::ParameterLength => "parameter-length",
        };
        f.write_str(name)
    }
}

/// Final tie breaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreaker {
    Left,
    Right,
}

impl ResolverConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ResolverConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|error| ConfigError::Io {
            path: path.to_path_buf(),
            error,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(
            path = %path.display(),
            strategies = config.ambiguity.strategies.len(),
            "loaded resolver configuration"
        );
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let strategies = &self.ambiguity.strategies;
        for (i, strategy) in strategies.iter().enumerate() {
            if strategies[..i].contains(strategy) {
                return Err(ConfigError::DuplicateStrategy(*strategy));
            }
        }
        Ok(())
    }

    /// Build the configured resolver chain.
    pub fn build(&self) -> Compound {
        let chain = self
            .ambiguity
            .strategies
            .iter()
            .fold(Compound::new(), |chain, strategy| match strategy {
                Strategy::BindingPriority => chain.then(BindingPriorityResolver),
                Strategy::DeclaringType => chain.then(DeclaringTypeResolver),
                Strategy::ArgumentType => chain.then(ArgumentTypeResolver::INSTANCE),
                Strategy::MethodName => chain.then(MethodNameEqualityResolver),
                Strategy::ParameterLength => chain.then(ParameterLengthResolver),
            });
        match self.ambiguity.tie_breaker {
            Some(TieBreaker::Left) => chain.then(Directional::Left),
            Some(TieBreaker::Right) => chain.then(Directional::Right),
            None => chain,
        }
    }
}
