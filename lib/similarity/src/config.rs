use serde::{Deserialize, Serialize};
use std::path::Path;
use stylesim_core::{Error, Result};

/// Number of recommendations returned when the caller does not ask for a count
pub const DEFAULT_TOP_N: usize = 5;

/// Configuration for a [`Recommender`](crate::Recommender)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommenderConfig {
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,
    /// Prune candidates through an inverted token index instead of scoring
    /// every record. Results are identical either way.
    #[serde(default)]
    pub use_index: bool,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            default_top_n: DEFAULT_TOP_N,
            use_index: false,
        }
    }
}

impl RecommenderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.default_top_n == 0 {
            return Err(Error::InvalidConfig(
                "default_top_n must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| Error::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }
}
