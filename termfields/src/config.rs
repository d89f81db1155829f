//! Decorator configuration.
//!
//! The set of taxonomies carrying custom fields is fixed during setup.
//! Hosts that keep it in a config file can load a [`DecoratorConfig`] from
//! TOML and hand it to [`DecoratorConfig::build`] together with the two
//! service seams.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::decorator::TermFieldDecorator;
use crate::errors::ConfigError;
use crate::provider::{FieldProvider, TaxonomyProvider};

/// Configuration for a [`TermFieldDecorator`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecoratorConfig {
    /// Taxonomies whose terms should carry custom fields. Names the
    /// taxonomy service does not know are skipped at build time.
    #[serde(default)]
    pub taxonomies: Vec<String>,
}

impl DecoratorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Build a decorator and register every configured taxonomy.
    pub fn build<T, F>(&self, taxonomy_provider: T, field_provider: F) -> TermFieldDecorator<T, F>
    where
        T: TaxonomyProvider,
        F: FieldProvider,
    {
        let mut decorator = TermFieldDecorator::new(taxonomy_provider, field_provider);
        for name in &self.taxonomies {
            decorator.register_taxonomy(name);
        }
        decorator
    }
}
