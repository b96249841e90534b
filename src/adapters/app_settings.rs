// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flat app settings adapters.
//!
//! This module provides an in-memory settings store and, with the `env`
//! feature, a store backed by the process environment.

use crate::ports::AppSettings;
use std::collections::HashMap;
#[cfg(feature = "env")]
use std::env;
#[cfg(feature = "env")]
use std::sync::RwLock;

/// Maximum length for environment variable keys
#[cfg(feature = "env")]
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values
#[cfg(feature = "env")]
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// App settings held in memory.
///
/// # Examples
///
/// ```rust
/// use transact_client::adapters::InMemoryAppSettings;
/// use transact_client::ports::AppSettings;
///
/// let settings = InMemoryAppSettings::new()
///     .with_value("silverpop-dotnet-api:Username", "alice");
/// assert_eq!(settings.get("silverpop-dotnet-api:Username").as_deref(), Some("alice"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryAppSettings {
    values: HashMap<String, String>,
}

impl InMemoryAppSettings {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from existing values.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Adds a value to the store.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl AppSettings for InMemoryAppSettings {
    fn all_keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

impl FromIterator<(String, String)> for InMemoryAppSettings {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::with_values(iter.into_iter().collect())
    }
}

/// App settings read from environment variables.
///
/// Shells cannot export names containing `:`, so by default a double
/// underscore in a variable name is read as `:`. With the prefix
/// `"transact:"`, the variable `transact__Username` supplies the username.
///
/// Variables are read once, on first access.
///
/// # Examples
///
/// ```rust
/// use transact_client::adapters::EnvAppSettings;
///
/// // Only read variables whose (transformed) name starts with "transact:"
/// let settings = EnvAppSettings::new().with_key_filter("transact:");
/// ```
#[cfg(feature = "env")]
#[derive(Debug)]
pub struct EnvAppSettings {
    /// Only keys starting with this string are kept
    key_filter: Option<String>,
    /// Whether to read `__` as `:`
    replace_double_underscores: bool,
    /// Lazily loaded variables
    cache: RwLock<Option<HashMap<String, String>>>,
}

#[cfg(feature = "env")]
impl EnvAppSettings {
    /// Creates a store over all environment variables.
    pub fn new() -> Self {
        Self {
            key_filter: None,
            replace_double_underscores: true,
            cache: RwLock::new(None),
        }
    }

    /// Keeps only keys that start with `filter` after transformation.
    ///
    /// The filter is not stripped from the key.
    pub fn with_key_filter(mut self, filter: impl Into<String>) -> Self {
        self.key_filter = Some(filter.into());
        self
    }

    /// Sets whether `__` in variable names is read as `:`.
    pub fn replace_double_underscores(mut self, enabled: bool) -> Self {
        self.replace_double_underscores = enabled;
        self
    }

    /// Loads matching environment variables.
    fn load(&self) -> HashMap<String, String> {
        let mut values = HashMap::new();

        for (key, value) in env::vars() {
            if key.len() > MAX_ENV_KEY_LEN || value.len() > MAX_ENV_VALUE_LEN {
                tracing::debug!(
                    "Skipping oversized environment variable: key_len={}, value_len={}",
                    key.len(),
                    value.len()
                );
                continue;
            }

            let key = if self.replace_double_underscores {
                key.replace("__", ":")
            } else {
                key
            };

            if let Some(filter) = &self.key_filter {
                if !key.starts_with(filter.as_str()) {
                    continue;
                }
            }

            values.insert(key, value);
        }

        tracing::debug!(
            "Loaded {} environment variables (filter={:?}, replace_double_underscores={})",
            values.len(),
            self.key_filter,
            self.replace_double_underscores
        );

        values
    }

    /// Runs `f` against the cached variables, loading them if necessary.
    fn with_cache<R>(&self, f: impl FnOnce(&HashMap<String, String>) -> R) -> R {
        {
            let guard = match self.cache.read() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if let Some(values) = guard.as_ref() {
                return f(values);
            }
        }

        let mut guard = match self.cache.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let values = guard.get_or_insert_with(|| self.load());
        f(values)
    }
}

#[cfg(feature = "env")]
impl Default for EnvAppSettings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "env")]
impl AppSettings for EnvAppSettings {
    fn all_keys(&self) -> Vec<String> {
        self.with_cache(|values| values.keys().cloned().collect())
    }

    fn get(&self, key: &str) -> Option<String> {
        self.with_cache(|values| values.get(key).cloned())
    }
}
