// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use std::collections::HashMap;
use std::env;
use transact_client::adapters::InMemoryAppSettings;
use transact_client::domain::TransactClientConfigurationSection;
use transact_client::ports::{Configuration, ConfigurationSectionSource};

/// A hierarchical configuration over a plain map.
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct MockConfiguration {
    values: HashMap<String, String>,
}

#[allow(dead_code)]
impl MockConfiguration {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value at `path`.
    pub fn with_value(mut self, path: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(path.into(), value.into());
        self
    }
}

impl Configuration for MockConfiguration {
    fn get(&self, path: &str) -> Option<String> {
        self.values.get(path).cloned()
    }
}

/// A section store holding at most one section.
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct MockSections {
    sections: HashMap<String, TransactClientConfigurationSection>,
}

#[allow(dead_code)]
impl MockSections {
    /// Creates a store without sections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a section.
    pub fn with_section(
        mut self,
        name: impl Into<String>,
        section: TransactClientConfigurationSection,
    ) -> Self {
        self.sections.insert(name.into(), section);
        self
    }
}

impl ConfigurationSectionSource for MockSections {
    fn get_section(&self, name: &str) -> Option<TransactClientConfigurationSection> {
        self.sections.get(name).cloned()
    }
}

/// App settings with every field set under `prefix`.
#[allow(dead_code)]
pub fn full_app_settings(prefix: &str) -> InMemoryAppSettings {
    InMemoryAppSettings::new()
        .with_value(format!("{}PodNumber", prefix), "1")
        .with_value(format!("{}Username", prefix), "alice")
        .with_value(format!("{}Password", prefix), "secret")
        .with_value(format!("{}OAuthClientId", prefix), "client-id")
        .with_value(format!("{}OAuthClientSecret", prefix), "client-secret")
        .with_value(format!("{}OAuthRefreshToken", prefix), "refresh-token")
}

/// Creates a temporary file with the given content.
#[allow(dead_code)]
pub fn create_temp_yaml(content: &str) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// Sets environment variables and removes them on drop.
#[allow(dead_code)]
pub struct EnvGuard {
    keys: Vec<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Creates an empty guard.
    pub fn new() -> Self {
        EnvGuard { keys: Vec::new() }
    }

    /// Sets a variable for the lifetime of the guard.
    pub fn set(&mut self, key: &str, value: &str) {
        env::set_var(key, value);
        self.keys.push(key.to_string());
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            env::remove_var(key);
        }
    }
}
