// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client configuration provider.
//!
//! This module resolves a [`TransactClientConfiguration`] from one of three
//! kinds of store. The strategies are independent; callers pick the one that
//! matches their host environment.

use crate::domain::client_configuration::{parse_pod_number, value_or_none};
use crate::domain::{Result, TransactClientConfiguration, TransactError};
use crate::ports::{AppSettings, Configuration, ConfigurationSectionSource};

/// Prefix used when none is configured.
pub const DEFAULT_APP_SETTINGS_PREFIX: &str = "silverpop-dotnet-api:";

/// Name of the section read by
/// [`get_from_configuration_section`](TransactClientConfigurationProvider::get_from_configuration_section).
pub const DEFAULT_SECTION_NAME: &str = "transactClientConfiguration";

/// Setting names for one key casing convention.
struct FieldNames {
    pod_number: &'static str,
    username: &'static str,
    password: &'static str,
    oauth_client_id: &'static str,
    oauth_client_secret: &'static str,
    oauth_refresh_token: &'static str,
}

/// Names used by flat app settings.
const APP_SETTINGS_FIELDS: FieldNames = FieldNames {
    pod_number: "PodNumber",
    username: "Username",
    password: "Password",
    oauth_client_id: "OAuthClientId",
    oauth_client_secret: "OAuthClientSecret",
    oauth_refresh_token: "OAuthRefreshToken",
};

/// Names used by hierarchical configuration.
const CONFIGURATION_FIELDS: FieldNames = FieldNames {
    pod_number: "podNumber",
    username: "username",
    password: "password",
    oauth_client_id: "oAuthClientId",
    oauth_client_secret: "oAuthClientSecret",
    oauth_refresh_token: "oAuthRefreshToken",
};

/// Resolves the client configuration from settings stores.
///
/// # Examples
///
/// ```rust
/// use transact_client::adapters::InMemoryAppSettings;
/// use transact_client::service::TransactClientConfigurationProvider;
///
/// let settings = InMemoryAppSettings::new()
///     .with_value("silverpop-dotnet-api:PodNumber", "5")
///     .with_value("silverpop-dotnet-api:Username", "alice");
///
/// let provider = TransactClientConfigurationProvider::new();
/// let config = provider.get_from_app_settings(&settings).unwrap();
/// assert_eq!(config.pod_number, Some(5));
/// assert_eq!(config.username.as_deref(), Some("alice"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactClientConfigurationProvider {
    app_settings_prefix: String,
}

impl TransactClientConfigurationProvider {
    /// Creates a provider using [`DEFAULT_APP_SETTINGS_PREFIX`].
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_APP_SETTINGS_PREFIX)
    }

    /// Creates a provider with a custom prefix.
    ///
    /// Include any separator characters as part of the prefix.
    pub fn with_prefix(app_settings_prefix: impl Into<String>) -> Self {
        Self {
            app_settings_prefix: app_settings_prefix.into(),
        }
    }

    /// Returns the prefix prepended to every setting name.
    pub fn prefix(&self) -> &str {
        &self.app_settings_prefix
    }

    /// Resolves the configuration from flat, prefixed app settings.
    ///
    /// Returns `None` when no key in the store starts with the prefix.
    /// Otherwise every field is looked up under `prefix + FieldName`; blank
    /// values and a pod number that is not an integer are left unset.
    pub fn get_from_app_settings(
        &self,
        settings: &dyn AppSettings,
    ) -> Option<TransactClientConfiguration> {
        let has_prefixed_key = settings
            .all_keys()
            .iter()
            .any(|key| key.starts_with(self.app_settings_prefix.as_str()));

        if !has_prefixed_key {
            tracing::debug!(
                "No app settings start with prefix '{}'",
                self.app_settings_prefix
            );
            return None;
        }

        Some(self.resolve(&APP_SETTINGS_FIELDS, |key| settings.get(key)))
    }

    /// Resolves the configuration from a hierarchical configuration store.
    ///
    /// Fails with [`TransactError::NullArgument`] when no store is given.
    /// Unlike [`get_from_app_settings`](Self::get_from_app_settings) this does
    /// not check for the presence of any prefixed key first, so a store with
    /// no matching entries yields an empty configuration rather than `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use transact_client::adapters::YamlConfiguration;
    /// use transact_client::service::TransactClientConfigurationProvider;
    ///
    /// let yaml = "silverpop-dotnet-api:\n  podNumber: 5\n  oAuthClientId: id\n";
    /// let configuration = YamlConfiguration::from_str(yaml).unwrap();
    ///
    /// let provider = TransactClientConfigurationProvider::new();
    /// let config = provider
    ///     .get_from_configuration(Some(&configuration))
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(config.oauth_client_id.as_deref(), Some("id"));
    ///
    /// assert!(provider
    ///     .get_from_configuration(None::<&YamlConfiguration>)
    ///     .is_err());
    /// ```
    pub fn get_from_configuration<C>(
        &self,
        configuration: Option<&C>,
    ) -> Result<Option<TransactClientConfiguration>>
    where
        C: Configuration + ?Sized,
    {
        let configuration =
            configuration.ok_or_else(|| TransactError::null_argument("configuration"))?;

        Ok(Some(self.resolve(&CONFIGURATION_FIELDS, |key| {
            configuration.get(key)
        })))
    }

    /// Resolves the configuration from the `transactClientConfiguration` section.
    ///
    /// Returns `None` when the section is not defined. The section's pod
    /// number is copied as-is; blank strings are left unset.
    pub fn get_from_configuration_section(
        &self,
        sections: &dyn ConfigurationSectionSource,
    ) -> Option<TransactClientConfiguration> {
        let Some(section) = sections.get_section(DEFAULT_SECTION_NAME) else {
            tracing::debug!("Configuration section '{}' not found", DEFAULT_SECTION_NAME);
            return None;
        };

        Some(TransactClientConfiguration {
            pod_number: Some(section.pod_number),
            username: value_or_none(section.username.as_deref()),
            password: value_or_none(section.password.as_deref()),
            oauth_client_id: value_or_none(section.oauth_client_id.as_deref()),
            oauth_client_secret: value_or_none(section.oauth_client_secret.as_deref()),
            oauth_refresh_token: value_or_none(section.oauth_refresh_token.as_deref()),
        })
    }

    /// Builds a configuration by looking up every field under the prefix.
    fn resolve<F>(&self, names: &FieldNames, lookup: F) -> TransactClientConfiguration
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| {
            let key = format!("{}{}", self.app_settings_prefix, name);
            let raw = lookup(&key);
            value_or_none(raw.as_deref())
        };

        TransactClientConfiguration {
            pod_number: parse_pod_number(value(names.pod_number).as_deref()),
            username: value(names.username),
            password: value(names.password),
            oauth_client_id: value(names.oauth_client_id),
            oauth_client_secret: value(names.oauth_client_secret),
            oauth_refresh_token: value(names.oauth_refresh_token),
        }
    }
}

impl Default for TransactClientConfigurationProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryAppSettings;
    use crate::domain::TransactClientConfigurationSection;
    use std::collections::HashMap;

    struct MapConfiguration(HashMap<String, String>);

    impl Configuration for MapConfiguration {
        fn get(&self, path: &str) -> Option<String> {
            self.0.get(path).cloned()
        }
    }

    struct FixedSection(Option<TransactClientConfigurationSection>);

    impl ConfigurationSectionSource for FixedSection {
        fn get_section(&self, name: &str) -> Option<TransactClientConfigurationSection> {
            if name == DEFAULT_SECTION_NAME {
                self.0.clone()
            } else {
                None
            }
        }
    }

    fn all_app_settings(prefix: &str) -> InMemoryAppSettings {
        InMemoryAppSettings::new()
            .with_value(format!("{}PodNumber", prefix), "0")
            .with_value(format!("{}Username", prefix), "alice")
            .with_value(format!("{}Password", prefix), "secret")
            .with_value(format!("{}OAuthClientId", prefix), "client-id")
            .with_value(format!("{}OAuthClientSecret", prefix), "client-secret")
            .with_value(format!("{}OAuthRefreshToken", prefix), "refresh-token")
    }

    #[test]
    fn test_default_prefix() {
        let provider = TransactClientConfigurationProvider::default();
        assert_eq!(provider.prefix(), "silverpop-dotnet-api:");
    }

    #[test]
    fn test_app_settings_not_found() {
        let provider = TransactClientConfigurationProvider::new();
        let settings = InMemoryAppSettings::new().with_value("unrelated:Username", "alice");
        assert!(provider.get_from_app_settings(&settings).is_none());
    }

    #[test]
    fn test_app_settings_prefix_is_case_sensitive() {
        let provider = TransactClientConfigurationProvider::new();
        let settings =
            InMemoryAppSettings::new().with_value("SILVERPOP-DOTNET-API:Username", "alice");
        assert!(provider.get_from_app_settings(&settings).is_none());
    }

    #[test]
    fn test_app_settings_all_fields() {
        let provider = TransactClientConfigurationProvider::new();
        let config = provider
            .get_from_app_settings(&all_app_settings("silverpop-dotnet-api:"))
            .unwrap();

        assert_eq!(
            config,
            TransactClientConfiguration {
                pod_number: Some(0),
                username: Some("alice".to_string()),
                password: Some("secret".to_string()),
                oauth_client_id: Some("client-id".to_string()),
                oauth_client_secret: Some("client-secret".to_string()),
                oauth_refresh_token: Some("refresh-token".to_string()),
            }
        );
    }

    #[test]
    fn test_app_settings_custom_prefix() {
        let provider = TransactClientConfigurationProvider::with_prefix("transact.");
        let config = provider
            .get_from_app_settings(&all_app_settings("transact."))
            .unwrap();
        assert_eq!(config.username.as_deref(), Some("alice"));
    }

    #[test]
    fn test_app_settings_prefixed_but_unknown_key_is_found() {
        let provider = TransactClientConfigurationProvider::new();
        let settings = InMemoryAppSettings::new().with_value("silverpop-dotnet-api:Other", "x");

        let config = provider.get_from_app_settings(&settings).unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn test_app_settings_blank_values() {
        let provider = TransactClientConfigurationProvider::new();
        let settings = InMemoryAppSettings::new()
            .with_value("silverpop-dotnet-api:Username", "")
            .with_value("silverpop-dotnet-api:Password", "   ")
            .with_value("silverpop-dotnet-api:PodNumber", " ");

        let config = provider.get_from_app_settings(&settings).unwrap();
        assert_eq!(config.username, None);
        assert_eq!(config.password, None);
        assert_eq!(config.pod_number, None);
    }

    #[test]
    fn test_app_settings_field_names_are_case_sensitive() {
        let provider = TransactClientConfigurationProvider::new();
        let settings =
            InMemoryAppSettings::new().with_value("silverpop-dotnet-api:username", "alice");

        let config = provider.get_from_app_settings(&settings).unwrap();
        assert_eq!(config.username, None);
    }

    #[test]
    fn test_configuration_null() {
        let provider = TransactClientConfigurationProvider::new();
        let err = provider
            .get_from_configuration::<MapConfiguration>(None)
            .unwrap_err();
        assert!(matches!(
            err,
            TransactError::NullArgument { ref param } if param == "configuration"
        ));
    }

    #[test]
    fn test_configuration_camel_case_fields() {
        let mut values = HashMap::new();
        values.insert("silverpop-dotnet-api:podNumber".to_string(), "3".to_string());
        values.insert("silverpop-dotnet-api:username".to_string(), "alice".to_string());
        values.insert("silverpop-dotnet-api:oAuthClientSecret".to_string(), "s".to_string());
        values.insert("silverpop-dotnet-api:Password".to_string(), "ignored".to_string());
        let configuration = MapConfiguration(values);

        let provider = TransactClientConfigurationProvider::new();
        let config = provider
            .get_from_configuration(Some(&configuration))
            .unwrap()
            .unwrap();

        assert_eq!(config.pod_number, Some(3));
        assert_eq!(config.username.as_deref(), Some("alice"));
        assert_eq!(config.oauth_client_secret.as_deref(), Some("s"));
        assert_eq!(config.password, None);
    }

    #[test]
    fn test_configuration_empty_is_still_some() {
        let configuration = MapConfiguration(HashMap::new());
        let provider = TransactClientConfigurationProvider::new();

        let config = provider
            .get_from_configuration(Some(&configuration))
            .unwrap()
            .unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn test_configuration_unparseable_pod_number() {
        let mut values = HashMap::new();
        values.insert("silverpop-dotnet-api:podNumber".to_string(), "abc".to_string());
        let configuration = MapConfiguration(values);

        let provider = TransactClientConfigurationProvider::new();
        let config = provider
            .get_from_configuration(Some(&configuration))
            .unwrap()
            .unwrap();
        assert_eq!(config.pod_number, None);
    }

    #[test]
    fn test_section_missing() {
        let provider = TransactClientConfigurationProvider::new();
        assert!(provider
            .get_from_configuration_section(&FixedSection(None))
            .is_none());
    }

    #[test]
    fn test_section_copies_fields() {
        let section = TransactClientConfigurationSection {
            pod_number: 4,
            username: Some("alice".to_string()),
            password: Some("  ".to_string()),
            oauth_client_id: Some(String::new()),
            oauth_client_secret: None,
            oauth_refresh_token: Some("token".to_string()),
        };

        let provider = TransactClientConfigurationProvider::new();
        let config = provider
            .get_from_configuration_section(&FixedSection(Some(section)))
            .unwrap();

        assert_eq!(
            config,
            TransactClientConfiguration {
                pod_number: Some(4),
                username: Some("alice".to_string()),
                password: None,
                oauth_client_id: None,
                oauth_client_secret: None,
                oauth_refresh_token: Some("token".to_string()),
            }
        );
    }

    #[test]
    fn test_section_ignores_prefix() {
        let provider = TransactClientConfigurationProvider::with_prefix("custom:");
        let section = TransactClientConfigurationSection {
            username: Some("alice".to_string()),
            ..Default::default()
        };

        let config = provider
            .get_from_configuration_section(&FixedSection(Some(section)))
            .unwrap();
        assert_eq!(config.username.as_deref(), Some("alice"));
        assert_eq!(config.pod_number, Some(0));
    }
}
