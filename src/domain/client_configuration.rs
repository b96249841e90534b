// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed client configuration.
//!
//! This module provides [`TransactClientConfiguration`], the single output type
//! of every configuration strategy, and [`TransactClientConfigurationSection`],
//! the typed record read from a named configuration section.

use serde::{Deserialize, Serialize};

/// Connection and credential settings for the Transact API.
///
/// Every field is optional. Blank values never appear here: resolvers
/// normalize empty and whitespace-only strings to `None`.
///
/// # Examples
///
/// ```
/// use transact_client::domain::TransactClientConfiguration;
///
/// let config = TransactClientConfiguration {
///     pod_number: Some(5),
///     username: Some("alice".to_string()),
///     ..Default::default()
/// };
/// assert!(!config.is_empty());
/// assert!(TransactClientConfiguration::default().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactClientConfiguration {
    /// Hosting partition the account lives on
    pub pod_number: Option<i32>,
    /// Account username
    pub username: Option<String>,
    /// Account password
    pub password: Option<String>,
    /// OAuth client id
    pub oauth_client_id: Option<String>,
    /// OAuth client secret
    pub oauth_client_secret: Option<String>,
    /// OAuth refresh token
    pub oauth_refresh_token: Option<String>,
}

impl TransactClientConfiguration {
    /// Returns `true` when no field carries a value.
    ///
    /// Callers should treat an empty configuration the same as one that was
    /// not found at all.
    pub fn is_empty(&self) -> bool {
        self.pod_number.is_none()
            && self.username.is_none()
            && self.password.is_none()
            && self.oauth_client_id.is_none()
            && self.oauth_client_secret.is_none()
            && self.oauth_refresh_token.is_none()
    }
}

/// The typed `transactClientConfiguration` section.
///
/// Unlike flat settings, the pod number is already an integer in the section
/// schema, so it is copied without parsing.
///
/// # Examples
///
/// ```
/// use transact_client::domain::TransactClientConfigurationSection;
///
/// let section = TransactClientConfigurationSection {
///     pod_number: 1,
///     username: Some("alice".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(section.pod_number, 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactClientConfigurationSection {
    /// Hosting partition the account lives on
    pub pod_number: i32,
    /// Account username
    pub username: Option<String>,
    /// Account password
    pub password: Option<String>,
    /// OAuth client id
    #[serde(rename = "oAuthClientId")]
    pub oauth_client_id: Option<String>,
    /// OAuth client secret
    #[serde(rename = "oAuthClientSecret")]
    pub oauth_client_secret: Option<String>,
    /// OAuth refresh token
    #[serde(rename = "oAuthRefreshToken")]
    pub oauth_refresh_token: Option<String>,
}

/// Maps blank or whitespace-only strings to `None`.
pub(crate) fn value_or_none(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

/// Parses a pod number, treating anything that is not an `i32` as absent.
///
/// Surrounding whitespace is allowed.
pub(crate) fn parse_pod_number(value: Option<&str>) -> Option<i32> {
    let raw = value?;
    match raw.trim().parse::<i32>() {
        Ok(pod_number) => Some(pod_number),
        Err(e) => {
            tracing::debug!("Ignoring unparseable pod number '{}': {}", raw, e);
            None
        }
    }
}
