// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings store trait definitions.
//!
//! The client configuration can come from three kinds of ambient stores. Each
//! is a read-only port implemented by the adapters layer (or by the host
//! application):
//!
//! - [`AppSettings`]: a flat string-keyed store with key enumeration
//! - [`Configuration`]: a hierarchical store addressed by path
//! - [`ConfigurationSectionSource`]: a store of typed named sections

use crate::domain::TransactClientConfigurationSection;

/// A flat, string-keyed settings store.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow for use in multi-threaded contexts.
///
/// # Examples
///
/// ```rust
/// use transact_client::ports::AppSettings;
///
/// struct Single;
///
/// impl AppSettings for Single {
///     fn all_keys(&self) -> Vec<String> {
///         vec!["app:Username".to_string()]
///     }
///
///     fn get(&self, key: &str) -> Option<String> {
///         (key == "app:Username").then(|| "alice".to_string())
///     }
/// }
///
/// assert_eq!(Single.get("app:Username").as_deref(), Some("alice"));
/// ```
pub trait AppSettings: Send + Sync {
    /// Returns every key in the store.
    fn all_keys(&self) -> Vec<String>;

    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
}

/// A hierarchical configuration store.
///
/// Paths join segments with the store's separator (`:` for the adapters in
/// this crate), so `silverpop-dotnet-api:podNumber` addresses the
/// `podNumber` entry below `silverpop-dotnet-api`.
pub trait Configuration: Send + Sync {
    /// Returns the value at `path`, if any.
    fn get(&self, path: &str) -> Option<String>;
}

/// A store of named configuration sections.
pub trait ConfigurationSectionSource: Send + Sync {
    /// Returns the section called `name`, or `None` when it is not defined.
    fn get_section(&self, name: &str) -> Option<TransactClientConfigurationSection>;
}
