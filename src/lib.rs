// SPDX-License-Identifier: MIT OR Apache-2.0

//! A client library for the Transact transactional email API.
//!
//! This crate provides the typed request model (messages, recipients and
//! personalization tags) and resolves the client configuration (pod number,
//! credentials and OAuth settings) from whatever settings store the host
//! application uses.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`TransactClientConfiguration`,
//!   `TransactMessageRecipient`, `TransactMessage`, errors)
//! - **Ports**: Traits for settings stores (`AppSettings`, `Configuration`,
//!   `ConfigurationSectionSource`) and tags objects (`PersonalizationTagSource`)
//! - **Adapters**: Store implementations (in-memory, environment, YAML)
//! - **Service**: The configuration provider
//!
//! # Configuration Strategies
//!
//! - **Flat app settings**: keys like `silverpop-dotnet-api:Username`; the
//!   result is `None` when no key carries the prefix
//! - **Hierarchical configuration**: paths like `silverpop-dotnet-api:username`
//! - **Configuration section**: a typed `transactClientConfiguration` section
//!
//! # Feature Flags
//!
//! - `yaml`: Enable the YAML-backed configuration and section adapters (default)
//! - `env`: Enable the environment variable app settings adapter (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use transact_client::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let settings = InMemoryAppSettings::new()
//!     .with_value("silverpop-dotnet-api:PodNumber", "1")
//!     .with_value("silverpop-dotnet-api:Username", "alice");
//! let config = TransactClientConfigurationProvider::new()
//!     .get_from_app_settings(&settings)
//!     .expect("settings are present");
//! assert_eq!(config.pod_number, Some(1));
//!
//! personalization_tags! {
//!     struct OrderTags {
//!         #[tag_name = "Order Number"]
//!         order_number: u32,
//!         coupon: Option<String>,
//!     }
//! }
//!
//! let tags = OrderTags { order_number: 1001, coupon: None };
//! let recipient = TransactMessageRecipient::create_with_tags(
//!     Some("alice@example.com"),
//!     Some(&tags),
//!     TransactMessageRecipientBodyType::Html,
//! )?;
//! let message = TransactMessage::new("campaign-1").add_recipient(recipient);
//!
//! let tag = &message.recipients()[0].personalization_tags[0];
//! assert_eq!(tag.name, "Order Number");
//! assert_eq!(tag.value.as_deref(), Some("1001"));
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        PersonalizationTag, Result, TransactClientConfiguration,
        TransactClientConfigurationSection, TransactError, TransactMessage,
        TransactMessageRecipient, TransactMessageRecipientBodyType,
    };
    pub use crate::personalization_tags;
    pub use crate::ports::{
        AppSettings, Configuration, ConfigurationSectionSource, PersonalizationTagSource,
        TagField, TagValue,
    };
    pub use crate::service::TransactClientConfigurationProvider;

    // Re-export adapters based on feature flags
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvAppSettings;
    pub use crate::adapters::InMemoryAppSettings;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::{YamlConfiguration, YamlSectionSource};
}
