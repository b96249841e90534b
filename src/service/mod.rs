// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration provider.
//!
//! The provider turns whatever settings store the host application has into
//! a typed [`TransactClientConfiguration`](crate::domain::TransactClientConfiguration).

pub mod configuration_provider;

// Re-export commonly used types
pub use configuration_provider::{
    TransactClientConfigurationProvider, DEFAULT_APP_SETTINGS_PREFIX, DEFAULT_SECTION_NAME,
};
