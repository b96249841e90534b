// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the traits for the stores the configuration provider
//! reads from and the shape capability used to derive personalization tags.
//! The stores are implemented by adapters in the adapters layer.

pub mod personalization;
pub mod settings;

// Re-export commonly used types
pub use personalization::{PersonalizationTagSource, TagField, TagValue};
pub use settings::{AppSettings, Configuration, ConfigurationSectionSource};
