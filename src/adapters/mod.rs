// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing settings store implementations.
//!
//! This module contains concrete implementations of the store traits defined
//! in the ports layer. Host applications with their own stores can implement
//! the traits directly instead.

pub mod app_settings;
#[cfg(feature = "yaml")]
pub mod yaml_file;

#[cfg(feature = "env")]
pub use app_settings::EnvAppSettings;
pub use app_settings::InMemoryAppSettings;
#[cfg(feature = "yaml")]
pub use yaml_file::{YamlConfiguration, YamlSectionSource};
