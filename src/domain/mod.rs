// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing the client's core types.
//!
//! This module holds the typed client configuration, the message and recipient
//! model, and the error type. It does not depend on any configuration store.

pub mod client_configuration;
pub mod errors;
pub mod message;
pub mod recipient;

// Re-export commonly used types
pub use client_configuration::{TransactClientConfiguration, TransactClientConfigurationSection};
pub use errors::{Result, TransactError};
pub use message::TransactMessage;
pub use recipient::{
    PersonalizationTag, TransactMessageRecipient, TransactMessageRecipientBodyType,
};
