// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Transact client.
//!
//! Absence of configuration is never an error here: resolvers return `None`
//! for "not found" and treat unparseable values as absent. The variants below
//! cover missing required inputs and failures in the configuration adapters.

use thiserror::Error;

/// The main error type for Transact client operations.
///
/// # Examples
///
/// ```
/// use transact_client::domain::errors::TransactError;
///
/// let error = TransactError::null_argument("email_address");
/// assert_eq!(
///     error.to_string(),
///     "Value cannot be null. (Parameter 'email_address')"
/// );
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransactError {
    /// A required input was not supplied.
    #[error("Value cannot be null. (Parameter '{param}')")]
    NullArgument {
        /// The name of the missing parameter
        param: String,
    },

    /// An error occurred in a configuration source.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse a configuration document.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TransactError {
    /// Creates a `NullArgument` error for the named parameter.
    pub fn null_argument(param: impl Into<String>) -> Self {
        TransactError::NullArgument {
            param: param.into(),
        }
    }
}

/// A specialized Result type for Transact client operations.
pub type Result<T> = std::result::Result<T, TransactError>;
