// SPDX-License-Identifier: MIT OR Apache-2.0

//! The transactional message request model.

use crate::domain::recipient::TransactMessageRecipient;
use serde::{Deserialize, Serialize};

/// A transactional message addressed to one or more recipients.
///
/// # Examples
///
/// ```
/// use transact_client::domain::{TransactMessage, TransactMessageRecipient};
///
/// let recipient = TransactMessageRecipient::create(Some("a@b.com"), Default::default()).unwrap();
/// let message = TransactMessage::new("12345")
///     .with_transaction_id("order-1")
///     .with_save_columns(["FirstName"])
///     .add_recipient(recipient);
///
/// assert_eq!(message.campaign_id.as_deref(), Some("12345"));
/// assert_eq!(message.recipients().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactMessage {
    /// Group of automated messages this message is sent under
    pub campaign_id: Option<String>,
    /// Caller-supplied identifier echoed back in send details
    pub transaction_id: Option<String>,
    /// Request per-recipient send detail in the response
    pub show_all_send_detail: bool,
    /// Queue the message for batch delivery instead of sending immediately
    pub send_as_batch: bool,
    /// Do not retry delivery when the first attempt fails
    pub no_retry_on_failure: bool,
    /// Personalization tag names whose values are stored with the send record
    pub save_columns: Vec<String>,
    /// Message recipients, in send order
    pub recipients: Vec<TransactMessageRecipient>,
}

impl TransactMessage {
    /// Creates a message for the given campaign.
    pub fn new(campaign_id: impl Into<String>) -> Self {
        Self {
            campaign_id: Some(campaign_id.into()),
            ..Default::default()
        }
    }

    /// Sets the transaction id.
    pub fn with_transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self
    }

    /// Sets whether per-recipient send detail is requested.
    pub fn with_show_all_send_detail(mut self, enabled: bool) -> Self {
        self.show_all_send_detail = enabled;
        self
    }

    /// Sets whether the message is sent as a batch.
    pub fn with_send_as_batch(mut self, enabled: bool) -> Self {
        self.send_as_batch = enabled;
        self
    }

    /// Sets whether failed deliveries are retried.
    pub fn with_no_retry_on_failure(mut self, enabled: bool) -> Self {
        self.no_retry_on_failure = enabled;
        self
    }

    /// Replaces the saved columns.
    pub fn with_save_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.save_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a recipient.
    pub fn add_recipient(mut self, recipient: TransactMessageRecipient) -> Self {
        self.recipients.push(recipient);
        self
    }

    /// Returns the recipients in send order.
    pub fn recipients(&self) -> &[TransactMessageRecipient] {
        &self.recipients
    }
}
