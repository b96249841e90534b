// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message recipients and their personalization tags.

use crate::domain::errors::{Result, TransactError};
use crate::ports::PersonalizationTagSource;
use serde::{Deserialize, Serialize};

/// How the provider renders the message body for a recipient.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactMessageRecipientBodyType {
    /// Use the body type configured on the mailing
    #[default]
    Default,
    /// Plain text body
    Text,
    /// HTML body
    Html,
}

/// A named substitution value inserted into a template at send time.
///
/// The value may be absent; an absent value is kept as `None` and never
/// turned into an empty string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalizationTag {
    /// Tag name as referenced by the template
    pub name: String,
    /// Tag value, if any
    pub value: Option<String>,
}

impl PersonalizationTag {
    /// Creates a new tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use transact_client::domain::PersonalizationTag;
    ///
    /// let tag = PersonalizationTag::new("FirstName", None::<String>);
    /// assert_eq!(tag.name, "FirstName");
    /// assert_eq!(tag.value, None);
    /// ```
    pub fn new(name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            value: value.map(Into::into),
        }
    }
}

/// A single recipient of a transactional message.
///
/// Recipients can be constructed manually, in which case nothing is
/// validated, or through [`create`](Self::create) and
/// [`create_with_tags`](Self::create_with_tags), which require an email
/// address.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactMessageRecipient {
    /// Recipient email address
    pub email_address: String,
    /// Body rendering for this recipient
    pub body_type: TransactMessageRecipientBodyType,
    /// Ordered personalization tags; names are not required to be unique
    pub personalization_tags: Vec<PersonalizationTag>,
}

impl TransactMessageRecipient {
    /// Creates a recipient without personalization tags.
    ///
    /// Only a missing address is rejected; an empty string is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use transact_client::domain::{TransactMessageRecipient, TransactMessageRecipientBodyType};
    ///
    /// let recipient = TransactMessageRecipient::create(
    ///     Some("a@b.com"),
    ///     TransactMessageRecipientBodyType::default(),
    /// )
    /// .unwrap();
    /// assert_eq!(recipient.email_address, "a@b.com");
    /// assert!(recipient.personalization_tags.is_empty());
    ///
    /// assert!(TransactMessageRecipient::create(None, Default::default()).is_err());
    /// ```
    pub fn create(
        email_address: Option<&str>,
        body_type: TransactMessageRecipientBodyType,
    ) -> Result<Self> {
        let email_address =
            email_address.ok_or_else(|| TransactError::null_argument("email_address"))?;

        Ok(Self {
            email_address: email_address.to_string(),
            body_type,
            personalization_tags: Vec::new(),
        })
    }

    /// Creates a recipient whose personalization tags are derived from `tags`.
    ///
    /// Each field of the source becomes exactly one tag, in declaration order.
    /// A field's override name wins over its own name when non-empty. Absent
    /// field values produce tags with a `None` value.
    ///
    /// # Examples
    ///
    /// ```
    /// use transact_client::domain::TransactMessageRecipient;
    ///
    /// let tags = [("FirstName", Some("Alice")), ("Coupon", None)];
    /// let recipient = TransactMessageRecipient::create_with_tags(
    ///     Some("a@b.com"),
    ///     Some(&tags[..]),
    ///     Default::default(),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(recipient.personalization_tags.len(), 2);
    /// assert_eq!(recipient.personalization_tags[1].value, None);
    /// ```
    pub fn create_with_tags<T>(
        email_address: Option<&str>,
        tags: Option<&T>,
        body_type: TransactMessageRecipientBodyType,
    ) -> Result<Self>
    where
        T: PersonalizationTagSource + ?Sized,
    {
        let mut recipient = Self::create(email_address, body_type)?;
        let tags = tags.ok_or_else(|| TransactError::null_argument("personalization_tags"))?;

        recipient.personalization_tags = tags
            .personalization_fields()
            .into_iter()
            .map(|field| {
                let name = match field.override_name {
                    Some(override_name) if !override_name.is_empty() => override_name,
                    _ => field.name,
                };
                PersonalizationTag {
                    name,
                    value: field.value,
                }
            })
            .collect();

        tracing::trace!(
            "Derived {} personalization tags for recipient",
            recipient.personalization_tags.len()
        );

        Ok(recipient)
    }
}
