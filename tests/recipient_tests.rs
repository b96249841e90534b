// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for building message recipients.

use transact_client::prelude::*;

personalization_tags! {
    #[allow(non_snake_case)]
    #[derive(Debug, Default)]
    pub struct TestPersonalizationTags {
        #[tag_name = "special"]
        pub Tag1: Option<String>,
        pub Tag2: Option<String>,
    }
}

personalization_tags! {
    #[derive(Debug, Default)]
    pub struct NoTags {}
}

#[test]
fn test_create_null_email_address() {
    let result = TransactMessageRecipient::create(None, Default::default());
    assert!(matches!(result, Err(TransactError::NullArgument { .. })));
}

#[test]
fn test_create_defaults() {
    let recipient =
        TransactMessageRecipient::create(Some("a@b.com"), Default::default()).unwrap();

    assert_eq!(recipient.email_address, "a@b.com");
    assert_eq!(recipient.body_type, TransactMessageRecipientBodyType::Default);
    assert!(recipient.personalization_tags.is_empty());
}

#[test]
fn test_create_sets_body_type() {
    let recipient = TransactMessageRecipient::create(
        Some("test@example.com"),
        TransactMessageRecipientBodyType::Text,
    )
    .unwrap();
    assert_eq!(recipient.body_type, TransactMessageRecipientBodyType::Text);
}

#[test]
fn test_create_with_tags_null_email_address() {
    let result = TransactMessageRecipient::create_with_tags(
        None,
        Some(&NoTags::default()),
        Default::default(),
    );
    assert!(matches!(result, Err(TransactError::NullArgument { .. })));
}

#[test]
fn test_create_with_tags_null_tags_object() {
    let result = TransactMessageRecipient::create_with_tags::<NoTags>(
        Some("test@example.com"),
        None,
        Default::default(),
    );
    assert!(matches!(result, Err(TransactError::NullArgument { .. })));
}

#[test]
fn test_create_with_tags_sets_email_and_body_type() {
    let recipient = TransactMessageRecipient::create_with_tags(
        Some("test@example.com"),
        Some(&NoTags::default()),
        TransactMessageRecipientBodyType::Html,
    )
    .unwrap();

    assert_eq!(recipient.email_address, "test@example.com");
    assert_eq!(recipient.body_type, TransactMessageRecipientBodyType::Html);
    assert!(recipient.personalization_tags.is_empty());
}

#[test]
fn test_create_with_tags_uses_override_and_keeps_null() {
    let tags = TestPersonalizationTags {
        Tag1: Some("v1".to_string()),
        Tag2: None,
    };
    let recipient = TransactMessageRecipient::create_with_tags(
        Some("test@example.com"),
        Some(&tags),
        Default::default(),
    )
    .unwrap();

    assert_eq!(
        recipient.personalization_tags,
        vec![
            PersonalizationTag::new("special", Some("v1")),
            PersonalizationTag::new("Tag2", None::<String>),
        ]
    );
}

#[test]
fn test_create_with_tags_all_values_present() {
    let tags = TestPersonalizationTags {
        Tag1: Some("tag1-value".to_string()),
        Tag2: Some("tag2-value".to_string()),
    };
    let recipient = TransactMessageRecipient::create_with_tags(
        Some("test@example.com"),
        Some(&tags),
        Default::default(),
    )
    .unwrap();

    let first = recipient.personalization_tags.first().unwrap();
    let last = recipient.personalization_tags.last().unwrap();
    assert_eq!(recipient.personalization_tags.len(), 2);
    assert_eq!(first.name, "special");
    assert_eq!(first.value.as_deref(), Some("tag1-value"));
    assert_eq!(last.name, "Tag2");
    assert_eq!(last.value.as_deref(), Some("tag2-value"));
}

#[test]
fn test_create_with_explicit_pairs() {
    let pairs = vec![("Tag1", Some("v1")), ("Tag2", None), ("Tag1", Some("v3"))];
    let recipient = TransactMessageRecipient::create_with_tags(
        Some("test@example.com"),
        Some(&pairs),
        Default::default(),
    )
    .unwrap();

    let tags: Vec<_> = recipient
        .personalization_tags
        .iter()
        .map(|t| (t.name.as_str(), t.value.as_deref()))
        .collect();
    assert_eq!(
        tags,
        vec![("Tag1", Some("v1")), ("Tag2", None), ("Tag1", Some("v3"))]
    );
}

#[test]
fn test_manual_recipient_keeps_null_value() {
    let recipient = TransactMessageRecipient {
        email_address: "test@example.com".to_string(),
        body_type: TransactMessageRecipientBodyType::Default,
        personalization_tags: vec![PersonalizationTag::new("Tag1", None::<String>)],
    };

    let copy = recipient.clone();
    assert_eq!(copy.personalization_tags[0].name, "Tag1");
    assert_eq!(copy.personalization_tags[0].value, None);
}

#[test]
fn test_message_collects_recipients() {
    let tags = TestPersonalizationTags {
        Tag1: Some("v1".to_string()),
        ..Default::default()
    };
    let with_tags = TransactMessageRecipient::create_with_tags(
        Some("first@example.com"),
        Some(&tags),
        Default::default(),
    )
    .unwrap();
    let plain = TransactMessageRecipient::create(
        Some("second@example.com"),
        TransactMessageRecipientBodyType::Text,
    )
    .unwrap();

    let message = TransactMessage::new("campaign")
        .with_transaction_id("tx-1")
        .with_save_columns(["special"])
        .add_recipient(with_tags)
        .add_recipient(plain);

    assert_eq!(message.recipients().len(), 2);
    assert_eq!(message.recipients()[0].personalization_tags.len(), 2);
    assert_eq!(message.recipients()[1].body_type, TransactMessageRecipientBodyType::Text);
    assert_eq!(message.transaction_id.as_deref(), Some("tx-1"));
}
