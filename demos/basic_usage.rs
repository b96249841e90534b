// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the Transact client.
//!
//! This example demonstrates:
//! - Resolving the client configuration from environment variables
//! - Falling back to a YAML configuration file
//! - Building a message with personalized recipients
//!
//! To run this example:
//! ```bash
//! export TRANSACT__PodNumber="1"
//! export TRANSACT__Username="alice"
//!
//! cargo run --example basic_usage
//! ```

use transact_client::prelude::*;

personalization_tags! {
    struct WelcomeTags {
        #[tag_name = "First Name"]
        first_name: String,
        plan: Option<String>,
    }
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== Transact Client: Basic Usage ===\n");

    let provider = TransactClientConfigurationProvider::with_prefix("TRANSACT:");
    let settings = EnvAppSettings::new().with_key_filter("TRANSACT:");

    let config = match provider.get_from_app_settings(&settings) {
        Some(config) => {
            println!("✓ Configuration found in environment variables");
            Some(config)
        }
        None => {
            println!("✗ No TRANSACT__* variables, trying config.yaml");
            YamlConfiguration::from_default_location("transact", "com.example")
                .ok()
                .map(|yaml| provider.get_from_configuration(Some(&yaml)))
                .transpose()?
                .flatten()
        }
    };

    match config.filter(|c| !c.is_empty()) {
        Some(config) => println!(
            "  pod={:?} username={:?} oauth client={:?}",
            config.pod_number, config.username, config.oauth_client_id
        ),
        None => println!("  No usable configuration"),
    }

    let tags = WelcomeTags {
        first_name: "Alice".to_string(),
        plan: None,
    };
    let recipient = TransactMessageRecipient::create_with_tags(
        Some("alice@example.com"),
        Some(&tags),
        TransactMessageRecipientBodyType::Html,
    )?;

    let message = TransactMessage::new("welcome-campaign")
        .with_transaction_id("signup-1")
        .add_recipient(recipient);

    println!("\n--- Message ---");
    for recipient in message.recipients() {
        println!("{} ({:?})", recipient.email_address, recipient.body_type);
        for tag in &recipient.personalization_tags {
            println!("  {} = {:?}", tag.name, tag.value);
        }
    }

    Ok(())
}
