use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use client_core::{load_settings, ContactSession, Field, HttpContactsBackend, SubmitOutcome};
use shared::domain::{Contact, ContactId};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Contact manager command line client")]
struct Cli {
    /// Base URL of the contacts API (overrides contacts.toml and env).
    #[arg(long)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    List,
    Add {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    Delete {
        id: String,
    },
}

fn format_contact(contact: &Contact) -> String {
    let mut line = format!(
        "{}  {}  {}  {}",
        contact.id, contact.name, contact.email, contact.phone
    );
    if !contact.message.is_empty() {
        line.push_str("  ");
        line.push_str(&contact.message);
    }
    line
}

fn print_contacts(contacts: &[Contact]) {
    if contacts.is_empty() {
        println!("No contacts found.");
        return;
    }
    for contact in contacts {
        println!("{}", format_contact(contact));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let settings = load_settings()?.with_api_base_url(cli.api_url.as_deref())?;
    tracing::info!(api = %settings.api_base_url, "contacts client starting");
    let backend = Arc::new(HttpContactsBackend::new(settings.api_base_url));
    let mut session = ContactSession::new(backend);

    match cli.command {
        Command::List => {
            session.start().await;
        }
        Command::Add {
            name,
            email,
            phone,
            message,
        } => {
            session.update_field(Field::Name, name);
            session.update_field(Field::Email, email);
            session.update_field(Field::Phone, phone);
            session.update_field(Field::Message, message);

            if let SubmitOutcome::Skipped = session.submit().await {
                for field in Field::REQUIRED {
                    if let Some(error) = session.form().error(field) {
                        eprintln!("{field}: {error}");
                    }
                }
                return Err(anyhow!("contact form is invalid"));
            }
        }
        Command::Delete { id } => {
            session.remove(&ContactId::new(id)).await;
        }
    }

    print_contacts(session.contacts());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_contact_with_and_without_message() {
        let mut contact = Contact {
            id: ContactId::from("1"),
            name: "Bo".into(),
            email: "bo@x.com".into(),
            phone: "1".into(),
            message: String::new(),
        };
        assert_eq!(format_contact(&contact), "1  Bo  bo@x.com  1");
        contact.message = "hi".into();
        assert_eq!(format_contact(&contact), "1  Bo  bo@x.com  1  hi");
    }

    #[test]
    fn parses_add_with_optional_message_omitted() {
        let cli = Cli::try_parse_from([
            "contacts", "add", "--name", "Ana", "--email", "ana@x.com", "--phone", "555",
        ])
        .expect("parse");
        match cli.command {
            Command::Add { name, message, .. } => {
                assert_eq!(name, "Ana");
                assert!(message.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
