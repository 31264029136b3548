//! Developer console for the Painel data layer.
//!
//! Every store operation is reachable from here, so the whole
//! fetch/cache/notify contract can be exercised against a live project
//! without a front-end build.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use painel_core::domains::deals::DealStore;
use painel_core::domains::email::EmailStore;
use painel_core::domains::organizations::{OrganizationStore, PartnerContactUpdate};
use painel_core::domains::team::TeamStore;
use painel_core::domains::whatsapp::WhatsappStore;
use painel_core::sanitize::sanitize_html;
use painel_core::{Config, Field, QueryCache, TracingNotifier, ViewScope};

#[derive(Parser)]
#[command(name = "dev", about = "Painel CRM dev console")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Organization partners and people
    Org {
        #[command(subcommand)]
        command: OrgCommand,
    },
    /// Team roster
    Team,
    /// Deals of an organization
    Deals { organization_id: String },
    /// Email history of a deal
    Email { deal_id: String },
    /// WhatsApp conversations and messages
    Wa {
        #[command(subcommand)]
        command: WaCommand,
    },
    /// Sanitize an HTML file and print the result
    Sanitize { path: PathBuf },
}

#[derive(Subcommand)]
enum OrgCommand {
    /// List partners of an organization
    Partners { organization_id: String },
    /// List people of an organization
    People { organization_id: String },
    /// Update a partner's contact fields; blank values clear the field
    UpdatePartner {
        partner_id: String,
        organization_id: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        whatsapp: Option<String>,
        #[arg(long)]
        postal_code: Option<String>,
    },
}

#[derive(Subcommand)]
enum WaCommand {
    /// List conversations, most recent first
    Conversations,
    /// List messages of a conversation
    Messages { conversation_id: String },
    /// Send a message into a conversation
    Send {
        conversation_id: String,
        content: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    let client: supabase::Supabase = config.client();
    let cache = Arc::new(QueryCache::new());
    let notifier = Arc::new(TracingNotifier);
    let scope = ViewScope::new();

    match cli.command {
        Command::Org { command } => {
            let store = OrganizationStore::new(client, cache, notifier);
            match command {
                OrgCommand::Partners { organization_id } => {
                    for partner in store.partners(&organization_id).await? {
                        println!(
                            "{}  {}  {}",
                            partner.name.as_str().bold(),
                            partner.email.as_deref().unwrap_or("-"),
                            partner.phone.as_deref().unwrap_or("-").dimmed(),
                        );
                    }
                }
                OrgCommand::People { organization_id } => {
                    for person in store.people(&organization_id).await? {
                        println!(
                            "{}  {}  {}",
                            person.name.as_str().bold(),
                            person.role.as_deref().unwrap_or("-"),
                            person.email.as_deref().unwrap_or("-").dimmed(),
                        );
                    }
                }
                OrgCommand::UpdatePartner {
                    partner_id,
                    organization_id,
                    email,
                    phone,
                    whatsapp,
                    postal_code,
                } => {
                    let update = PartnerContactUpdate {
                        email: field_from(email),
                        phone: field_from(phone),
                        whatsapp: field_from(whatsapp),
                        postal_code: field_from(postal_code),
                    };
                    let partner = store
                        .update_partner_contact(&scope, &partner_id, &organization_id, update)
                        .await?;
                    println!("{} {}", "updated".bright_green(), partner.name);
                }
            }
        }
        Command::Team => {
            let store = TeamStore::new(client, cache);
            for member in store.members().await? {
                println!("{}  {}", member.display_name.as_str().bold(), member.email);
            }
        }
        Command::Deals { organization_id } => {
            let store = DealStore::new(client, cache);
            for deal in store.deals(&organization_id).await? {
                let value = deal
                    .value_cents
                    .map(|cents| format!("R$ {}.{:02}", cents / 100, cents % 100))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{}  {}  {}",
                    deal.title.as_str().bold(),
                    deal.stage.label(),
                    value.dimmed(),
                );
            }
        }
        Command::Email { deal_id } => {
            let store = EmailStore::new(client, cache);
            for message in store.history(&deal_id).await? {
                println!(
                    "{}  {}  {}",
                    message.sent_at.format("%Y-%m-%d %H:%M"),
                    message.from_address.as_str().dimmed(),
                    message.subject.as_str().bold(),
                );
            }
        }
        Command::Wa { command } => {
            let store = WhatsappStore::new(client, cache, notifier);
            match command {
                WaCommand::Conversations => {
                    for conversation in store.conversations().await? {
                        println!(
                            "{}  {}  {} unread",
                            conversation.contact_name.as_str().bold(),
                            conversation.contact_phone,
                            conversation.unread_count,
                        );
                    }
                }
                WaCommand::Messages { conversation_id } => {
                    for message in store.messages(&conversation_id).await? {
                        println!(
                            "{}  {}",
                            message.sent_at.format("%H:%M").to_string().dimmed(),
                            message.content,
                        );
                    }
                }
                WaCommand::Send {
                    conversation_id,
                    content,
                } => {
                    store.send_message(&scope, &conversation_id, &content).await?;
                    println!("{}", "sent".bright_green());
                }
            }
        }
        Command::Sanitize { path } => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            println!("{}", sanitize_html(&raw));
        }
    }

    Ok(())
}

fn field_from(input: Option<String>) -> Field<String> {
    match input {
        Some(value) => Field::from_input(value),
        None => Field::Keep,
    }
}
