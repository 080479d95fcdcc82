//! Scripted walk through the support desk against the mock service.
//!
//! Plays the part of the web front-end: lists tickets, submits the
//! open-ticket form while the list reloads, opens a ticket conversation and
//! replies to it. Every envelope is printed as JSON.

use anyhow::Context;
use serde::Serialize;
use services::ticket_form::TicketForm;
use services::ticket_thread::TicketThread;
use services::{CreateTicket, TicketService};
use tracing_appender::rolling;
use util::config::AppConfig;

const DETAIL_TICKET_ID: &str = "2";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::global().clone();
    let _log_guard = init_logging(&config);

    tracing::info!(project = %config.project_name, "starting support desk session");
    let service = TicketService::default();

    // My tickets
    let listed = service.list_tickets().await?;
    print_json("listTickets", &listed)?;
    for ticket in &listed.data {
        println!(
            "  #{} [{}] {} ({}, {})",
            ticket.id,
            ticket.status.label(),
            ticket.title,
            ticket.category.label(),
            ticket.priority.label()
        );
    }

    // Submit a new ticket while the list reloads; neither call sees the other.
    let mut form = TicketForm {
        title: "Cannot log in to the billing portal".into(),
        description: "The page reloads after I enter my password.".into(),
        category: "billing".into(),
        priority: "high".into(),
    };
    let (created, reloaded) = tokio::join!(form.submit(&service), service.list_tickets());
    let created = created.context("submitting the open-ticket form")?;
    print_json("createTicket", &created)?;
    println!(
        "  reloaded list still has {} tickets; new ticket #{} is not among them",
        reloaded?.data.len(),
        created.id
    );

    // Empty form
    if let Err(err) = TicketForm::default().submit(&service).await {
        println!("  form rejected: {err}");
    }

    // Ticket details
    let Some(mut thread) = TicketThread::open(&service, DETAIL_TICKET_ID).await? else {
        println!("Ticket not found");
        return Ok(());
    };
    println!("\nTicket #{}: {}", thread.ticket().id, thread.ticket().title);

    if let Err(err) = thread.reply(&service, "   ").await {
        println!("  reply rejected: {err}");
    }
    thread
        .reply(&service, "The flicker stops when I swap the cable.")
        .await
        .context("replying to ticket")?;
    print_json("activities", thread.activities())?;

    // A backend outage, as the UI would report it
    let outage = service.clone().failing();
    let attempt = outage
        .create_ticket(CreateTicket {
            title: "Retry me".into(),
            description: "Submitted during an outage.".into(),
            category: "other".into(),
            priority: "low".into(),
        })
        .await;
    if let Err(err) = attempt {
        tracing::warn!(error = %err, "create failed");
        println!("\n  createTicket failed: {err}");
    }

    tracing::info!("session finished");
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(label: &str, value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value)
        .with_context(|| format!("serializing {label}"))?;
    println!("\n{label}:\n{rendered}");
    Ok(())
}

fn init_logging(config: &AppConfig) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", &config.log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true)
        .with_thread_ids(true);

    let env_filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("desk=info"));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if config.log_to_stdout {
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }

    guard
}
