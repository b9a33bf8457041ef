use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skybook_app::{view, AppController, AppSnapshot};
use skybook_catalog::{FixedLatency, FlightCatalog, SearchService};
use skybook_core::{CredentialsForm, Passengers, SearchForm, TravelClass};
use skybook_store::{Config, LocalStorage, SessionStore};

type Lines = io::Lines<io::StdinLock<'static>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skybook=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!(
        "Starting SkyBook ({}ms simulated search latency)",
        config.search.latency_ms
    );

    let storage = LocalStorage::open(config.storage.resolve_dir())
        .context("Failed to open durable storage")?;
    let sessions = SessionStore::open(storage);

    let search = SearchService::new(
        Arc::new(FlightCatalog::seed()),
        Arc::new(FixedLatency(Duration::from_millis(config.search.latency_ms))),
    );

    let mut controller = AppController::new(search, sessions);
    let mut snapshots = controller.subscribe();

    run(&mut controller, &mut snapshots).await
}

async fn run(
    controller: &mut AppController,
    snapshots: &mut watch::Receiver<AppSnapshot>,
) -> anyhow::Result<()> {
    let mut lines: Lines = io::stdin().lock().lines();

    redraw(snapshots);
    print_help();

    loop {
        print!("skybook> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let input = line.trim();

        match input.split_whitespace().next().unwrap_or("") {
            "" => continue,
            "search" => {
                let form = read_search_form(&mut lines)?;
                controller
                    .submit_search(form, Local::now().date_naive())
                    .await;
            }
            "login" => {
                let form = read_login_form(&mut lines)?;
                controller.submit_login(form);
            }
            "register" => {
                let form = read_register_form(&mut lines)?;
                controller.submit_register(form);
            }
            "book" => match input.split_whitespace().nth(1).map(str::parse) {
                Some(Ok(id)) => controller.book(id),
                _ => {
                    println!("Usage: book <flight id>");
                    continue;
                }
            },
            "logout" => controller.logout(),
            "help" => {
                print_help();
                continue;
            }
            "quit" | "exit" => break,
            other => {
                println!("Unknown command: {}", other);
                continue;
            }
        }

        redraw(snapshots);
    }

    Ok(())
}

/// Print the page rendered from the latest snapshot. The results section
/// is the bottom-most block, so after a search the terminal is left
/// looking at it.
fn redraw(snapshots: &mut watch::Receiver<AppSnapshot>) {
    let snapshot = snapshots.borrow_and_update().clone();
    println!("{}", view::render(&snapshot));
}

fn print_help() {
    println!("Commands: search, login, register, book <id>, logout, help, quit");
}

fn ask(lines: &mut Lines, label: &str) -> anyhow::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    match lines.next() {
        Some(line) => Ok(line?),
        None => Ok(String::new()),
    }
}

fn read_search_form(lines: &mut Lines) -> anyhow::Result<SearchForm> {
    let origin = ask(lines, "From")?;
    let destination = ask(lines, "To")?;
    let departure_date = read_date(lines, "Departure date (YYYY-MM-DD)")?;
    let return_date = read_date(lines, "Return date (YYYY-MM-DD, blank for one-way)")?;
    let passengers = Passengers::parse(&ask(lines, "Passengers (1-4, 5+)")?);
    let travel_class = TravelClass::parse(&ask(lines, "Class (economy/business/first)")?);

    Ok(SearchForm {
        origin,
        destination,
        departure_date,
        return_date,
        passengers,
        travel_class,
    })
}

fn read_date(lines: &mut Lines, label: &str) -> anyhow::Result<Option<NaiveDate>> {
    let raw = ask(lines, label)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Ok(Some(date)),
        Err(_) => {
            println!("Unrecognized date `{}`, leaving it blank", raw);
            Ok(None)
        }
    }
}

fn read_login_form(lines: &mut Lines) -> anyhow::Result<CredentialsForm> {
    Ok(CredentialsForm {
        email: ask(lines, "Email")?,
        password: ask(lines, "Password")?,
        ..CredentialsForm::default()
    })
}

fn read_register_form(lines: &mut Lines) -> anyhow::Result<CredentialsForm> {
    Ok(CredentialsForm {
        name: ask(lines, "Full name")?,
        email: ask(lines, "Email")?,
        password: ask(lines, "Password")?,
        confirm: ask(lines, "Confirm password")?,
    })
}
