//! # CLI Layer
//!
//! This module is **one possible client** for pethotel. It is the only place that
//! touches the terminal: it parses arguments, asks for passwords and confirmations,
//! formats results and turns errors into exit codes.
//!
//! ## Password Gate
//!
//! Once `pethotel init` has written the password file, every command other than
//! `init`, `login`, `passwd` and `help` needs a password that unlocks at least the
//! standard level. It is taken from `PETHOTEL_PASSWORD` when set, otherwise read
//! from stdin.
//!
//! ## Confirmation
//!
//! Delete, archive and unarchive ask `[y/N]` first unless `--yes` is given. A
//! declined action does nothing and prints nothing.

use super::render::{
    print, print_messages, render_booking_detail, render_bookings, render_config,
    render_customers, render_pets, render_rooms, render_schedule,
};
use super::setup::{
    command_path, print_grouped_help, print_help_for_command, BookingCommands, Cli, Commands,
    CustomerCommands, PetCommands,
};
use clap::Parser;
use pethotel::api::{CmdResult, ConfigAction, HotelApi};
use pethotel::auth::Credentials;
use pethotel::error::{HotelError, Result};
use pethotel::init::initialize;
use pethotel::model::BookingTier;
use pethotel::schedule::MonthView;
use pethotel::store::fs::FileStore;
use std::io::{BufRead, Write};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: HotelApi<FileStore>,
    password: Option<String>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.help {
        let path = command_path(&cli.command);
        if path.is_empty() {
            print_grouped_help();
        } else {
            print_help_for_command(&path);
        }
        return Ok(());
    }

    let Some(command) = cli.command else {
        print_grouped_help();
        return Ok(());
    };
    if let Commands::Help { command } = &command {
        return handle_help(command);
    }

    let ctx = initialize(cli.data)?;
    let mut ctx = AppContext {
        api: ctx.api,
        password: cli.password,
    };

    match command {
        Commands::Init { staff, admin } => handle_init(&ctx, staff, admin),
        Commands::Login => handle_login(&ctx),
        Commands::Passwd { new, new_admin } => handle_passwd(&ctx, new, new_admin),
        command => {
            require_login(&ctx)?;
            match command {
                Commands::Customer { action } => handle_customer(&mut ctx, action),
                Commands::Pet { action } => handle_pet(&mut ctx, action),
                Commands::Booking { action } => handle_booking(&mut ctx, action),
                Commands::Schedule { month, offset } => handle_schedule(&ctx, month, offset),
                Commands::Config { key, value } => handle_config(&mut ctx, key, value),
                Commands::Init { .. }
                | Commands::Login
                | Commands::Passwd { .. }
                | Commands::Help { .. } => Ok(()),
            }
        }
    }
}

/// Logs go to stderr: warnings by default, everything with `--verbose`,
/// and `RUST_LOG` overrides both.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_line(prompt: &str) -> Result<String> {
    eprint!("{}", prompt);
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn secret_or_prompt(given: Option<String>, prompt: &str) -> Result<String> {
    match given {
        Some(secret) => Ok(secret),
        None => read_line(prompt),
    }
}

fn confirm(question: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    let answer = read_line(&format!("{} [y/N] ", question))?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn require_login(ctx: &AppContext) -> Result<()> {
    if !Credentials::exists(&ctx.api.paths().data) {
        return Ok(());
    }
    let secret = secret_or_prompt(ctx.password.clone(), "Password: ")?;
    let level = ctx.api.login(&secret)?;
    tracing::debug!(%level, "logged in");
    Ok(())
}

fn finish(result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    Ok(())
}

fn handle_customer(ctx: &mut AppContext, action: CustomerCommands) -> Result<()> {
    match action {
        CustomerCommands::Add(fields) => finish(ctx.api.add_customer(fields.into())?),
        CustomerCommands::Edit { number, fields } => {
            finish(ctx.api.edit_customer(number, fields.into())?)
        }
        CustomerCommands::Delete { number, yes } => {
            let name = ctx.api.customer(number)?.full_name();
            if !confirm(&format!("Are you sure you want to delete {}?", name), yes)? {
                return Ok(());
            }
            finish(ctx.api.delete_customer(number)?)
        }
        CustomerCommands::List { search, page } => {
            let result = ctx.api.list_customers(&search.into(), page)?;
            print(render_customers(&result.listed_customers, result.page));
            finish(result)
        }
    }
}

fn handle_pet(ctx: &mut AppContext, action: PetCommands) -> Result<()> {
    match action {
        PetCommands::Add(fields) => finish(ctx.api.add_pet(fields.into())?),
        PetCommands::Edit { number, fields } => finish(ctx.api.edit_pet(number, fields.into())?),
        PetCommands::Delete { number, yes } => {
            let name = ctx.api.pet(number)?.name.clone();
            if !confirm(&format!("Are you sure you want to delete {}?", name), yes)? {
                return Ok(());
            }
            finish(ctx.api.delete_pet(number)?)
        }
        PetCommands::List { search, page } => {
            let result = ctx.api.list_pets(&search.into(), page)?;
            print(render_pets(&result.listed_pets, result.page));
            finish(result)
        }
    }
}

fn handle_booking(ctx: &mut AppContext, action: BookingCommands) -> Result<()> {
    match action {
        BookingCommands::Add(fields) => finish(ctx.api.add_booking(fields.try_into()?)?),
        BookingCommands::Edit { number, fields } => {
            finish(ctx.api.edit_booking(number, fields.try_into()?)?)
        }
        BookingCommands::Delete { number, yes } => {
            ctx.api.booking(BookingTier::Active, number)?;
            if !confirm("Are you sure you want to delete this booking?", yes)? {
                return Ok(());
            }
            finish(ctx.api.delete_booking(number)?)
        }
        BookingCommands::View { number, archived } => {
            let tier = if archived {
                BookingTier::Archived
            } else {
                BookingTier::Active
            };
            let result = ctx.api.view_booking(tier, number)?;
            if let Some(detail) = &result.booking_detail {
                print(render_booking_detail(detail));
            }
            finish(result)
        }
        BookingCommands::List { search, page } => {
            let result = ctx.api.list_bookings(&search.into(), page)?;
            print(render_bookings(&result.listed_bookings, result.page));
            finish(result)
        }
        BookingCommands::Archive { number, yes } => {
            ctx.api.booking(BookingTier::Active, number)?;
            let question =
                "Are you sure you want to archive this booking? It can be retrieved later.";
            if !confirm(question, yes)? {
                return Ok(());
            }
            finish(ctx.api.archive_booking(number)?)
        }
        BookingCommands::Unarchive { number, yes } => {
            ctx.api.booking(BookingTier::Archived, number)?;
            if !confirm("Are you sure you want to unarchive this booking?", yes)? {
                return Ok(());
            }
            finish(ctx.api.unarchive_booking(number)?)
        }
        BookingCommands::Archived { page } => {
            let result = ctx.api.list_archived(page)?;
            print(render_bookings(&result.listed_bookings, result.page));
            finish(result)
        }
        BookingCommands::Rooms => {
            let result = ctx.api.available_rooms()?;
            print(render_rooms(&result.rooms));
            finish(result)
        }
    }
}

/// `MM/YYYY`, e.g. `03/2031`.
fn parse_month(text: &str) -> Result<MonthView> {
    let invalid = || HotelError::Api(format!("Invalid month (expected MM/YYYY): {}", text));
    let (month, year) = text.trim().split_once('/').ok_or_else(invalid)?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    MonthView::new(year, month)
}

fn handle_schedule(ctx: &AppContext, month: Option<String>, offset: i32) -> Result<()> {
    let month = match month {
        Some(text) => parse_month(&text)?,
        None => MonthView::current(),
    };
    let result = ctx.api.schedule(month.shifted(offset)?)?;
    if let Some(schedule) = &result.schedule {
        print(render_schedule(schedule));
    }
    finish(result)
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let result = ctx.api.config(action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print(render_config(config));
        }
    }
    finish(result)
}

fn handle_init(ctx: &AppContext, staff: Option<String>, admin: Option<String>) -> Result<()> {
    let staff = secret_or_prompt(staff, "Staff password: ")?;
    let admin = secret_or_prompt(admin, "Admin password: ")?;
    finish(ctx.api.init(&staff, &admin)?)
}

fn handle_login(ctx: &AppContext) -> Result<()> {
    let secret = secret_or_prompt(ctx.password.clone(), "Password: ")?;
    let level = ctx.api.login(&secret)?;
    println!("Logged in with {} access.", level);
    Ok(())
}

fn handle_passwd(ctx: &AppContext, new: Option<String>, new_admin: Option<String>) -> Result<()> {
    let current = secret_or_prompt(ctx.password.clone(), "Admin password: ")?;
    let new = secret_or_prompt(new, "New password: ")?;
    let new_admin = match new_admin {
        Some(secret) => Some(secret),
        None => Some(read_line("New admin password (empty keeps the current one): ")?),
    };
    finish(ctx.api.passwd(&current, &new, new_admin.as_deref())?)
}

fn handle_help(command: &[String]) -> Result<()> {
    if command.is_empty() {
        print_grouped_help();
    } else {
        let path: Vec<&str> = command.iter().map(String::as_str).collect();
        print_help_for_command(&path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_months() {
        assert_eq!(parse_month("03/2031").unwrap(), MonthView::new(2031, 3).unwrap());
        assert_eq!(parse_month(" 12/1999").unwrap(), MonthView::new(1999, 12).unwrap());
        assert!(parse_month("13/2031").is_err());
        assert!(parse_month("2031-03").is_err());
    }

    #[test]
    fn months_beyond_the_calendar_are_errors() {
        let err = parse_month("01/999999").unwrap_err();
        assert_eq!(err.to_string(), "Api Error: Month 01/999999 is out of range");
        assert!(parse_month("01/99999999999").is_err());
    }
}
