//! # CLI Layer
//!
//! This module is **one possible UI client** for cardz, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with the API
//! - `handle_*()`: Per-command handlers that call the API and format output

use super::render::{
    print_messages, render_card, render_forest, render_search, render_text_list,
};
use super::setup::{
    print_grouped_help, print_help_for_command, CardCommands, Cli, Commands, CoreCommands,
    MiscCommands,
};
use cardz::api::{CardzApi, CmdResult, ConfigAction};
use cardz::error::Result;
use cardz::init::initialize;
use cardz::model::{CardDraft, CardKind, CardPatch};
use cardz::store::fs::FileStore;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Log filter for the CLI, in `tracing_subscriber::EnvFilter` syntax.
pub const LOG_ENV: &str = "CARDZ_LOG";

struct AppContext {
    api: CardzApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(Commands::Misc(MiscCommands::Help { command })) = &cli.command {
        return handle_help(command.clone());
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::Create {
                parent,
                subtitle,
                link,
                kind,
                json,
                name,
            } => {
                let mut draft = CardDraft::new(name.join(" "))
                    .with_subtitle(subtitle)
                    .with_link(link);
                if let Some(parent) = parent {
                    draft = draft.under(parent);
                }
                if let Some(kind) = kind {
                    draft = draft.with_kind(CardKind::from(kind));
                }
                handle_create(&mut ctx, draft, json)
            }
            CoreCommands::List { json } => handle_list(&mut ctx, json),
            CoreCommands::Search { json, query } => handle_search(&mut ctx, &query.join(" "), json),
        },
        Some(Commands::Card(cmd)) => match cmd {
            CardCommands::View { id } => handle_view(&mut ctx, id),
            CardCommands::Update {
                id,
                name,
                subtitle,
                link,
                json,
            } => handle_update(
                &mut ctx,
                id,
                CardPatch {
                    name,
                    subtitle,
                    link,
                },
                json,
            ),
            CardCommands::Delete { id, json } => handle_delete(&mut ctx, id, json),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Doctor => handle_doctor(&mut ctx),
            MiscCommands::Config { key, value } => handle_config(&mut ctx, key, value),
            MiscCommands::Help { command } => handle_help(command),
        },
        None => handle_list(&mut ctx, false),
    }
}

/// `--verbose` forces debug; otherwise `CARDZ_LOG` decides, defaulting to warnings only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(cli.data.clone())?;
    Ok(AppContext { api: ctx.api })
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn finish_mutation(result: &CmdResult, json: bool) -> Result<()> {
    if json {
        print_json(&result.reply())
    } else {
        print_messages(&result.messages);
        Ok(())
    }
}

fn handle_create(ctx: &mut AppContext, draft: CardDraft, json: bool) -> Result<()> {
    let result = ctx.api.create_card(draft)?;
    finish_mutation(&result, json)
}

fn handle_list(ctx: &mut AppContext, json: bool) -> Result<()> {
    let result = ctx.api.list_cards()?;
    let forest = result.forest.unwrap_or_default();
    if json {
        return print_json(&forest);
    }
    print!("{}", render_forest(&forest.cards));
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, query: &str, json: bool) -> Result<()> {
    let result = ctx.api.search_cards(query)?;
    let outcome = result.search.unwrap_or_default();
    if json {
        // stdout carries only the payload.
        return print_json(&outcome);
    }
    print!("{}", render_search(&outcome));
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, id: u64) -> Result<()> {
    let result = ctx.api.view_card(id)?;
    for card in &result.listed_cards {
        print!("{}", render_card(card, result.path.as_deref()));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, id: u64, patch: CardPatch, json: bool) -> Result<()> {
    if patch.is_empty() && !json {
        println!("Nothing to update (use --name, --subtitle or --link).");
        return Ok(());
    }
    let result = ctx.api.update_card(id, &patch)?;
    finish_mutation(&result, json)
}

fn handle_delete(ctx: &mut AppContext, id: u64, json: bool) -> Result<()> {
    let result = ctx.api.delete_card(id)?;
    finish_mutation(&result, json)
}

fn handle_doctor(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.doctor()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    let mut lines = Vec::new();
    if let Some(config) = &result.config {
        if key.is_none() {
            for (k, v) in config.list_all() {
                lines.push(format!("{} = {}", k, v));
            }
        }
    }
    if key.is_none() {
        print!("{}", render_text_list(&lines, "No configuration values."));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_help(command: Option<String>) -> Result<()> {
    match command {
        Some(cmd) => print_help_for_command(&cmd),
        None => print_grouped_help(),
    }
    Ok(())
}
