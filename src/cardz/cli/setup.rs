use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cardz",
    bin_name = "cardz",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Nested cards with keyword search", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the card store (defaults to $CARDZ_DATA, then the user data dir)
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Core,
    Card,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Core => "Core Commands:",
            CommandGroup::Card => "Per-Card Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "create" | "list" | "search" => Some(CommandGroup::Core),
            "view" | "update" | "delete" => Some(CommandGroup::Card),
            "doctor" | "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Core, CommandGroup::Card, CommandGroup::Misc]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("cardz {version}\n"));
    output.push_str("Nested cards with keyword search\n");
    output.push('\n');
    output.push_str("Usage: cardz [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --data <FILE>  Path to the card store\n");
    output.push_str("  -v, --verbose      Verbose output\n");
    output.push_str("  -h, --help         Print help\n");
    output.push_str("  -V, --version      Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a command by name
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Card(CardCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Create a new card
    #[command(alias = "n", display_order = 1)]
    Create {
        /// Id of the parent card (omit for a root card)
        #[arg(short, long, value_name = "ID")]
        parent: Option<u64>,

        /// Secondary text
        #[arg(short, long, default_value = "")]
        subtitle: String,

        /// URL or path the card points to
        #[arg(short, long, default_value = "")]
        link: String,

        /// Card type (card, file, ...)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        kind: Option<String>,

        /// Print the `{success, card}` reply as JSON
        #[arg(long)]
        json: bool,

        /// Name words (joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// Show the whole card tree
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Print the stored document as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search cards by keyword
    #[command(alias = "s", display_order = 3)]
    Search {
        /// Print the search payload as JSON
        #[arg(long)]
        json: bool,

        /// Query words (joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CardCommands {
    /// View a card and its children
    #[command(alias = "v", display_order = 10)]
    View { id: u64 },

    /// Change a card's name, subtitle or link
    #[command(alias = "e", display_order = 11)]
    Update {
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        subtitle: Option<String>,

        #[arg(long)]
        link: Option<String>,

        /// Print the `{success, card, error}` reply as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a card and everything under it
    #[command(alias = "rm", display_order = 12)]
    Delete {
        id: u64,

        /// Print the `{success, card, error}` reply as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Check and fix data inconsistencies
    #[command(display_order = 30)]
    Doctor,

    /// Get or set configuration
    #[command(display_order = 31)]
    Config {
        /// Configuration key (e.g., max-results)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print help for cardz or a subcommand
    #[command(display_order = 32)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
