//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat, StoreBackendArg};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "carta",
    bin_name = "carta",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Restaurant menu manager",
    long_about = "Carta keeps a restaurant menu: it validates every dish, \
                  rejects duplicate names, and tracks availability.",
    after_help = "EXAMPLES:\n\
        \x20 carta add --name \"Tacos\" --price 9.99 --category Entradas\n\
        \x20 carta list --category postres\n\
        \x20 carta toggle dish-2\n\
        \x20 carta validate --json '{\"name\":\"Flan\",\"price\":4.5,\"category\":\"Postres\"}'",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a dish to the menu.
    #[command(
        visible_alias = "a",
        about = "Add a dish",
        after_help = "EXAMPLES:\n\
            \x20 carta add --name \"Pozole Rojo\" --price 11.5 --category \"Platos Fuertes\"\n\
            \x20 carta add --name Churros --price 4 --category postres --description \"Con cajeta\"\n\
            \x20 carta add --json '{\"name\":\"Agua de Jamaica\",\"price\":2.5,\"category\":\"Bebidas\"}'"
    )]
    Add(AddArgs),

    /// List dishes.
    #[command(
        visible_alias = "ls",
        about = "List dishes",
        after_help = "EXAMPLES:\n\
            \x20 carta list\n\
            \x20 carta list --category entradas --status available\n\
            \x20 carta list --format csv > menu.csv"
    )]
    List(ListArgs),

    /// Change fields of an existing dish.
    #[command(
        about = "Edit a dish",
        after_help = "EXAMPLES:\n\
            \x20 carta edit dish-1 --price 16\n\
            \x20 carta edit dish-2 --status available\n\
            \x20 carta edit dish-3 --clear-description"
    )]
    Edit(EditArgs),

    /// Flip a dish between available and sold out.
    #[command(about = "Toggle availability")]
    Toggle(IdArgs),

    /// Remove a dish from the menu.
    #[command(visible_alias = "rm", about = "Remove a dish")]
    Remove(RemoveArgs),

    /// Show the category catalogue.
    #[command(about = "List categories")]
    Categories,

    /// Check a dish record without saving it.
    #[command(
        about = "Validate dish input",
        after_help = "EXAMPLES:\n\
            \x20 carta validate --json '{\"name\":\"\",\"price\":0}'\n\
            \x20 carta validate --mode update --id dish-1 --json '{\"status\":\"SoldOut\"}'"
    )]
    Validate(ValidateArgs),

    /// Initialise a Carta configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 carta init           # default location\n\
            \x20 carta init --local   # .carta.toml in the current directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 carta completions bash > ~/.local/share/bash-completion/completions/carta\n\
            \x20 carta completions zsh  > ~/.zfunc/_carta\n\
            \x20 carta completions fish > ~/.config/fish/completions/carta.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Carta configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 carta config get store.path\n\
            \x20 carta config list"
    )]
    Config(ConfigCommands),
}

// ── shared field flags ────────────────────────────────────────────────────────

/// Dish fields settable from flags.
///
/// Values are passed to the schemas as entered; the schemas decide what is
/// valid.
#[derive(Debug, Default, Args)]
pub struct DishFieldArgs {
    /// Dish name.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Dish name (1-100 characters)"
    )]
    pub name: Option<String>,

    /// Optional description.
    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Description (up to 500 characters)"
    )]
    pub description: Option<String>,

    /// Price, as a number.
    #[arg(
        short = 'p',
        long = "price",
        value_name = "PRICE",
        allow_hyphen_values = true,
        help = "Price between 0.01 and 999999.99, at most two decimals"
    )]
    pub price: Option<String>,

    /// Category label, slug, or id.
    #[arg(
        short = 'k',
        long = "category",
        value_name = "CATEGORY",
        help = "Category (label, slug, or id; see `carta categories`)"
    )]
    pub category: Option<String>,
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Arguments for `carta add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub fields: DishFieldArgs,

    /// Raw JSON record instead of flags.
    #[arg(
        long = "json",
        value_name = "JSON",
        conflicts_with_all = ["name", "description", "price", "category"],
        help = "Dish as a JSON object"
    )]
    pub json: Option<String>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `carta list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter by category.
    #[arg(short = 'k', long = "category", help = "Filter by category")]
    pub category: Option<String>,

    /// Filter by status.
    #[arg(
        short = 's',
        long = "status",
        help = "Filter by status (available, sold-out)"
    )]
    pub status: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── edit ──────────────────────────────────────────────────────────────────────

/// Arguments for `carta edit`.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Dish id.
    #[arg(value_name = "ID")]
    pub id: String,

    #[command(flatten)]
    pub fields: DishFieldArgs,

    /// New status.
    #[arg(
        short = 's',
        long = "status",
        value_name = "STATUS",
        help = "Status (Available or SoldOut)"
    )]
    pub status: Option<String>,

    /// Remove the description.
    #[arg(
        long = "clear-description",
        conflicts_with = "description",
        help = "Remove the description"
    )]
    pub clear_description: bool,

    /// Raw JSON patch instead of flags.
    #[arg(
        long = "json",
        value_name = "JSON",
        conflicts_with_all = ["name", "description", "price", "category", "status", "clear_description"],
        help = "Changes as a JSON object"
    )]
    pub json: Option<String>,
}

// ── toggle / remove ───────────────────────────────────────────────────────────

/// A single dish id.
#[derive(Debug, Args)]
pub struct IdArgs {
    /// Dish id.
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for `carta remove`.
#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Dish id.
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Remove without asking")]
    pub yes: bool,
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `carta validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Raw JSON record.
    #[arg(long = "json", value_name = "JSON", help = "Dish as a JSON object")]
    pub json: String,

    /// Which schema to apply.
    #[arg(
        long = "mode",
        value_enum,
        default_value = "create",
        help = "Validate as a new dish or as an update"
    )]
    pub mode: ValidateMode,

    /// Dish being updated. Required with `--mode update`.
    #[arg(
        long = "id",
        value_name = "ID",
        required_if_eq("mode", "update"),
        help = "Dish id (update mode)"
    )]
    pub id: Option<String>,
}

/// Schema selector for `carta validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValidateMode {
    Create,
    Update,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `carta init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.carta.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `carta completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `carta config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `store.path`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
