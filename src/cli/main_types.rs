use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "propis")]
#[command(about = "Spell out currency amounts in Russian words")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding config.toml
    #[arg(long, global = true, env = "PROPIS_CONFIG_DIR")]
    pub config_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Spell out one or more amounts
    Words {
        /// Amounts such as 1234.56, 1234,56 or "1 234,56"
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        amounts: Vec<String>,
        /// Currency code (defaults to the configured default, then RUB)
        #[arg(short, long)]
        currency: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
        output: OutputFormat,
    },
    /// Format and shift a date
    Date {
        /// YYYY-MM-DD or YYYY-MM-DD HH:MM:SS
        value: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = DateFormat::SqlTime)]
        format: DateFormat,
        /// Move to the start or end of the (shifted) day
        #[arg(long, value_enum)]
        align: Option<Align>,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        add_years: i32,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        add_months: i32,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        add_days: i64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        add_hours: i64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        add_minutes: i64,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        add_seconds: i64,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Table,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// YYYY-MM-DD
    Sql,
    /// YYYY-MM-DD HH:MM:SS
    SqlTime,
    /// DD MM YYYY
    Intl,
    /// One component per line
    Parts,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Start,
    End,
}
