//! Clap derive structures for the `roombook` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand, ValueEnum};

use roombook_core::{BookingId, RoomId, UserId};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// roombook -- book meeting rooms from the command line
#[derive(Debug, Parser)]
#[command(
    name = "roombook",
    version,
    about = "Book meeting rooms from the command line",
    long_about = "A client for the room reservation service.\n\n\
        Booking times are entered and shown in your configured time zone\n\
        and stored by the service in UTC.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Service profile to use
    #[arg(long, short = 'p', env = "ROOMBOOK_PROFILE", global = true)]
    pub profile: Option<String>,

    /// API base URL (overrides profile)
    #[arg(long, env = "ROOMBOOK_SERVER", global = true)]
    pub server: Option<String>,

    /// Time zone for booking times: local, UTC, -05:00, or an IANA name
    #[arg(long, short = 'z', env = "ROOMBOOK_TIMEZONE", global = true)]
    pub timezone: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "ROOMBOOK_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept invalid TLS certificates (overrides profile and config defaults)
    #[arg(long, short = 'k', env = "ROOMBOOK_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile and config defaults)
    #[arg(long, env = "ROOMBOOK_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in with your account email and password
    Login(LoginArgs),

    /// Create an account
    Signup(SignupArgs),

    /// Look up or delete user accounts
    #[command(alias = "u")]
    Users(UsersArgs),

    /// List rooms
    #[command(alias = "r")]
    Rooms(RoomsArgs),

    /// List, create, change, and cancel bookings
    #[command(alias = "b")]
    Bookings(BookingsArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Value parsers ────────────────────────────────────────────────────

/// Accepts `HH:MM` and `HH:MM:SS`.
fn parse_time(raw: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| format!("expected HH:MM, got '{raw}'"))
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| format!("expected YYYY-MM-DD, got '{raw}'"))
}

// ── Accounts ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account email
    #[arg(long, short = 'e')]
    pub email: String,

    /// Account password (prompted when omitted)
    #[arg(long, env = "ROOMBOOK_USER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Debug, Args)]
pub struct SignupArgs {
    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(long, short = 'e')]
    pub email: String,

    /// Password (prompted when omitted)
    #[arg(long)]
    pub password: Option<String>,

    /// Password confirmation (prompted when omitted)
    #[arg(long)]
    pub confirm_password: Option<String>,
}

#[derive(Debug, Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// Show a user account
    Show {
        /// User ID
        id: UserId,
    },

    /// Change a user's name, email, or password
    Update(UserUpdateArgs),

    /// Delete a user account
    Delete {
        /// User ID
        id: UserId,
    },
}

#[derive(Debug, Args)]
pub struct UserUpdateArgs {
    /// User ID
    pub id: UserId,

    /// New first name (kept when omitted)
    #[arg(long)]
    pub first_name: Option<String>,

    /// New last name (kept when omitted)
    #[arg(long)]
    pub last_name: Option<String>,

    /// New email (kept when omitted)
    #[arg(long, short = 'e')]
    pub email: Option<String>,

    /// New password (prompted when omitted)
    #[arg(long)]
    pub password: Option<String>,

    /// Password confirmation (prompted when omitted)
    #[arg(long)]
    pub confirm_password: Option<String>,
}

// ── Rooms ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RoomsArgs {
    #[command(subcommand)]
    pub command: RoomsCommand,
}

#[derive(Debug, Subcommand)]
pub enum RoomsCommand {
    /// List rooms; with --date, --start and --end, only rooms free for that slot
    #[command(alias = "ls")]
    List(RoomsListArgs),
}

#[derive(Debug, Args)]
pub struct RoomsListArgs {
    /// Date (YYYY-MM-DD)
    #[arg(long, short = 'd', value_parser = parse_date, requires_all = ["start", "end"])]
    pub date: Option<NaiveDate>,

    /// Slot start (HH:MM)
    #[arg(long, value_parser = parse_time, requires = "date")]
    pub start: Option<NaiveTime>,

    /// Slot end (HH:MM)
    #[arg(long, value_parser = parse_time, requires = "date")]
    pub end: Option<NaiveTime>,
}

// ── Bookings ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct BookingsArgs {
    #[command(subcommand)]
    pub command: BookingsCommand,
}

#[derive(Debug, Subcommand)]
pub enum BookingsCommand {
    /// List a user's bookings
    #[command(alias = "ls")]
    List {
        /// Owner's user ID
        #[arg(long, short = 'u')]
        user: UserId,
    },

    /// Book a room
    Create(BookingCreateArgs),

    /// Change an existing booking
    Update(BookingUpdateArgs),

    /// Cancel a booking
    #[command(alias = "rm")]
    Delete {
        /// Booking ID
        id: BookingId,
    },
}

#[derive(Debug, Args)]
pub struct BookingCreateArgs {
    /// Owner's user ID
    #[arg(long, short = 'u')]
    pub user: UserId,

    /// Room ID
    #[arg(long, short = 'r')]
    pub room: RoomId,

    /// Date (YYYY-MM-DD)
    #[arg(long, short = 'd', value_parser = parse_date)]
    pub date: NaiveDate,

    /// Start time (HH:MM)
    #[arg(long, value_parser = parse_time, default_value = "09:00")]
    pub start: NaiveTime,

    /// End time (HH:MM)
    #[arg(long, value_parser = parse_time, default_value = "10:00")]
    pub end: NaiveTime,
}

#[derive(Debug, Args)]
pub struct BookingUpdateArgs {
    /// Booking ID
    pub id: BookingId,

    /// Owner's user ID
    #[arg(long, short = 'u')]
    pub user: UserId,

    /// New room ID
    #[arg(long, short = 'r')]
    pub room: Option<RoomId>,

    /// New date (YYYY-MM-DD)
    #[arg(long, short = 'd', value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// New start time (HH:MM)
    #[arg(long, value_parser = parse_time)]
    pub start: Option<NaiveTime>,

    /// New end time (HH:MM)
    #[arg(long, value_parser = parse_time)]
    pub end: Option<NaiveTime>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current configuration
    Show,

    /// Store the service password in the system keyring
    SetPassword,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
