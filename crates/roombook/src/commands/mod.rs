//! Command dispatch: bridges CLI args -> core workflows -> output formatting.

pub mod account;
pub mod bookings;
pub mod config_cmd;
pub mod rooms;
pub mod users;
pub mod util;

use roombook_core::Reservations;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a service-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    app: &Reservations,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Login(args) => account::login(app, args, global).await,
        Command::Signup(args) => account::signup(app, args, global).await,
        Command::Users(args) => users::handle(app, args, global).await,
        Command::Rooms(args) => rooms::handle(app, args, global).await,
        Command::Bookings(args) => bookings::handle(app, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
