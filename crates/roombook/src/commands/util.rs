//! Shared helpers for command handlers.

use chrono::NaiveDateTime;
use roombook_core::{Reservations, Room, RoomId, UserRecord};
use secrecy::SecretString;

use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, action: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|_| CliError::NonInteractiveRequiresYes {
            action: action.into(),
        })
}

/// Read a secret from the terminal without echo.
pub fn prompt_secret(prompt: &str) -> Result<SecretString, CliError> {
    let value = rpassword::prompt_password(prompt)?;
    Ok(SecretString::from(value))
}

/// Password and confirmation from flags; whichever is missing is prompted for.
pub fn passwords(
    password: Option<String>,
    confirm: Option<String>,
) -> Result<(SecretString, SecretString), CliError> {
    fill_passwords(password, confirm, prompt_secret)
}

fn fill_passwords(
    password: Option<String>,
    confirm: Option<String>,
    mut prompt: impl FnMut(&str) -> Result<SecretString, CliError>,
) -> Result<(SecretString, SecretString), CliError> {
    let password = match password {
        Some(p) => SecretString::from(p),
        None => prompt("Password: ")?,
    };
    let confirm = match confirm {
        Some(c) => SecretString::from(c),
        None => prompt("Confirm password: ")?,
    };
    Ok((password, confirm))
}

/// Look a room up by id, so bookings carry its display name.
pub async fn find_room(app: &Reservations, id: RoomId) -> Result<Room, CliError> {
    app.rooms()
        .await?
        .into_iter()
        .find(|r| r.id == id)
        .ok_or_else(|| CliError::NotFound {
            resource_type: "room".into(),
            identifier: id.to_string(),
            list_command: "rooms list".into(),
        })
}

/// The API base URL, for connection error messages.
pub fn server_url(app: &Reservations) -> String {
    app.service().base_url().to_string()
}

pub fn fmt_date(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d").to_string()
}

pub fn fmt_time(dt: &NaiveDateTime) -> String {
    dt.format("%H:%M").to_string()
}

/// Key/value detail view of a user account.
pub fn user_detail(u: &UserRecord) -> String {
    let mut lines = vec![
        format!("ID:     {}", u.id),
        format!("Name:   {}", u.full_name()),
        format!("Email:  {}", u.email),
    ];
    if let Some(card) = u.card_id {
        lines.push(format!("Card:   {card}"));
    }
    lines.join("\n")
}
