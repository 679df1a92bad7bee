//! Room command handlers.

use roombook_core::{LocalTimeRange, Reservations, Room};
use tabled::Tabled;

use crate::cli::{GlobalOpts, RoomsArgs, RoomsCommand};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct RoomRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Capacity")]
    capacity: String,
}

impl From<&Room> for RoomRow {
    fn from(r: &Room) -> Self {
        Self {
            id: r.id.to_string(),
            name: r.name.clone(),
            capacity: if r.capacity == 0 {
                String::new()
            } else {
                r.capacity.to_string()
            },
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(app: &Reservations, args: RoomsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        RoomsCommand::List(list) => {
            let rooms = match (list.date, list.start, list.end) {
                (Some(date), Some(start), Some(end)) => {
                    let slot = LocalTimeRange::new(date, start, end).map_err(|e| {
                        CliError::Validation {
                            field: "slot".into(),
                            reason: e.to_string(),
                        }
                    })?;
                    app.rooms_for_slot(&slot).await?
                }
                _ => app.rooms().await?,
            };
            let out = output::render_list(&global.output, &rooms, |r| RoomRow::from(r), |r| {
                r.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
