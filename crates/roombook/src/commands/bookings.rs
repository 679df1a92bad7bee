//! Booking command handlers.

use roombook_core::{
    BookingForm, BookingId, CoreError, LocalBooking, Reservations, SubmissionOutcome, UserId,
    validation,
};
use tabled::Tabled;

use crate::cli::{BookingCreateArgs, BookingUpdateArgs, BookingsArgs, BookingsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct BookingRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Room")]
    room: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
}

impl From<&LocalBooking> for BookingRow {
    fn from(b: &LocalBooking) -> Self {
        Self {
            id: b.id.to_string(),
            room: if b.room_name.is_empty() {
                format!("#{}", b.room_id)
            } else {
                b.room_name.clone()
            },
            date: util::fmt_date(&b.start),
            start: util::fmt_time(&b.start),
            end: util::fmt_time(&b.end),
        }
    }
}

fn detail(b: &LocalBooking) -> String {
    [
        format!("ID:     {}", b.id),
        format!("Room:   {} (#{})", b.room_name, b.room_id),
        format!("Date:   {}", util::fmt_date(&b.start)),
        format!("Time:   {} - {}", util::fmt_time(&b.start), util::fmt_time(&b.end)),
        format!("User:   {}", b.user_id),
    ]
    .join("\n")
}

// ── Outcome handling ────────────────────────────────────────────────

/// Render a successful submission, or turn a failed one into an error.
fn finish(
    app: &Reservations,
    outcome: SubmissionOutcome,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let summary = outcome.to_string();
    let record = match outcome {
        SubmissionOutcome::Created(record) | SubmissionOutcome::Updated(record) => record,
        SubmissionOutcome::Conflict(message) => return Err(CliError::Conflict { message }),
        SubmissionOutcome::ValidationRejected { status, message } => {
            return Err(CliError::Rejected { status, message });
        }
        SubmissionOutcome::ServerRejected { status, message } => {
            return Err(CliError::ApiError {
                message,
                status: Some(status),
            });
        }
        SubmissionOutcome::TransportFailure(reason) => {
            return Err(CliError::ConnectionFailed {
                url: util::server_url(app),
                reason,
            });
        }
    };

    output::print_status(&summary, &global.color, global.quiet);
    let booking = LocalBooking::from_record(&record, &app.zone());
    let out = output::render_single(&global.output, &booking, detail, |b| b.id.to_string());
    output::print_output(&out, global.quiet);
    Ok(())
}

fn booking_not_found(id: BookingId, user: UserId) -> CliError {
    CliError::NotFound {
        resource_type: "booking".into(),
        identifier: id.to_string(),
        list_command: format!("bookings list --user {user}"),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    app: &Reservations,
    args: BookingsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        BookingsCommand::List { user } => {
            let bookings = app.bookings_for_user(user).await?;
            let out = output::render_list(
                &global.output,
                &bookings,
                |b| BookingRow::from(b),
                |b| b.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        BookingsCommand::Create(BookingCreateArgs {
            user,
            room,
            date,
            start,
            end,
        }) => {
            let mut form = BookingForm::for_date(date).with_times(start, end);
            form.room_id = Some(room);
            // Reject a bad slot before spending a request on the room lookup.
            validation::booking::validate(&form).map_err(CoreError::from)?;

            let form = form.with_room(&util::find_room(app, room).await?);
            let outcome = app.submit_booking(&form, user, None).await?;
            finish(app, outcome, global)
        }

        BookingsCommand::Update(args) => update(app, args, global).await,

        BookingsCommand::Delete { id } => {
            if !util::confirm(
                &format!("Cancel booking {id}?"),
                "bookings delete",
                global.yes,
            )? {
                return Ok(());
            }
            app.delete_booking(id).await.map_err(|err| match err {
                CoreError::NotFound { .. } => CliError::NotFound {
                    resource_type: "booking".into(),
                    identifier: id.to_string(),
                    list_command: "bookings list --user <USER>".into(),
                },
                other => other.into(),
            })?;
            output::print_status(&format!("Booking {id} cancelled"), &global.color, global.quiet);
            Ok(())
        }
    }
}

/// Start from the booking's current values and apply only the fields given.
async fn update(
    app: &Reservations,
    args: BookingUpdateArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mut form = app
        .edit_form(args.user, args.id)
        .await
        .map_err(|err| match err {
            CoreError::NotFound { .. } => booking_not_found(args.id, args.user),
            other => other.into(),
        })?;

    if let Some(room_id) = args.room {
        form = form.with_room(&util::find_room(app, room_id).await?);
    }
    if let Some(date) = args.date {
        form.date = date;
    }
    let start = args.start.unwrap_or(form.start);
    let end = args.end.unwrap_or(form.end);
    form = form.with_times(start, end);

    let outcome = app.submit_booking(&form, args.user, Some(args.id)).await?;
    finish(app, outcome, global)
}
