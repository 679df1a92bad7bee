// ── Reservations facade ──
//
// Front door for the presentation layer: validate → build → submit for
// bookings, plus the read and delete operations around them. Holds the
// remote service and the user's zone, nothing mutable. Cloning shares the
// underlying HTTP connection pool.

use roombook_api::{
    ApiClient, BasicAuth, BookingId, Room, TlsMode, TransportConfig, UserId, UserRecord,
};
use secrecy::SecretString;
use tracing::{debug, info};

use crate::account::{self, LoginOutcome, RegistrationOutcome};
use crate::booking::{self, BookingRequestBuilder, SubmissionOutcome};
use crate::config::{ClientConfig, TlsVerification};
use crate::convert::{self, LocalBooking};
use crate::error::CoreError;
use crate::service::BookingService;
use crate::time::{self, LocalTimeRange, ZoneSetting};
use crate::validation::{self, BookingForm, RegistrationForm};

/// Booking and account operations against one reservation service.
#[derive(Debug, Clone)]
pub struct Reservations<S = ApiClient> {
    service: S,
    zone: ZoneSetting,
}

impl Reservations<ApiClient> {
    /// Build an HTTP-backed facade. No request is made until the first
    /// operation.
    pub fn connect(config: &ClientConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            tls: match &config.tls {
                TlsVerification::SystemDefaults => TlsMode::System,
                TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
                TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
            },
            timeout: config.timeout,
        };
        let auth = BasicAuth::new(
            config.credentials.username.clone(),
            config.credentials.password.clone(),
        );
        let client = ApiClient::new(config.url.as_str(), auth, &transport)?;
        debug!(url = %client.base_url(), zone = %config.zone, "reservation client ready");
        Ok(Self::with_service(client, config.zone))
    }
}

impl<S: BookingService> Reservations<S> {
    pub fn with_service(service: S, zone: ZoneSetting) -> Self {
        Self { service, zone }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn zone(&self) -> ZoneSetting {
        self.zone
    }

    // ── Bookings ─────────────────────────────────────────────────────

    /// Validate `form`, convert it to UTC, and send it as a create (no
    /// `existing` id) or an update.
    ///
    /// Form and time errors come back as `Err` before any request is made;
    /// everything the server says is a [`SubmissionOutcome`].
    pub async fn submit_booking(
        &self,
        form: &BookingForm,
        user_id: UserId,
        existing: Option<BookingId>,
    ) -> Result<SubmissionOutcome, CoreError> {
        let normalized = validation::booking::validate(form)?;
        let request = BookingRequestBuilder::new(&self.zone).build(normalized, user_id, existing)?;
        Ok(booking::submit(&self.service, &request).await)
    }

    /// A user's bookings, times in the configured zone, earliest first.
    pub async fn bookings_for_user(&self, user_id: UserId) -> Result<Vec<LocalBooking>, CoreError> {
        let mut records = self.service.list_bookings_for_user(user_id).await?;
        records.sort_by_key(|r| r.start_time);
        debug!(user_id, count = records.len(), "fetched bookings");
        Ok(records
            .iter()
            .map(|r| LocalBooking::from_record(r, &self.zone))
            .collect())
    }

    /// The edit form for one of `user_id`'s bookings, pre-filled with its
    /// current values.
    pub async fn edit_form(
        &self,
        user_id: UserId,
        booking_id: BookingId,
    ) -> Result<BookingForm, CoreError> {
        let records = self.service.list_bookings_for_user(user_id).await?;
        let record = records
            .iter()
            .find(|r| r.id == booking_id)
            .ok_or_else(|| CoreError::NotFound {
                message: format!("booking {booking_id} for user {user_id}"),
            })?;
        Ok(convert::prefill_form(record, &self.zone)?)
    }

    pub async fn delete_booking(&self, id: BookingId) -> Result<(), CoreError> {
        self.service.delete_booking(id).await?;
        info!(booking_id = id, "booking deleted");
        Ok(())
    }

    // ── Rooms ────────────────────────────────────────────────────────

    pub async fn rooms(&self) -> Result<Vec<Room>, CoreError> {
        Ok(self.service.list_available_rooms().await?)
    }

    /// Rooms free for the whole of a local slot.
    pub async fn rooms_for_slot(&self, range: &LocalTimeRange) -> Result<Vec<Room>, CoreError> {
        let utc = time::to_utc(range, &self.zone)?;
        Ok(self.service.list_rooms_for_slot(&utc).await?)
    }

    // ── Accounts ─────────────────────────────────────────────────────

    /// Validate a sign-up form and create the account.
    pub async fn register(&self, form: &RegistrationForm) -> Result<RegistrationOutcome, CoreError> {
        let request = validation::registration::validate(form)?;
        Ok(account::register(&self.service, &request).await)
    }

    pub async fn login(&self, email: &str, password: &SecretString) -> LoginOutcome {
        account::login(&self.service, email, password).await
    }

    pub async fn get_user(&self, id: UserId) -> Result<UserRecord, CoreError> {
        Ok(self.service.get_user(id).await?)
    }

    /// Replace an account's details. The form goes through the same
    /// checks as sign-up.
    pub async fn update_account(
        &self,
        id: UserId,
        form: &RegistrationForm,
    ) -> Result<UserRecord, CoreError> {
        let request = validation::registration::validate(form)?;
        let user = self.service.update_user(id, &request.to_command()).await?;
        info!(user_id = id, "account updated");
        Ok(user)
    }

    pub async fn delete_user(&self, id: UserId) -> Result<(), CoreError> {
        self.service.delete_user(id).await?;
        info!(user_id = id, "account deleted");
        Ok(())
    }
}
