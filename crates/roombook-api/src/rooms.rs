// Room endpoints

use chrono::{DateTime, Utc};

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::Room;
use crate::timestamp;

impl ApiClient {
    /// Every bookable room.
    ///
    /// `GET rooms`
    pub async fn list_available_rooms(&self) -> Result<Vec<Room>, Error> {
        self.get("rooms").await
    }

    /// Rooms free for the whole of `[start, end)`.
    ///
    /// `GET rooms/available?startTime=..&endTime=..` (UTC, wire format)
    pub async fn list_rooms_for_slot(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Room>, Error> {
        self.get_with_params(
            "rooms/available",
            &[
                ("startTime", timestamp::format(&start)),
                ("endTime", timestamp::format(&end)),
            ],
        )
        .await
    }
}
