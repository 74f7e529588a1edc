//! Shell support: the configuration file layout and request replay.
//!
//! A shell configuration is a regular `stay` configuration plus a list of booking requests:
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [[catalog.hotels]]
//! id = "the-hotel"
//! name = "The Hotel"
//! rooms = [{ type = "room:single", number = "04" }]
//!
//! [[requests]]
//! employee = "alice"
//! hotel = "the-hotel"
//! room = "room:single"
//! check_in = "2019-03-03T14:00:00"
//! check_out = "2019-03-04T11:00:00"
//! ```

use serde::Deserialize;
use std::path::Path;
use stay::Platform;
use stay::domain::BookingRequest;
use stay::domain::config::StayConfig;
use stay::kernel::config::{ConfigError, load_config};
use stay::{Booking, BookingError};
use tracing::{info, warn};

/// Used when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "stay.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShellConfig {
    #[serde(flatten)]
    pub stay: StayConfig,
    #[serde(default)]
    pub requests: Vec<BookingRequest>,
}

impl ShellConfig {
    /// Reads `path` and applies `STAY__` environment overrides.
    ///
    /// # Errors
    /// See [`load_config`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        load_config(Some(path))
    }
}

/// Outcome of replaying requests, in request order.
#[derive(Debug, Default)]
pub struct ReplaySummary {
    pub accepted: Vec<Booking>,
    /// Index of the refused request and the reason.
    pub refused: Vec<(usize, BookingError)>,
}

/// Submits every request to the platform's booker in order, logging each outcome.
///
/// Refusals are ordinary outcomes and never abort the replay.
pub fn replay(platform: &Platform, requests: &[BookingRequest]) -> ReplaySummary {
    let mut summary = ReplaySummary::default();

    for (index, request) in requests.iter().enumerate() {
        match platform.booker.book_request(request) {
            Ok(booking) => {
                info!(
                    index,
                    reference = booking.reference(),
                    employee = %request.employee,
                    hotel = %request.hotel,
                    room_number = booking.room_number(),
                    "Request accepted"
                );
                summary.accepted.push(booking);
            },
            Err(err) => {
                warn!(
                    index,
                    employee = %request.employee,
                    hotel = %request.hotel,
                    kind = ?err.kind(),
                    "Request refused: {err}"
                );
                summary.refused.push((index, err));
            },
        }
    }

    summary
}
