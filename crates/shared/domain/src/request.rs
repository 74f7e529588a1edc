use crate::hotel::RoomType;
use crate::ids::{EmployeeId, HotelId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A booking request as it arrives from a caller or a configuration file.
///
/// Times are hotel-local wall-clock values (`2019-03-03T14:00:00`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub employee: EmployeeId,
    pub hotel: HotelId,
    pub room: RoomType,
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
}
