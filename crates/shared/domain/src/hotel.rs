use crate::ids::HotelId;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The kind of room a hotel offers and an employee requests.
///
/// Textual forms are `room:single`, `room:double` and `room:suite`. Parsing is exact and
/// case-sensitive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
pub enum RoomType {
    #[serde(rename = "room:single")]
    #[strum(serialize = "room:single")]
    Single,
    #[serde(rename = "room:double")]
    #[strum(serialize = "room:double")]
    Double,
    #[serde(rename = "room:suite")]
    #[strum(serialize = "room:suite")]
    Suite,
}

/// A physical room. The number is unique within its hotel only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub number: String,
}

impl Room {
    #[must_use]
    pub fn new(room_type: RoomType, number: impl Into<String>) -> Self {
        Self { room_type, number: number.into() }
    }
}

/// A hotel as loaded from the catalog.
///
/// Rooms keep their catalog order; that order decides which room number a booking receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub rooms: Vec<Room>,
}

impl Hotel {
    #[must_use]
    pub fn new(id: impl Into<HotelId>, name: impl Into<String>, rooms: Vec<Room>) -> Self {
        Self { id: id.into(), name: name.into(), rooms }
    }

    /// Whether the hotel has at least one room of the given type.
    #[must_use]
    pub fn offers(&self, room_type: RoomType) -> bool {
        self.rooms.iter().any(|room| room.room_type == room_type)
    }

    /// Rooms of the given type, in catalog order.
    pub fn options(&self, room_type: RoomType) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(move |room| room.room_type == room_type)
    }

    #[must_use]
    pub fn capacity(&self, room_type: RoomType) -> usize {
        self.options(room_type).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn hotel(rooms: &[(RoomType, &str)]) -> Hotel {
        Hotel::new(
            "some-hotel",
            "Some Hotel",
            rooms.iter().map(|(t, n)| Room::new(*t, *n)).collect(),
        )
    }

    #[test]
    fn offers_only_listed_room_types() {
        let singles = hotel(&[(RoomType::Single, "04")]);
        assert!(singles.offers(RoomType::Single));
        assert!(!singles.offers(RoomType::Double), "Double rooms should not be offered");
        assert!(!singles.offers(RoomType::Suite), "Suite rooms should not be offered");

        let all = hotel(&[(RoomType::Single, "1"), (RoomType::Double, "2"), (RoomType::Suite, "3")]);
        for room_type in RoomType::iter() {
            assert!(all.offers(room_type), "{room_type} should be offered");
        }
    }

    #[test]
    fn options_keep_catalog_order() {
        let h = hotel(&[(RoomType::Single, "03"), (RoomType::Double, "07"), (RoomType::Single, "01")]);
        let numbers: Vec<&str> = h.options(RoomType::Single).map(|r| r.number.as_str()).collect();
        assert_eq!(numbers, ["03", "01"]);
        assert_eq!(h.capacity(RoomType::Single), 2);
        assert_eq!(h.capacity(RoomType::Suite), 0);
    }

    #[test]
    fn room_type_text_forms_are_exact() {
        assert_eq!(RoomType::from_str("room:double").ok(), Some(RoomType::Double));
        assert_eq!(RoomType::Suite.to_string(), "room:suite");
        assert!(RoomType::from_str("something-bogus").is_err());
        assert!(RoomType::from_str("ROOM:SINGLE").is_err());
    }
}
