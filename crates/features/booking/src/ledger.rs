//! Append-only reservation storage with a per-hotel lock boundary.

use crate::stay::Stay;
use fxhash::FxHashMap;
use parking_lot::{Mutex, RwLock};
use std::fmt::Debug;
use std::sync::Arc;
use stay_domain::{EmployeeId, HotelId, RoomType};

/// An accepted booking. Records are created by the booker and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    reference: String,
    hotel: HotelId,
    employee: EmployeeId,
    room_type: RoomType,
    room_number: String,
    stay: Stay,
}

impl Booking {
    pub(crate) const fn new(
        reference: String,
        hotel: HotelId,
        employee: EmployeeId,
        room_type: RoomType,
        room_number: String,
        stay: Stay,
    ) -> Self {
        Self { reference, hotel, employee, room_type, room_number, stay }
    }

    /// Short unique reference handed back to the caller.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    #[must_use]
    pub const fn hotel(&self) -> &HotelId {
        &self.hotel
    }

    #[must_use]
    pub const fn employee(&self) -> &EmployeeId {
        &self.employee
    }

    #[must_use]
    pub const fn room_type(&self) -> RoomType {
        self.room_type
    }

    /// The room assigned at commit time.
    #[must_use]
    pub fn room_number(&self) -> &str {
        &self.room_number
    }

    #[must_use]
    pub const fn stay(&self) -> &Stay {
        &self.stay
    }
}

/// The bookings of one hotel, in commit order.
#[derive(Debug, Default)]
pub struct HotelReservations {
    bookings: Vec<Booking>,
}

impl HotelReservations {
    /// Bookings of any room type whose stay overlaps `stay`.
    pub fn overlapping<'a>(&'a self, stay: &'a Stay) -> impl Iterator<Item = &'a Booking> + 'a {
        self.bookings.iter().filter(move |b| b.stay.overlaps(stay))
    }

    pub(crate) fn push(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Booking] {
        &self.bookings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

/// Storage for accepted bookings.
///
/// Implementations must run [`BookingLedger::with_hotel`] closures for the same hotel one at a
/// time. The booker counts conflicts and appends inside a single closure, which makes the
/// availability check and the commit one serializable step per hotel.
pub trait BookingLedger: Debug + Send + Sync {
    /// Runs `op` with exclusive access to the hotel's reservations.
    fn with_hotel<R>(&self, hotel: &HotelId, op: impl FnOnce(&mut HotelReservations) -> R) -> R;

    /// A copy of the hotel's bookings in commit order. Unknown hotels yield an empty list.
    fn snapshot(&self, hotel: &HotelId) -> Vec<Booking>;

    /// Total number of bookings across all hotels.
    fn total(&self) -> usize;
}

/// Process-local ledger: one mutex per hotel behind a shared index.
///
/// Bookings for different hotels never contend. The index lock is held only long enough to find
/// or create a hotel's slot.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    hotels: RwLock<FxHashMap<HotelId, Arc<Mutex<HotelReservations>>>>,
}

impl InMemoryLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, hotel: &HotelId) -> Arc<Mutex<HotelReservations>> {
        if let Some(slot) = self.hotels.read().get(hotel) {
            return Arc::clone(slot);
        }
        Arc::clone(self.hotels.write().entry(hotel.clone()).or_default())
    }

    fn existing_slot(&self, hotel: &HotelId) -> Option<Arc<Mutex<HotelReservations>>> {
        self.hotels.read().get(hotel).cloned()
    }
}

impl BookingLedger for InMemoryLedger {
    fn with_hotel<R>(&self, hotel: &HotelId, op: impl FnOnce(&mut HotelReservations) -> R) -> R {
        let slot = self.slot(hotel);
        let mut reservations = slot.lock();
        op(&mut reservations)
    }

    fn snapshot(&self, hotel: &HotelId) -> Vec<Booking> {
        self.existing_slot(hotel).map(|slot| slot.lock().as_slice().to_vec()).unwrap_or_default()
    }

    fn total(&self) -> usize {
        let slots: Vec<_> = self.hotels.read().values().cloned().collect();
        slots.iter().map(|slot| slot.lock().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stay(from: (u32, u32), to: (u32, u32)) -> Stay {
        let day = |(m, d): (u32, u32)| {
            NaiveDate::from_ymd_opt(2019, m, d).and_then(|d| d.and_hms_opt(0, 0, 0)).unwrap()
        };
        Stay::new(day(from), day(to)).unwrap()
    }

    fn booking(hotel: &str, room_type: RoomType, number: &str, stay: Stay) -> Booking {
        Booking::new(
            format!("ref-{number}"),
            hotel.into(),
            "alice".into(),
            room_type,
            number.to_owned(),
            stay,
        )
    }

    #[test]
    fn overlapping_spans_every_room_type() {
        let mut reservations = HotelReservations::default();
        let march = stay((3, 3), (3, 4));
        reservations.push(booking("h", RoomType::Single, "1", march));
        reservations.push(booking("h", RoomType::Double, "2", march));
        reservations.push(booking("h", RoomType::Single, "1", stay((3, 10), (3, 12))));

        assert_eq!(reservations.overlapping(&march).count(), 2);
        assert_eq!(reservations.overlapping(&stay((3, 4), (3, 5))).count(), 2, "touching counts");
        assert_eq!(reservations.overlapping(&stay((4, 22), (4, 28))).count(), 0);
    }

    #[test]
    fn hotels_are_kept_apart() {
        let ledger = InMemoryLedger::new();
        let march = stay((3, 3), (3, 4));

        ledger.with_hotel(&"a".into(), |r| r.push(booking("a", RoomType::Single, "1", march)));
        ledger.with_hotel(&"b".into(), |r| r.push(booking("b", RoomType::Single, "1", march)));
        ledger.with_hotel(&"b".into(), |r| r.push(booking("b", RoomType::Single, "2", march)));

        assert_eq!(ledger.snapshot(&"a".into()).len(), 1);
        assert_eq!(ledger.snapshot(&"b".into()).len(), 2);
        assert_eq!(ledger.total(), 3);
    }

    #[test]
    fn snapshot_of_unknown_hotel_is_empty_and_creates_nothing() {
        let ledger = InMemoryLedger::new();
        assert!(ledger.snapshot(&"ghost".into()).is_empty());
        assert!(ledger.hotels.read().is_empty());
    }

    #[test]
    fn snapshot_preserves_commit_order() {
        let ledger = InMemoryLedger::new();
        let hotel = HotelId::from("h");
        for number in ["3", "1", "2"] {
            ledger.with_hotel(&hotel, |r| {
                r.push(booking("h", RoomType::Single, number, stay((3, 3), (3, 4))));
            });
        }

        let numbers: Vec<String> =
            ledger.snapshot(&hotel).iter().map(|b| b.room_number().to_owned()).collect();
        assert_eq!(numbers, ["3", "1", "2"]);
    }
}
