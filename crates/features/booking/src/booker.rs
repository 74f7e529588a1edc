//! # Booker
//!
//! The validation pipeline. A request passes, in order:
//!
//! 1. **Stay length** ([`Stay::new`]).
//! 2. **Hotel existence** through the [`HotelCatalog`]. Catalog failures surface unchanged.
//! 3. **Room-type offering** on the returned hotel.
//! 4. **Policy**, only when a [`BookingPolicy`] is attached.
//! 5. **Availability**: every booking of the hotel that overlaps the stay is counted against the
//!    hotel's rooms of the requested type, under the hotel's ledger lock.
//! 6. **Commit**: the first room of the requested type not held by an overlapping booking is
//!    assigned and the record appended, still under the same lock.
//!
//! The first failing step decides the error and nothing is recorded.

use crate::error::BookingError;
use crate::ledger::{Booking, BookingLedger, HotelReservations, InMemoryLedger};
use crate::stay::Stay;
use chrono::NaiveDateTime;
use std::fmt;
use std::sync::Arc;
use stay_domain::{BookingRequest, EmployeeId, Hotel, HotelId, RoomType};
use stay_kernel::{BookingPolicy, HotelCatalog, safe_nanoid};
use tracing::{debug, info, instrument, warn};

struct BookerInner<L> {
    catalog: Arc<dyn HotelCatalog>,
    ledger: L,
    policy: Option<Arc<dyn BookingPolicy>>,
}

impl<L: fmt::Debug> fmt::Debug for BookerInner<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookerInner")
            .field("catalog", &self.catalog)
            .field("ledger", &self.ledger)
            .field("policy", &self.policy.is_some())
            .finish()
    }
}

/// Thread-safe handle that validates and records bookings.
///
/// Cloning is cheap; clones share the catalog, the ledger and the policy.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use std::sync::Arc;
/// use stay_booking::{Booker, BookingErrorKind};
/// use stay_catalog::InMemoryCatalog;
/// use stay_domain::{Room, RoomType};
/// use stay_kernel::HotelCatalog;
///
/// let catalog = Arc::new(InMemoryCatalog::new());
/// catalog
///     .add_hotel("the-hotel".into(), "The Hotel".to_owned(), vec![Room::new(RoomType::Single, "04")])
///     .unwrap();
/// let booker = Booker::new(catalog);
///
/// let day = |d| NaiveDate::from_ymd_opt(2019, 3, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let booking = booker
///     .book(&"alice".into(), &"the-hotel".into(), RoomType::Single, day(3), day(4))
///     .unwrap();
/// assert_eq!(booking.room_number(), "04");
///
/// let err = booker
///     .book(&"bob".into(), &"the-hotel".into(), RoomType::Single, day(3), day(4))
///     .unwrap_err();
/// assert_eq!(err.kind(), BookingErrorKind::NotAvailable);
/// ```
pub struct Booker<L: BookingLedger = InMemoryLedger> {
    inner: Arc<BookerInner<L>>,
}

impl<L: BookingLedger> Clone for Booker<L> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<L: BookingLedger> fmt::Debug for Booker<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Booker").field("inner", &self.inner).finish()
    }
}

impl Booker<InMemoryLedger> {
    /// A booker over `catalog` with a fresh in-memory ledger and no policy.
    #[must_use]
    pub fn new(catalog: Arc<dyn HotelCatalog>) -> Self {
        Self::builder(catalog).build()
    }

    #[must_use = "The booker is not created until you call .build()"]
    pub fn builder(catalog: Arc<dyn HotelCatalog>) -> BookerBuilder<InMemoryLedger> {
        BookerBuilder { catalog, ledger: InMemoryLedger::new(), policy: None }
    }
}

impl<L: BookingLedger> Booker<L> {
    /// Validates a booking request and records it on success.
    ///
    /// # Errors
    /// * [`BookingError::CheckoutInvalid`] if the stay is not at least one calendar day long.
    /// * [`BookingError::Catalog`] carrying the catalog's own error if the lookup failed.
    /// * [`BookingError::InvalidHotel`] if the catalog does not know `hotel_id`.
    /// * [`BookingError::RoomNotOffered`] if the hotel has no room of `room_type`.
    /// * [`BookingError::NotPermitted`] if an attached policy refuses the room type.
    /// * [`BookingError::NotAvailable`] if the hotel already holds as many overlapping bookings
    ///   as it has rooms of `room_type`.
    #[instrument(
        skip_all,
        fields(employee = %employee, hotel = %hotel_id, room = %room_type, %check_in, %check_out)
    )]
    pub fn book(
        &self,
        employee: &EmployeeId,
        hotel_id: &HotelId,
        room_type: RoomType,
        check_in: NaiveDateTime,
        check_out: NaiveDateTime,
    ) -> Result<Booking, BookingError> {
        let stay = Stay::new(check_in, check_out)?;
        let hotel = self.offering_hotel(hotel_id, room_type)?;

        if let Some(policy) = &self.inner.policy
            && !policy.allow(employee, room_type)
        {
            debug!("Booking policy refused the room type");
            return Err(BookingError::NotPermitted);
        }

        self.inner.ledger.with_hotel(hotel_id, |reservations| {
            let room_number = assign_room(&hotel, reservations, room_type, &stay)?;
            let booking = Booking::new(
                safe_nanoid!(),
                hotel_id.clone(),
                employee.clone(),
                room_type,
                room_number,
                stay,
            );
            reservations.push(booking.clone());

            info!(
                reference = booking.reference(),
                room_number = booking.room_number(),
                %stay,
                "Booking recorded"
            );
            Ok(booking)
        })
    }

    /// [`Booker::book`] for a request read from configuration or a transport.
    ///
    /// # Errors
    /// See [`Booker::book`].
    pub fn book_request(&self, request: &BookingRequest) -> Result<Booking, BookingError> {
        self.book(
            &request.employee,
            &request.hotel,
            request.room,
            request.check_in,
            request.check_out,
        )
    }

    /// Number of rooms of `room_type` still free for the whole period, without booking.
    ///
    /// Counts the same way [`Booker::book`] does: every overlapping booking of the hotel takes
    /// one unit of the room type's capacity. Policies are not consulted.
    ///
    /// # Errors
    /// The same stay, catalog, hotel and room-type errors as [`Booker::book`].
    pub fn availability(
        &self,
        hotel_id: &HotelId,
        room_type: RoomType,
        check_in: NaiveDateTime,
        check_out: NaiveDateTime,
    ) -> Result<usize, BookingError> {
        let stay = Stay::new(check_in, check_out)?;
        let hotel = self.offering_hotel(hotel_id, room_type)?;
        let capacity = hotel.capacity(room_type);

        let taken = self
            .inner
            .ledger
            .with_hotel(hotel_id, |reservations| reservations.overlapping(&stay).count());

        Ok(capacity.saturating_sub(taken))
    }

    /// The hotel's bookings in commit order.
    #[must_use]
    pub fn bookings(&self, hotel_id: &HotelId) -> Vec<Booking> {
        self.inner.ledger.snapshot(hotel_id)
    }

    #[must_use]
    pub fn ledger(&self) -> &L {
        &self.inner.ledger
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<dyn HotelCatalog> {
        &self.inner.catalog
    }

    /// Steps 2 and 3: the hotel must exist and offer the room type.
    fn offering_hotel(
        &self,
        hotel_id: &HotelId,
        room_type: RoomType,
    ) -> Result<Arc<Hotel>, BookingError> {
        let hotel = match self.inner.catalog.get_hotel(hotel_id) {
            Ok(Some(hotel)) => hotel,
            Ok(None) => {
                debug!("Hotel unknown to the catalog");
                return Err(BookingError::InvalidHotel);
            },
            Err(err) => {
                warn!(error = %err, "Hotel catalog lookup failed");
                return Err(err.into());
            },
        };

        if !hotel.offers(room_type) {
            debug!("Hotel does not offer the room type");
            return Err(BookingError::RoomNotOffered);
        }

        Ok(hotel)
    }
}

/// Checks capacity and picks the first room of `room_type`, in catalog order, that no
/// overlapping booking holds.
///
/// Capacity is measured against every overlapping booking of the hotel, whatever its room type.
/// Room types only matter for choosing the number.
fn assign_room(
    hotel: &Hotel,
    reservations: &HotelReservations,
    room_type: RoomType,
    stay: &Stay,
) -> Result<String, BookingError> {
    let capacity = hotel.capacity(room_type);
    let conflicting = reservations.overlapping(stay).count();

    if conflicting >= capacity {
        debug!(capacity, conflicting, "No room left for the period");
        return Err(BookingError::NotAvailable);
    }

    let taken: Vec<&str> = reservations
        .overlapping(stay)
        .filter(|booking| booking.room_type() == room_type)
        .map(Booking::room_number)
        .collect();

    hotel
        .options(room_type)
        .find(|room| !taken.contains(&room.number.as_str()))
        .map(|room| room.number.clone())
        .ok_or(BookingError::NotAvailable)
}

/// Configures a [`Booker`] before it is shared.
#[must_use = "The booker is not created until you call .build()"]
pub struct BookerBuilder<L> {
    catalog: Arc<dyn HotelCatalog>,
    ledger: L,
    policy: Option<Arc<dyn BookingPolicy>>,
}

impl<L: fmt::Debug> fmt::Debug for BookerBuilder<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookerBuilder")
            .field("catalog", &self.catalog)
            .field("ledger", &self.ledger)
            .field("policy", &self.policy.is_some())
            .finish()
    }
}

impl<L: BookingLedger> BookerBuilder<L> {
    /// Replaces the ledger, e.g. with a store that outlives the process.
    pub fn ledger<M: BookingLedger>(self, ledger: M) -> BookerBuilder<M> {
        BookerBuilder { catalog: self.catalog, ledger, policy: self.policy }
    }

    /// Attaches a company booking policy, consulted before availability.
    pub fn policy(mut self, policy: Arc<dyn BookingPolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn build(self) -> Booker<L> {
        Booker {
            inner: Arc::new(BookerInner {
                catalog: self.catalog,
                ledger: self.ledger,
                policy: self.policy,
            }),
        }
    }
}
