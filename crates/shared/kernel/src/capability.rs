//! Collaborator contracts consumed by the booking core.
//!
//! The booker never owns hotel data, employees or company rules. It reaches them through these
//! object-safe traits so backing stores can be swapped without touching the validation pipeline.

use crate::error::CatalogError;
use std::fmt::Debug;
use std::sync::Arc;
use stay_domain::{CompanyId, EmployeeId, Hotel, HotelId, Room, RoomType};

/// Read/write access to the hotel catalog.
pub trait HotelCatalog: Debug + Send + Sync {
    /// Registers a hotel and returns the shared read-only view handed to bookers.
    ///
    /// # Errors
    /// Returns [`CatalogError::Duplicate`] if the id is taken, or [`CatalogError::InvalidHotel`]
    /// if the definition breaks a catalog invariant.
    fn add_hotel(
        &self,
        id: HotelId,
        name: String,
        rooms: Vec<Room>,
    ) -> Result<Arc<Hotel>, CatalogError>;

    /// Looks up a hotel.
    ///
    /// An unknown id yields `Ok(None)`. `Err` is reserved for backend failures, so callers can
    /// tell "no such hotel" apart from "could not ask".
    ///
    /// # Errors
    /// Backend-specific, typically [`CatalogError::Unavailable`].
    fn get_hotel(&self, id: &HotelId) -> Result<Option<Arc<Hotel>>, CatalogError>;
}

/// Membership of employees in client companies.
pub trait EmployeeDirectory: Debug + Send + Sync {
    /// Adds an employee, or moves an existing one to `company`.
    fn add_employee(&self, id: EmployeeId, company: CompanyId);

    /// Removes an employee. Removing an unknown employee is a no-op.
    fn delete_employee(&self, id: &EmployeeId);

    fn company_of(&self, id: &EmployeeId) -> Option<CompanyId>;
}

/// Company booking rules, queried per employee and room type.
///
/// Only the query side lives here; how rules are authored and stored is up to the implementor.
pub trait BookingPolicy: Debug + Send + Sync {
    /// Whether `employee` may book a room of `room_type`.
    fn allow(&self, employee: &EmployeeId, room_type: RoomType) -> bool;
}
