use std::borrow::Cow;
use stay_kernel::CatalogError;

/// Why a booking was refused.
///
/// Every variant is final for the given input. Compare with [`BookingError::kind`] to branch:
/// `err.kind() == BookingErrorKind::NotAvailable`.
#[stay_derive::stay_error]
pub enum BookingError {
    /// Check-out is not after check-in, or falls on the check-in calendar day.
    #[error("Check-out must be on a later calendar day than check-in")]
    CheckoutInvalid,

    /// The catalog does not know the hotel.
    #[error("The given hotel id is not valid")]
    InvalidHotel,

    /// The hotel has no room of the requested type.
    #[error("The selected hotel does not offer that room type")]
    RoomNotOffered,

    /// An attached booking policy denied the room type to the employee.
    #[error("The employee may not book that room type")]
    NotPermitted,

    /// Every room of the requested type is taken for an overlapping period.
    #[error("No room of that type is available for the requested period")]
    NotAvailable,

    /// Catalog lookup failure, passed through as-is.
    #[error("{source}")]
    Catalog { source: CatalogError, context: Option<Cow<'static, str>> },
}

impl BookingError {
    /// The propagated catalog failure, if this is one.
    #[must_use]
    pub const fn catalog_error(&self) -> Option<&CatalogError> {
        match self {
            Self::Catalog { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Unwraps a propagated catalog failure, returning every other error unchanged.
    ///
    /// # Errors
    /// Returns `self` when the error did not originate in the catalog.
    pub fn into_catalog_error(self) -> Result<CatalogError, Self> {
        match self {
            Self::Catalog { source, .. } => Ok(source),
            other => Err(other),
        }
    }
}
