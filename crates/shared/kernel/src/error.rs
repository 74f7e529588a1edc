use std::borrow::Cow;

/// Failures raised by a [`HotelCatalog`](crate::HotelCatalog) backend.
///
/// An unknown hotel id is not an error: lookups report it as `Ok(None)`.
#[stay_derive::stay_error]
#[derive(Clone)]
pub enum CatalogError {
    /// The backing store could not be reached or answered with a failure.
    #[error("Hotel catalog unavailable{}: {message}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A hotel with the same id is already registered.
    #[error("Hotel '{id}' already exists{}", format_context(.context))]
    Duplicate { id: String, context: Option<Cow<'static, str>> },

    /// The hotel definition breaks a catalog invariant.
    #[error("Invalid hotel definition{}: {message}", format_context(.context))]
    InvalidHotel { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal catalog error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
