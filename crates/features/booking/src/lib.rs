//! # Corporate Hotel Booking
//!
//! Validates booking requests from client-company employees and records the accepted ones.
//!
//! ## Architecture
//!
//! 1.  **Stay rules ([`stay`]):** the minimum stay length and the inclusive overlap test.
//! 2.  **Ledger ([`ledger`]):** append-only storage of accepted bookings, partitioned per hotel.
//!     Each hotel has its own lock, so the availability check and the commit for one hotel form a
//!     single step while different hotels proceed in parallel.
//! 3.  **Booker ([`booker`]):** the validation pipeline. Hotel data comes from a
//!     [`HotelCatalog`](stay_kernel::HotelCatalog); company rules come from an optional
//!     [`BookingPolicy`](stay_kernel::BookingPolicy).
//!
//! ## Error handling
//!
//! Every refusal is a [`BookingError`] variant. Match on [`BookingError::kind`] to branch without
//! caring about payloads. Catalog failures are carried unchanged inside
//! [`BookingError::Catalog`].

pub mod booker;
mod error;
pub mod ledger;
pub mod stay;

pub use crate::booker::{Booker, BookerBuilder};
pub use crate::error::{BookingError, BookingErrorExt, BookingErrorKind};
pub use crate::ledger::{Booking, BookingLedger, HotelReservations, InMemoryLedger};
pub use crate::stay::Stay;
