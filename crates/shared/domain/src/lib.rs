//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `strum`, `chrono`).
//! Keep it lean: no I/O, no locking, no booking rules. Hotels, rooms and identifiers live here
//! so that the catalog, the booking ledger and the configuration layer agree on one vocabulary.

pub mod config;
pub mod hotel;
pub mod ids;
pub mod request;

pub use hotel::{Hotel, Room, RoomType};
pub use ids::{CompanyId, EmployeeId, HotelId};
pub use request::BookingRequest;
