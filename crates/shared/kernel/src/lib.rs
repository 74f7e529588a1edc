//! Kernel utilities shared across slices.
//! Keep this crate lightweight: it holds the collaborator contracts the booking core consumes,
//! layered config loading, and ID generation.
//!
//! ## ID generation
//! Use `safe_nanoid!` for URL-safe, unambiguous IDs:
//! ```rust
//! # use stay_kernel::safe_nanoid;
//! let id = safe_nanoid!();
//! assert_eq!(id.len(), 12);
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use stay_kernel::config::load_config;
//! use stay_kernel::domain::config::StayConfig;
//!
//! let cfg: StayConfig = load_config(Some("stay.toml")).unwrap();
//! ```
pub mod capability;
pub mod config;
mod error;

// Alphabet excludes visually ambiguous characters (I, O, l, 0, 1).
pub const SAFE_ALPHABET: &[char; 55] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub use crate::capability::{BookingPolicy, EmployeeDirectory, HotelCatalog};
pub use crate::error::{CatalogError, CatalogErrorExt, CatalogErrorKind};
pub use nanoid::nanoid;
pub use stay_domain as domain;

/// Generates an unambiguous `NanoID` (no visually confusing characters).
#[macro_export]
macro_rules! safe_nanoid {
    () => {
        $crate::nanoid!(12, $crate::SAFE_ALPHABET)
    };
    ($size:expr) => {
        $crate::nanoid!($size, $crate::SAFE_ALPHABET)
    };
}
