//! Facade crate for corporate stay booking.
//! Re-exports domain/kernel primitives and the booking core, and wires the in-memory backends.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `stay` (the `memory` feature is on by default).
//! - Call [`init`] with a loaded [`StayConfig`](domain::config::StayConfig) to get a ready
//!   [`Platform`].

pub use stay_booking as booking;
pub use stay_domain as domain;
pub use stay_kernel as kernel;

pub use stay_booking::{Booker, Booking, BookingError, BookingErrorKind};

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "booking",
        #[cfg(feature = "memory")]
        "memory",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[cfg(feature = "memory")]
pub use platform::{Platform, init};

#[cfg(feature = "memory")]
mod platform {
    use std::sync::Arc;
    use stay_booking::Booker;
    use stay_catalog::{InMemoryCatalog, InMemoryDirectory};
    use stay_domain::config::StayConfig;
    use stay_kernel::{CatalogError, CatalogErrorExt};
    use tracing::info;

    /// The wired collaborators and the booker that uses them.
    ///
    /// The booker shares `catalog`; hotels added through it are immediately bookable.
    #[derive(Debug, Clone)]
    pub struct Platform {
        pub catalog: Arc<InMemoryCatalog>,
        pub directory: Arc<InMemoryDirectory>,
        pub booker: Booker,
    }

    /// Seeds the catalog from `config.catalog` and builds a policy-free booker over it.
    ///
    /// # Errors
    /// Returns the [`CatalogError`] of the first hotel seed that cannot be registered.
    pub fn init(config: &StayConfig) -> Result<Platform, CatalogError> {
        let catalog = Arc::new(
            InMemoryCatalog::from_config(&config.catalog).context("Seeding hotel catalog")?,
        );
        let directory = Arc::new(InMemoryDirectory::new());
        let booker = Booker::new(Arc::clone(&catalog) as Arc<dyn stay_kernel::HotelCatalog>);

        info!(hotels = catalog.len(), "Stay platform initialized");

        Ok(Platform { catalog, directory, booker })
    }
}
