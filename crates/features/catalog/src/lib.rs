//! # Catalog
//!
//! In-memory backends for the collaborator contracts declared in `stay-kernel`:
//!
//! * [`InMemoryCatalog`] implements [`HotelCatalog`](stay_kernel::HotelCatalog) and can be seeded
//!   from [`CatalogConfig`](stay_domain::config::CatalogConfig).
//! * [`InMemoryDirectory`] implements [`EmployeeDirectory`](stay_kernel::EmployeeDirectory).
//!
//! Both are thread-safe handles guarded by `parking_lot` locks. Hotels are handed out as
//! `Arc<Hotel>` snapshots, so a booker never observes a hotel changing under it.

mod directory;
mod memory;

pub use crate::directory::InMemoryDirectory;
pub use crate::memory::InMemoryCatalog;
