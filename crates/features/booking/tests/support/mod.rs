#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;
use stay_booking::Booker;
use stay_catalog::{InMemoryCatalog, InMemoryDirectory};
use stay_domain::{CompanyId, EmployeeId, Hotel, HotelId, Room, RoomType};
use stay_kernel::{BookingPolicy, CatalogError, EmployeeDirectory, HotelCatalog};

/// Parses `YYYY-MM-DD HH:MM`.
pub fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid test timestamp")
}

/// Midnight of `YYYY-MM-DD`.
pub fn day(s: &str) -> NaiveDateTime {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .expect("valid test date")
        .and_hms_opt(0, 0, 0)
        .expect("midnight exists")
}

/// `the-hotel` with a single room, plus `twin-hotel` with two singles and a double.
pub fn catalog() -> Arc<InMemoryCatalog> {
    let catalog = Arc::new(InMemoryCatalog::new());
    catalog
        .add_hotel("the-hotel".into(), "The Hotel".to_owned(), vec![Room::new(RoomType::Single, "04")])
        .expect("the-hotel registers");
    catalog
        .add_hotel(
            "twin-hotel".into(),
            "Twin Hotel".to_owned(),
            vec![
                Room::new(RoomType::Single, "03"),
                Room::new(RoomType::Double, "10"),
                Room::new(RoomType::Single, "01"),
            ],
        )
        .expect("twin-hotel registers");
    catalog
}

pub fn booker() -> Booker {
    Booker::new(catalog())
}

/// A catalog whose backend is down.
#[derive(Debug)]
pub struct UnreachableCatalog;

impl UnreachableCatalog {
    pub fn failure() -> CatalogError {
        CatalogError::Unavailable {
            message: "connection refused".into(),
            context: Some("hotels-db".into()),
        }
    }
}

impl HotelCatalog for UnreachableCatalog {
    fn add_hotel(&self, _: HotelId, _: String, _: Vec<Room>) -> Result<Arc<Hotel>, CatalogError> {
        Err(Self::failure())
    }

    fn get_hotel(&self, _: &HotelId) -> Result<Option<Arc<Hotel>>, CatalogError> {
        Err(Self::failure())
    }
}

/// Employees of `frugal-corp` may only book single rooms; everyone else is unrestricted.
#[derive(Debug)]
pub struct FrugalPolicy {
    pub directory: InMemoryDirectory,
}

impl FrugalPolicy {
    pub fn new() -> Self {
        let directory = InMemoryDirectory::new();
        directory.add_employee("dave".into(), "frugal-corp".into());
        directory.add_employee("erin".into(), "lavish-corp".into());
        Self { directory }
    }
}

impl BookingPolicy for FrugalPolicy {
    fn allow(&self, employee: &EmployeeId, room_type: RoomType) -> bool {
        self.directory.company_of(employee) != Some(CompanyId::from("frugal-corp"))
            || room_type == RoomType::Single
    }
}
