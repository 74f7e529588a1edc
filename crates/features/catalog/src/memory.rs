use fxhash::{FxHashMap, FxHashSet};
use parking_lot::RwLock;
use std::sync::Arc;
use stay_domain::config::{CatalogConfig, HotelSeed};
use stay_domain::{Hotel, HotelId, Room};
use stay_kernel::{CatalogError, HotelCatalog};
use tracing::{debug, info};

/// A thread-safe, process-local hotel catalog.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    hotels: RwLock<FxHashMap<HotelId, Arc<Hotel>>>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from configuration seeds, in order.
    ///
    /// # Errors
    /// Fails on the first seed that [`HotelCatalog::add_hotel`] rejects.
    pub fn from_seeds<'a>(
        seeds: impl IntoIterator<Item = &'a HotelSeed>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self::new();
        for seed in seeds {
            catalog.add_hotel(seed.id.clone(), seed.name.clone(), seed.rooms.clone())?;
        }
        info!(hotels = catalog.len(), "Hotel catalog seeded");
        Ok(catalog)
    }

    /// Shorthand for [`InMemoryCatalog::from_seeds`] over a [`CatalogConfig`].
    ///
    /// # Errors
    /// See [`InMemoryCatalog::from_seeds`].
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        Self::from_seeds(&config.hotels)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hotels.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hotels.read().is_empty()
    }
}

impl HotelCatalog for InMemoryCatalog {
    fn add_hotel(
        &self,
        id: HotelId,
        name: String,
        rooms: Vec<Room>,
    ) -> Result<Arc<Hotel>, CatalogError> {
        validate_definition(&id, &name, &rooms)?;

        let mut hotels = self.hotels.write();
        if hotels.contains_key(&id) {
            return Err(CatalogError::Duplicate { id: id.to_string(), context: None });
        }

        let hotel = Arc::new(Hotel::new(id.clone(), name, rooms));
        hotels.insert(id, Arc::clone(&hotel));
        debug!(hotel = %hotel.id, rooms = hotel.rooms.len(), "Hotel registered");

        Ok(hotel)
    }

    fn get_hotel(&self, id: &HotelId) -> Result<Option<Arc<Hotel>>, CatalogError> {
        Ok(self.hotels.read().get(id).cloned())
    }
}

fn validate_definition(id: &HotelId, name: &str, rooms: &[Room]) -> Result<(), CatalogError> {
    if id.as_str().trim().is_empty() {
        return Err(CatalogError::InvalidHotel {
            message: "Hotel id cannot be empty".into(),
            context: None,
        });
    }

    if name.trim().is_empty() {
        return Err(CatalogError::InvalidHotel {
            message: format!("Hotel '{id}' has an empty name").into(),
            context: None,
        });
    }

    let mut numbers = FxHashSet::default();
    if let Some(room) = rooms.iter().find(|room| !numbers.insert(room.number.as_str())) {
        return Err(CatalogError::InvalidHotel {
            message: format!("Room number '{}' appears twice", room.number).into(),
            context: Some(format!("Hotel '{id}'").into()),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stay_domain::RoomType;
    use stay_kernel::CatalogErrorKind;

    fn singles(numbers: &[&str]) -> Vec<Room> {
        numbers.iter().map(|n| Room::new(RoomType::Single, *n)).collect()
    }

    #[test]
    fn unknown_hotel_is_absent_not_an_error() {
        let catalog = InMemoryCatalog::new();
        let found = catalog.get_hotel(&HotelId::from("The Infinity Hotel")).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn added_hotel_is_returned_by_lookup() {
        let catalog = InMemoryCatalog::new();
        let added = catalog
            .add_hotel("the-hotel".into(), "The Hotel".to_owned(), singles(&["03", "04"]))
            .unwrap();

        let found = catalog.get_hotel(&added.id).unwrap().expect("hotel should exist");
        assert!(Arc::ptr_eq(&added, &found));
        assert_eq!(found.capacity(RoomType::Single), 2);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let catalog = InMemoryCatalog::new();
        catalog.add_hotel("h".into(), "H".to_owned(), vec![]).unwrap();

        let err = catalog.add_hotel("h".into(), "Other".to_owned(), vec![]).unwrap_err();
        assert_eq!(err.kind(), CatalogErrorKind::Duplicate);
        assert_eq!(catalog.get_hotel(&"h".into()).unwrap().unwrap().name, "H");
    }

    #[test]
    fn repeated_room_numbers_are_rejected() {
        let catalog = InMemoryCatalog::new();
        let err = catalog
            .add_hotel("h".into(), "H".to_owned(), singles(&["04", "05", "04"]))
            .unwrap_err();

        assert_eq!(err.kind(), CatalogErrorKind::InvalidHotel);
        assert!(err.to_string().contains("'04'"), "unexpected message: {err}");
        assert!(catalog.is_empty());
    }

    #[test]
    fn blank_names_are_rejected() {
        let catalog = InMemoryCatalog::new();
        let err = catalog.add_hotel("h".into(), "  ".to_owned(), vec![]).unwrap_err();
        assert_eq!(err.kind(), CatalogErrorKind::InvalidHotel);
    }
}
