use stay_domain::RoomType;
use stay_domain::config::{CatalogConfig, LoggingConfig, StayConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let logging = LoggingConfig::default();
    assert_eq!(logging.name, "stay");
    assert_eq!(logging.level, "info");
    assert!(logging.console);
    assert!(logging.path.is_none());

    assert!(CatalogConfig::default().hotels.is_empty());
}

#[test]
fn stay_config_deserializes() {
    let raw = json!({
        "logging": { "level": "debug", "path": "/tmp/logs" },
        "catalog": {
            "hotels": [{
                "id": "the-hotel",
                "name": "The Hotel",
                "rooms": [
                    { "type": "room:single", "number": "03" },
                    { "type": "room:suite", "number": "42" }
                ]
            }]
        }
    });

    let cfg: StayConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.logging.name, "stay");
    assert_eq!(cfg.logging.path, Some(std::path::PathBuf::from("/tmp/logs")));

    let hotel = &cfg.catalog.hotels[0];
    assert_eq!(hotel.id.as_str(), "the-hotel");
    assert_eq!(hotel.rooms[1].room_type, RoomType::Suite);
}

#[test]
fn unknown_room_type_is_rejected() {
    let raw = json!({
        "catalog": { "hotels": [{ "id": "h", "name": "H", "rooms": [{ "type": "room:penthouse", "number": "1" }] }] }
    });

    assert!(serde_json::from_value::<StayConfig>(raw).is_err());
}

#[test]
fn deref_mut_copies_on_write() {
    let original = StayConfig::default();
    let mut changed = original.clone();
    changed.logging.level = "trace".to_owned();

    assert_eq!(original.logging.level, "info");
    assert_eq!(changed.logging.level, "trace");
}
