use crate::hotel::Room;
use crate::ids::HotelId;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared by the facade and the shell.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StayConfigInner {
    pub logging: LoggingConfig,
    pub catalog: CatalogConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct StayConfig {
    #[serde(flatten, default)]
    inner: Arc<StayConfigInner>,
}

impl Deref for StayConfig {
    type Target = StayConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for StayConfig {
    fn deref_mut(&mut self) -> &mut StayConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Logging sink settings. `level` accepts `trace`, `debug`, `info`, `warn`, `error` or `off`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub name: String,
    pub level: String,
    pub console: bool,
    pub path: Option<PathBuf>,
    pub json: bool,
    pub filter: Option<String>,
}

/// Hotels loaded into the in-memory catalog at startup.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub hotels: Vec<HotelSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HotelSeed {
    pub id: HotelId,
    pub name: String,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            name: "stay".to_owned(),
            level: "info".to_owned(),
            console: true,
            path: None,
            json: false,
            filter: None,
        }
    }
}
