use crate::api::HotelApi;
use crate::commands::HotelPaths;
use crate::config::HotelConfig;
use crate::error::{HotelError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;

pub struct HotelContext {
    pub api: HotelApi<FileStore>,
}

/// The per-user data directory, e.g. `~/.local/share/pethotel` on Linux.
pub fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "pethotel", "pethotel")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| HotelError::Store("Could not determine data dir".to_string()))
}

/// Loads configuration and every record list from `data` (or the default data
/// directory). Nothing is created on disk until something is saved.
pub fn initialize(data: Option<PathBuf>) -> Result<HotelContext> {
    let data = match data {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    tracing::debug!(data = %data.display(), "opening data directory");

    let config = HotelConfig::load(&data)?;
    let store = FileStore::open_dir(data.clone())?;
    let api = HotelApi::new(store, HotelPaths::new(data), config);
    Ok(HotelContext { api })
}
