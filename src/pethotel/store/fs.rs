use super::fs_backend::FsBackend;
use super::hotel_store::HotelStore;
use crate::error::Result;
use std::path::PathBuf;

pub type FileStore = HotelStore<FsBackend>;

impl FileStore {
    /// Opens (and loads) the store kept under `root`. The directory is created lazily on first save.
    pub fn open_dir(root: PathBuf) -> Result<Self> {
        HotelStore::open(FsBackend::new(root))
    }
}
