use super::backend::{Collection, StorageBackend};
use crate::error::{HotelError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use uuid::Uuid;

/// Stores each collection as a pretty-printed JSON file under one data directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(HotelError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, collection: Collection) -> Result<Option<String>> {
        let path = self.location(collection);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(HotelError::Io(e)),
        }
    }

    fn write(&self, collection: Collection, content: &str) -> Result<()> {
        self.ensure_dir()?;
        let path = self.location(collection);

        // Write to a sibling temp file, then rename over the target.
        let tmp_file = self.root.join(format!(".{}-{}.tmp", collection.file_name(), Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(HotelError::Io)?;
        fs::rename(&tmp_file, &path).map_err(HotelError::Io)?;
        Ok(())
    }

    fn location(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.file_name())
    }
}
