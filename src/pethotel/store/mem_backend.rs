use super::backend::{Collection, StorageBackend};
use crate::error::{HotelError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the application is single-threaded.
/// Content is kept in serialized form so tests exercise the same codec as disk.
#[derive(Default)]
pub struct MemBackend {
    files: RefCell<HashMap<Collection, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper to plant raw content, e.g. a truncated file.
    pub fn put_raw(&self, collection: Collection, content: &str) {
        self.files
            .borrow_mut()
            .insert(collection, content.to_string());
    }

    pub fn raw(&self, collection: Collection) -> Option<String> {
        self.files.borrow().get(&collection).cloned()
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, collection: Collection) -> Result<Option<String>> {
        Ok(self.files.borrow().get(&collection).cloned())
    }

    fn write(&self, collection: Collection, content: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(HotelError::Store("Simulated write error".to_string()));
        }
        self.files
            .borrow_mut()
            .insert(collection, content.to_string());
        Ok(())
    }

    fn location(&self, collection: Collection) -> PathBuf {
        PathBuf::from("memory://").join(collection.file_name())
    }
}
