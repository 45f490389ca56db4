use super::backend::{Collection, StorageBackend};
use super::DataStore;
use crate::error::{HotelError, Result};
use crate::model::{Booking, BookingTier, Customer, Pet};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// The four record lists held in memory, each mirrored to its collection.
///
/// Reads are served from memory. Every `save_*` encodes the complete new list,
/// hands it to the backend and only then swaps it into memory, so a failed
/// write leaves the in-memory view on the last persisted state.
pub struct HotelStore<B: StorageBackend> {
    backend: B,
    customers: Vec<Customer>,
    pets: Vec<Pet>,
    bookings: Vec<Booking>,
    archived: Vec<Booking>,
}

impl<B: StorageBackend> HotelStore<B> {
    /// Wraps a backend and loads every collection from it.
    pub fn open(backend: B) -> Result<Self> {
        let mut store = Self::with_backend(backend);
        store.reload()?;
        Ok(store)
    }

    /// Wraps a backend without reading it; all lists start empty.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            customers: Vec::new(),
            pets: Vec::new(),
            bookings: Vec::new(),
            archived: Vec::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>> {
        let raw = self.backend.read(collection)?;
        let records = decode_list(collection, raw)?;
        tracing::debug!(
            file = collection.file_name(),
            count = records.len(),
            "loaded collection"
        );
        Ok(records)
    }

    fn persist<T: Serialize>(&self, collection: Collection, records: &[T]) -> Result<()> {
        let content = serde_json::to_string_pretty(records).map_err(HotelError::Serialization)?;
        self.backend.write(collection, &content)?;
        tracing::debug!(
            file = collection.file_name(),
            count = records.len(),
            "saved collection"
        );
        Ok(())
    }
}

/// Turns stored text into a record list.
///
/// Nothing stored, an empty file, or a file cut short mid-document all read as
/// an empty list. Any other malformed content is an error.
pub fn decode_list<T: DeserializeOwned>(
    collection: Collection,
    raw: Option<String>,
) -> Result<Vec<T>> {
    let Some(content) = raw else {
        return Ok(Vec::new());
    };
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    match serde_json::from_str(&content) {
        Ok(records) => Ok(records),
        Err(e) if e.is_eof() => {
            tracing::warn!(
                file = collection.file_name(),
                "collection truncated, starting from an empty list"
            );
            Ok(Vec::new())
        }
        Err(e) => Err(HotelError::Serialization(e)),
    }
}

impl<B: StorageBackend> DataStore for HotelStore<B> {
    fn customers(&self) -> &[Customer] {
        &self.customers
    }

    fn pets(&self) -> &[Pet] {
        &self.pets
    }

    fn bookings(&self, tier: BookingTier) -> &[Booking] {
        match tier {
            BookingTier::Active => &self.bookings,
            BookingTier::Archived => &self.archived,
        }
    }

    fn save_customers(&mut self, customers: Vec<Customer>) -> Result<()> {
        self.persist(Collection::Customers, &customers)?;
        self.customers = customers;
        Ok(())
    }

    fn save_pets(&mut self, pets: Vec<Pet>) -> Result<()> {
        self.persist(Collection::Pets, &pets)?;
        self.pets = pets;
        Ok(())
    }

    fn save_bookings(&mut self, tier: BookingTier, bookings: Vec<Booking>) -> Result<()> {
        self.persist(Collection::for_tier(tier), &bookings)?;
        match tier {
            BookingTier::Active => self.bookings = bookings,
            BookingTier::Archived => self.archived = bookings,
        }
        Ok(())
    }

    fn reload(&mut self) -> Result<()> {
        self.customers = self.load(Collection::Customers)?;
        self.pets = self.load(Collection::Pets)?;
        self.bookings = self.load(Collection::Bookings)?;
        self.archived = self.load(Collection::ArchivedBookings)?;
        Ok(())
    }
}
