//! # Storage Layer
//!
//! This module defines the storage abstraction for pethotel. The [`DataStore`] trait
//! allows the application to work with different storage backends.
//!
//! ## Record Lists
//!
//! Every entity list (customers, pets, active bookings, archived bookings) is held in
//! memory in its original order and mirrored 1:1 to one backing file:
//!
//! - **Load** replaces the list wholesale. A missing, empty, or truncated file is an
//!   empty list; anything else that fails to decode is an error.
//! - **Save** serializes the whole list and replaces the backing content. There are no
//!   partial writes and no locking; a single process owns the data directory.
//!
//! A mutation is complete only once its list has been rewritten. Commands therefore
//! build the new list and hand it to `save_*`, which writes first and swaps the
//! in-memory list afterwards.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production store over [`fs_backend::FsBackend`].
//! - [`memory::InMemoryStore`]: For testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── customers.json
//! ├── pets.json
//! ├── bookings.json
//! ├── archived_bookings.json
//! ├── passwords.txt        # credential hashes (see auth)
//! └── config.json          # HotelConfig
//! ```

use crate::error::{HotelError, Result};
use crate::model::{Booking, BookingTier, Customer, Pet, Record};
use uuid::Uuid;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod hotel_store;
pub mod mem_backend;
pub mod memory;

pub use backend::Collection;

/// Abstract interface for record storage.
///
/// Implementations serve reads from memory and must persist a full list on every save.
pub trait DataStore {
    fn customers(&self) -> &[Customer];

    fn pets(&self) -> &[Pet];

    fn bookings(&self, tier: BookingTier) -> &[Booking];

    /// Replace the customer list (persisted before it becomes visible)
    fn save_customers(&mut self, customers: Vec<Customer>) -> Result<()>;

    /// Replace the pet list (persisted before it becomes visible)
    fn save_pets(&mut self, pets: Vec<Pet>) -> Result<()>;

    /// Replace one booking list (persisted before it becomes visible)
    fn save_bookings(&mut self, tier: BookingTier, bookings: Vec<Booking>) -> Result<()>;

    /// Discard in-memory lists and load every collection again
    fn reload(&mut self) -> Result<()>;

    fn customer(&self, id: &Uuid) -> Result<&Customer> {
        find(self.customers(), id)
    }

    fn pet(&self, id: &Uuid) -> Result<&Pet> {
        find(self.pets(), id)
    }

    fn booking(&self, tier: BookingTier, id: &Uuid) -> Result<&Booking> {
        find(self.bookings(tier), id)
    }
}

/// Linear lookup by stable id.
pub fn find<'a, T: Record>(records: &'a [T], id: &Uuid) -> Result<&'a T> {
    records
        .iter()
        .find(|r| r.id() == *id)
        .ok_or_else(|| HotelError::not_found(T::KIND, *id))
}

/// Position of a record by stable id.
pub fn position<T: Record>(records: &[T], id: &Uuid) -> Result<usize> {
    records
        .iter()
        .position(|r| r.id() == *id)
        .ok_or_else(|| HotelError::not_found(T::KIND, *id))
}
