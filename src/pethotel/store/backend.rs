use crate::error::Result;
use crate::model::BookingTier;
use std::path::PathBuf;

/// One persisted record list. Each collection maps to exactly one backing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Customers,
    Pets,
    Bookings,
    ArchivedBookings,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Customers,
        Collection::Pets,
        Collection::Bookings,
        Collection::ArchivedBookings,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Collection::Customers => "customers.json",
            Collection::Pets => "pets.json",
            Collection::Bookings => "bookings.json",
            Collection::ArchivedBookings => "archived_bookings.json",
        }
    }

    pub fn for_tier(tier: BookingTier) -> Self {
        match tier {
            BookingTier::Active => Collection::Bookings,
            BookingTier::Archived => Collection::ArchivedBookings,
        }
    }
}

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `HotelStore` handles the "what" (decoding, in-memory lists, write-through).
pub trait StorageBackend {
    /// Read the serialized list for a collection.
    /// Returns Ok(None) if nothing has been stored yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, collection: Collection) -> Result<Option<String>>;

    /// Replace the serialized list for a collection.
    /// MUST replace the whole content; partial appends are not allowed.
    fn write(&self, collection: Collection, content: &str) -> Result<()>;

    /// Where the collection lives. For MemBackend, a virtual path.
    fn location(&self, collection: Collection) -> PathBuf;
}
