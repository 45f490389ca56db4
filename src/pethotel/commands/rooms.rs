use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::BookingTier;
use crate::store::DataStore;

/// Rooms not held by any active booking, in configuration order. Dates are
/// not considered: a room held by a booking next year is unavailable today.
pub fn available_rooms<S: DataStore>(store: &S, rooms: &[String]) -> Vec<String> {
    let held: Vec<&str> = store
        .bookings(BookingTier::Active)
        .iter()
        .map(|b| b.room.as_str())
        .collect();
    rooms
        .iter()
        .filter(|room| !held.contains(&room.as_str()))
        .cloned()
        .collect()
}

pub fn run<S: DataStore>(store: &S, rooms: &[String]) -> Result<CmdResult> {
    Ok(CmdResult::default().with_rooms(available_rooms(store, rooms)))
}
