use crate::commands::archive::move_booking;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookingTier;
use crate::store::DataStore;
use uuid::Uuid;

/// Returns an archived booking to the end of the active list. Its room is not
/// re-checked, so it may share a room with a booking made in the meantime.
pub fn run<S: DataStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    let booking = move_booking(store, id, BookingTier::Archived, BookingTier::Active)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Booking was unarchived successfully."));
    result.affected_bookings.push(booking);
    Ok(result)
}
