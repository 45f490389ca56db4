use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Booking, BookingTier};
use crate::store::{position, DataStore};
use uuid::Uuid;

/// Moves a booking between tiers with every field intact, appending it to the
/// end of the destination list.
///
/// The destination is written before the source, so an interrupted move can
/// leave the booking in both lists but never in neither.
pub(crate) fn move_booking<S: DataStore>(
    store: &mut S,
    id: &Uuid,
    from: BookingTier,
    to: BookingTier,
) -> Result<Booking> {
    let mut source = store.bookings(from).to_vec();
    let index = position(&source, id)?;
    let booking = source.remove(index);

    let mut destination = store.bookings(to).to_vec();
    destination.push(booking.clone());
    store.save_bookings(to, destination)?;
    store.save_bookings(from, source)?;
    tracing::info!(number = booking.number, %from, %to, "booking moved");
    Ok(booking)
}

pub fn run<S: DataStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    let booking = move_booking(store, id, BookingTier::Active, BookingTier::Archived)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Booking was moved successfully."));
    result.affected_bookings.push(booking);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::unarchive;
    use crate::error::HotelError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn archive_then_unarchive_restores_booking() {
        let mut store = StoreFixture::new()
            .with_customers(1)
            .with_pets(1)
            .with_booking("R1", BookingTier::Active)
            .store;
        let original = store.bookings(BookingTier::Active)[0].clone();

        run(&mut store, &original.id).unwrap();
        assert!(store.bookings(BookingTier::Active).is_empty());
        assert_eq!(store.bookings(BookingTier::Archived), &[original.clone()]);

        unarchive::run(&mut store, &original.id).unwrap();
        assert!(store.bookings(BookingTier::Archived).is_empty());
        assert_eq!(store.bookings(BookingTier::Active), &[original]);
    }

    #[test]
    fn archived_booking_goes_to_the_end() {
        let mut store = StoreFixture::new()
            .with_booking("R1", BookingTier::Active)
            .with_booking("R2", BookingTier::Archived)
            .store;
        let id = store.bookings(BookingTier::Active)[0].id;

        run(&mut store, &id).unwrap();
        let rooms: Vec<&str> = store
            .bookings(BookingTier::Archived)
            .iter()
            .map(|b| b.room.as_str())
            .collect();
        assert_eq!(rooms, vec!["R2", "R1"]);
    }

    #[test]
    fn archived_booking_frees_its_room() {
        let mut store = StoreFixture::new()
            .with_booking("R1", BookingTier::Active)
            .store;
        let id = store.bookings(BookingTier::Active)[0].id;
        let rooms = vec!["R1".to_string()];
        assert!(crate::commands::rooms::available_rooms(&store, &rooms).is_empty());

        run(&mut store, &id).unwrap();
        assert_eq!(
            crate::commands::rooms::available_rooms(&store, &rooms),
            rooms
        );
    }

    #[test]
    fn unknown_booking_is_not_found() {
        let mut store = StoreFixture::new().store;
        assert!(matches!(
            run(&mut store, &Uuid::new_v4()),
            Err(HotelError::NotFound { .. })
        ));
    }
}
