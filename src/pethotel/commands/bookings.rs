//! Active booking lifecycle: create, modify, delete, view and list.
//!
//! A booking is only accepted for a room that no active booking holds. When
//! modifying, the booking's own room stays available to it.

use crate::commands::helpers::{next_number, positioned, search_page};
use crate::commands::rooms::available_rooms;
use crate::commands::{BookingDetail, CmdMessage, CmdResult, PageInfo};
use crate::error::{HotelError, Result};
use crate::model::{parse_date, Booking, BookingForm, BookingTier};
use crate::paging::Pager;
use crate::query::BookingQuery;
use crate::store::{position, DataStore};
use crate::validation::validate_booking;
use chrono::NaiveDate;
use uuid::Uuid;

/// Validated form contents, ready to become a booking.
struct Entry {
    customer_id: Uuid,
    pet_id: Uuid,
    room: String,
    start: NaiveDate,
    end: NaiveDate,
    drop_off: String,
    collect: String,
}

fn check<S: DataStore>(
    store: &S,
    form: &BookingForm,
    today: NaiveDate,
    selectable_rooms: &[String],
) -> Result<Entry> {
    validate_booking(form, today).into_result()?;

    let (Some(customer_id), Some(pet_id), Some(room), Some(start), Some(end)) = (
        form.customer.chosen(),
        form.pet.chosen(),
        form.room.chosen(),
        parse_date(&form.start),
        parse_date(&form.end),
    ) else {
        return Err(HotelError::Api("Incomplete booking entry".to_string()));
    };

    store.customer(customer_id)?;
    store.pet(pet_id)?;
    if !selectable_rooms.iter().any(|r| r == room) {
        return Err(HotelError::Unavailable(format!(
            "Room {} is not available.",
            room
        )));
    }

    Ok(Entry {
        customer_id: *customer_id,
        pet_id: *pet_id,
        room: room.clone(),
        start,
        end,
        drop_off: form.drop_off.trim().to_string(),
        collect: form.collect.trim().to_string(),
    })
}

/// Fails early when there is nothing to book with.
pub fn ensure_bookable<S: DataStore>(store: &S, rooms: &[String]) -> Result<()> {
    if available_rooms(store, rooms).is_empty() {
        return Err(HotelError::Unavailable(
            "All rooms are currently booked.".to_string(),
        ));
    }
    if store.customers().is_empty() {
        return Err(HotelError::Unavailable(
            "Please add a customer before booking.".to_string(),
        ));
    }
    if store.pets().is_empty() {
        return Err(HotelError::Unavailable(
            "Please add a pet before booking.".to_string(),
        ));
    }
    Ok(())
}

pub fn create<S: DataStore>(
    store: &mut S,
    rooms: &[String],
    form: &BookingForm,
    today: NaiveDate,
) -> Result<CmdResult> {
    ensure_bookable(store, rooms)?;
    let selectable = available_rooms(store, rooms);
    let entry = check(store, form, today, &selectable)?;

    let mut bookings = store.bookings(BookingTier::Active).to_vec();
    let booking = Booking {
        id: Uuid::new_v4(),
        number: next_number(&bookings),
        pet_id: entry.pet_id,
        customer_id: entry.customer_id,
        start: entry.start,
        end: entry.end,
        drop_off: entry.drop_off,
        collect: entry.collect,
        room: entry.room,
    };
    bookings.push(booking.clone());
    store.save_bookings(BookingTier::Active, bookings)?;
    tracing::info!(number = booking.number, room = %booking.room, "booking created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Booking created successfully."));
    result.affected_bookings.push(booking);
    Ok(result)
}

pub fn modify<S: DataStore>(
    store: &mut S,
    rooms: &[String],
    id: &Uuid,
    form: &BookingForm,
    today: NaiveDate,
) -> Result<CmdResult> {
    let mut bookings = store.bookings(BookingTier::Active).to_vec();
    let index = position(&bookings, id)?;

    let mut selectable = available_rooms(store, rooms);
    selectable.push(bookings[index].room.clone());
    let entry = check(store, form, today, &selectable)?;

    let booking = &mut bookings[index];
    booking.customer_id = entry.customer_id;
    booking.pet_id = entry.pet_id;
    booking.start = entry.start;
    booking.end = entry.end;
    booking.drop_off = entry.drop_off;
    booking.collect = entry.collect;
    booking.room = entry.room;
    let booking = booking.clone();

    store.save_bookings(BookingTier::Active, bookings)?;
    tracing::info!(number = booking.number, room = %booking.room, "booking modified");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Booking modified successfully."));
    result.affected_bookings.push(booking);
    Ok(result)
}

pub fn delete<S: DataStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    let mut bookings = store.bookings(BookingTier::Active).to_vec();
    let index = position(&bookings, id)?;
    let booking = bookings.remove(index);
    store.save_bookings(BookingTier::Active, bookings)?;
    tracing::info!(number = booking.number, room = %booking.room, "booking deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Booking was deleted successfully."));
    result.affected_bookings.push(booking);
    Ok(result)
}

pub fn view<S: DataStore>(store: &S, tier: BookingTier, id: &Uuid) -> Result<CmdResult> {
    let booking = store.booking(tier, id)?.clone();
    let customer_name = store.customer(&booking.customer_id).ok().map(|c| c.full_name());
    let pet = store.pet(&booking.pet_id).ok();

    let mut result = CmdResult::default();
    result.booking_detail = Some(BookingDetail {
        tier,
        customer_name,
        pet_name: pet.map(|p| p.name.clone()),
        pet_species: pet.map(|p| p.species.clone()),
        booking,
    });
    Ok(result)
}

pub fn list<S: DataStore>(store: &S, query: &BookingQuery, pager: &Pager) -> Result<CmdResult> {
    let (listed, page) = search_page(store.bookings(BookingTier::Active), query, pager);
    let mut result = CmdResult::default().with_page(page);
    result.listed_bookings = listed;
    Ok(result)
}

/// Archived bookings are browsed page by page; there is no search over them.
pub fn list_archived<S: DataStore>(store: &S, pager: &Pager) -> Result<CmdResult> {
    let all = positioned(store.bookings(BookingTier::Archived));
    let window = pager.view(&all);
    let mut result = CmdResult::default().with_page(PageInfo {
        number: window.number(pager.page_size()),
        has_prev: window.has_prev,
        has_next: window.has_next,
        total: all.len(),
    });
    result.listed_bookings = window.items;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Selection;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, 15).unwrap()
    }

    fn rooms() -> Vec<String> {
        ["R1", "R2"].iter().map(|r| r.to_string()).collect()
    }

    fn ready() -> InMemoryStore {
        StoreFixture::new().with_customers(1).with_pets(1).store
    }

    fn form(store: &InMemoryStore, room: &str, start: &str, end: &str) -> BookingForm {
        BookingForm {
            customer: Selection::Chosen(store.customers()[0].id),
            pet: Selection::Chosen(store.pets()[0].id),
            room: Selection::Chosen(room.to_string()),
            start: start.into(),
            end: end.into(),
            drop_off: "08:30".into(),
            collect: "18:00".into(),
        }
    }

    #[test]
    fn creates_active_booking() {
        let mut store = ready();
        let f = form(&store, "R1", "01/07/2030", "04/07/2030");
        let result = create(&mut store, &rooms(), &f, today()).unwrap();

        let booking = &store.bookings(BookingTier::Active)[0];
        assert_eq!(*booking, result.affected_bookings[0]);
        assert_eq!(booking.room, "R1");
        assert_eq!(booking.start, NaiveDate::from_ymd_opt(2030, 7, 1).unwrap());
        assert_eq!(booking.customer_id, store.customers()[0].id);
    }

    #[test]
    fn held_room_rejected_even_without_overlap() {
        let mut store = ready();
        let first = form(&store, "R1", "01/07/2030", "04/07/2030");
        create(&mut store, &rooms(), &first, today()).unwrap();

        let later = form(&store, "R1", "01/12/2031", "04/12/2031");
        let err = create(&mut store, &rooms(), &later, today()).unwrap_err();
        assert!(matches!(err, HotelError::Unavailable(_)));
        assert_eq!(err.to_string(), "Room R1 is not available.");
        assert_eq!(store.bookings(BookingTier::Active).len(), 1);
    }

    #[test]
    fn unknown_room_is_unavailable() {
        let mut store = ready();
        let f = form(&store, "Penthouse", "01/07/2030", "04/07/2030");
        assert!(matches!(
            create(&mut store, &rooms(), &f, today()),
            Err(HotelError::Unavailable(_))
        ));
    }

    #[test]
    fn preconditions() {
        let mut empty = InMemoryStore::new();
        let f = BookingForm::default();
        assert_eq!(
            create(&mut empty, &rooms(), &f, today())
                .unwrap_err()
                .to_string(),
            "Please add a customer before booking."
        );

        let mut no_pets = StoreFixture::new().with_customers(1).store;
        assert_eq!(
            create(&mut no_pets, &rooms(), &f, today())
                .unwrap_err()
                .to_string(),
            "Please add a pet before booking."
        );

        let mut full = StoreFixture::new()
            .with_customers(1)
            .with_pets(1)
            .with_booking("R1", BookingTier::Active)
            .with_booking("R2", BookingTier::Active)
            .store;
        assert_eq!(
            create(&mut full, &rooms(), &f, today())
                .unwrap_err()
                .to_string(),
            "All rooms are currently booked."
        );
    }

    #[test]
    fn validation_errors_come_back_together() {
        let mut store = ready();
        let f = form(&store, "R1", "01/01/2020", "01/01/2019");
        let err = create(&mut store, &rooms(), &f, today()).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("Start Date cannot be in the past."));
        assert!(text.contains("End Date must be after Start Date."));
        assert!(store.bookings(BookingTier::Active).is_empty());
    }

    #[test]
    fn rejects_deleted_customer_reference() {
        let mut store = ready();
        let mut f = form(&store, "R1", "01/07/2030", "04/07/2030");
        f.customer = Selection::Chosen(Uuid::new_v4());
        assert!(matches!(
            create(&mut store, &rooms(), &f, today()),
            Err(HotelError::NotFound { kind: "Customer", .. })
        ));
    }

    #[test]
    fn modify_may_keep_its_own_room() {
        let mut store = ready();
        let f = form(&store, "R1", "01/07/2030", "04/07/2030");
        create(&mut store, &rooms(), &f, today()).unwrap();
        let id = store.bookings(BookingTier::Active)[0].id;

        let changed = form(&store, "R1", "02/07/2030", "09/07/2030");
        modify(&mut store, &rooms(), &id, &changed, today()).unwrap();
        let booking = &store.bookings(BookingTier::Active)[0];
        assert_eq!(booking.id, id);
        assert_eq!(booking.end, NaiveDate::from_ymd_opt(2030, 7, 9).unwrap());

        let moved = form(&store, "R2", "02/07/2030", "09/07/2030");
        modify(&mut store, &rooms(), &id, &moved, today()).unwrap();
        assert_eq!(store.bookings(BookingTier::Active)[0].room, "R2");
    }

    #[test]
    fn modify_cannot_take_another_bookings_room() {
        let mut store = ready();
        let a = form(&store, "R1", "01/07/2030", "04/07/2030");
        let b = form(&store, "R2", "01/07/2030", "04/07/2030");
        create(&mut store, &rooms(), &a, today()).unwrap();
        create(&mut store, &rooms(), &b, today()).unwrap();
        let second = store.bookings(BookingTier::Active)[1].id;

        let clash = form(&store, "R1", "01/07/2030", "04/07/2030");
        assert!(matches!(
            modify(&mut store, &rooms(), &second, &clash, today()),
            Err(HotelError::Unavailable(_))
        ));
    }

    #[test]
    fn view_resolves_names() {
        let mut store = ready();
        let f = form(&store, "R2", "01/07/2030", "04/07/2030");
        create(&mut store, &rooms(), &f, today()).unwrap();
        let id = store.bookings(BookingTier::Active)[0].id;

        let detail = view(&store, BookingTier::Active, &id)
            .unwrap()
            .booking_detail
            .unwrap();
        assert_eq!(detail.customer_name, Some(store.customers()[0].full_name()));
        assert_eq!(detail.pet_name.as_deref(), Some(store.pets()[0].name.as_str()));
        assert_eq!(detail.pet_species.as_deref(), Some("Dog"));
    }

    #[test]
    fn view_survives_missing_references() {
        let fixture = StoreFixture::new().with_booking("R1", BookingTier::Archived);
        let id = fixture.store.bookings(BookingTier::Archived)[0].id;
        let detail = view(&fixture.store, BookingTier::Archived, &id)
            .unwrap()
            .booking_detail
            .unwrap();
        assert_eq!(detail.tier, BookingTier::Archived);
        assert!(detail.customer_name.is_none());
        assert!(detail.pet_name.is_none());
    }

    #[test]
    fn delete_removes_booking() {
        let mut store = ready();
        let f = form(&store, "R1", "01/07/2030", "04/07/2030");
        create(&mut store, &rooms(), &f, today()).unwrap();
        let id = store.bookings(BookingTier::Active)[0].id;

        delete(&mut store, &id).unwrap();
        assert!(store.bookings(BookingTier::Active).is_empty());
        assert!(matches!(
            delete(&mut store, &id),
            Err(HotelError::NotFound { .. })
        ));
    }

    #[test]
    fn list_and_archived_pages() {
        let fixture = StoreFixture::new()
            .with_booking("R1", BookingTier::Active)
            .with_booking("R2", BookingTier::Active)
            .with_booking("R9", BookingTier::Archived);

        let query = BookingQuery {
            room: Some("r2".into()),
            ..Default::default()
        };
        let result = list(&fixture.store, &query, &Pager::default()).unwrap();
        assert_eq!(result.listed_bookings.len(), 1);
        assert_eq!(result.listed_bookings[0].position, 2);

        let archived = list_archived(&fixture.store, &Pager::default()).unwrap();
        assert_eq!(archived.listed_bookings.len(), 1);
        assert_eq!(archived.listed_bookings[0].record.room, "R9");
        assert_eq!(archived.page.unwrap().total, 1);
    }
}
