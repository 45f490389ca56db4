use chrono::NaiveDate;
use pethotel::api::{BookingInput, CustomerInput, HotelApi, PetInput};
use pethotel::commands::HotelPaths;
use pethotel::config::HotelConfig;
use pethotel::model::BookingTier;
use pethotel::query::{BookingQuery, CustomerQuery};
use pethotel::store::fs::FileStore;
use pethotel::store::DataStore;
use std::path::Path;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()
}

fn open(dir: &Path) -> HotelApi<FileStore> {
    let config = HotelConfig::load(dir).unwrap();
    let store = FileStore::open_dir(dir.to_path_buf()).unwrap();
    HotelApi::new(store, HotelPaths::new(dir.to_path_buf()), config).with_today(today())
}

fn ann() -> CustomerInput {
    CustomerInput {
        first_name: Some("Ann".into()),
        surname: Some("Smith".into()),
        address: Some("1 High Street".into()),
        postcode: Some("AB12 3CD".into()),
        email: Some("ann@example.com".into()),
        phone: Some("07123456789".into()),
    }
}

fn rex() -> PetInput {
    PetInput {
        name: Some("Rex".into()),
        age: Some("4".into()),
        species: Some("Dog".into()),
        description: Some("Brown and friendly".into()),
        diet: Some("Kibble".into()),
        additional_info: None,
    }
}

fn stay(room: &str) -> BookingInput {
    BookingInput {
        customer: Some(1),
        pet: Some(1),
        room: Some(room.into()),
        start: Some("10/02/2030".into()),
        end: Some("14/02/2030".into()),
        drop_off: Some("09:00".into()),
        collect: Some("17:30".into()),
    }
}

#[test]
fn records_survive_reopening() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut api = open(dir.path());
        api.add_customer(ann()).unwrap();
        api.add_pet(rex()).unwrap();
        api.add_booking(stay("R3")).unwrap();
    }

    for file in ["customers.json", "pets.json", "bookings.json"] {
        assert!(dir.path().join(file).exists(), "{} missing", file);
    }

    let api = open(dir.path());
    let listed = api.list_customers(&CustomerQuery::default(), 1).unwrap();
    assert_eq!(listed.listed_customers.len(), 1);
    assert_eq!(listed.listed_customers[0].record.full_name(), "Ann Smith");

    let booking = api.booking(BookingTier::Active, 1).unwrap();
    assert_eq!(booking.room, "R3");
    assert_eq!(booking.start, NaiveDate::from_ymd_opt(2030, 2, 10).unwrap());
}

#[test]
fn archive_moves_between_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut api = open(dir.path());
    api.add_customer(ann()).unwrap();
    api.add_pet(rex()).unwrap();
    api.add_booking(stay("R1")).unwrap();

    api.archive_booking(1).unwrap();

    let reopened = FileStore::open_dir(dir.path().to_path_buf()).unwrap();
    assert!(reopened.bookings(BookingTier::Active).is_empty());
    assert_eq!(reopened.bookings(BookingTier::Archived).len(), 1);

    let mut api = open(dir.path());
    let rooms = api.available_rooms().unwrap();
    assert!(rooms.rooms.contains(&"R1".to_string()));

    api.unarchive_booking(1).unwrap();
    let listed = api.list_bookings(&BookingQuery::default(), 1).unwrap();
    assert_eq!(listed.listed_bookings.len(), 1);
    assert!(api.list_archived(1).unwrap().listed_bookings.is_empty());
}

#[test]
fn booked_room_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let mut api = open(dir.path());
    api.add_customer(ann()).unwrap();
    api.add_pet(rex()).unwrap();
    api.add_booking(stay("R2")).unwrap();

    let err = api.add_booking(stay("R2")).unwrap_err();
    assert_eq!(err.to_string(), "Room R2 is not available.");
}

#[test]
fn configured_rooms_drive_availability() {
    let dir = tempfile::tempdir().unwrap();
    HotelConfig {
        rooms: vec!["Kennel".into(), "Cattery".into()],
        ..HotelConfig::default()
    }
    .save(dir.path())
    .unwrap();

    let api = open(dir.path());
    let rooms = api.available_rooms().unwrap();
    assert_eq!(rooms.rooms, vec!["Kennel", "Cattery"]);
}

#[test]
fn corrupt_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("pets.json"), "not json").unwrap();
    assert!(FileStore::open_dir(dir.path().to_path_buf()).is_err());
}
