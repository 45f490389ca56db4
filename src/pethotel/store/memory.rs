use super::hotel_store::HotelStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = HotelStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        HotelStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Booking, BookingTier, Customer, Pet};
    use crate::store::DataStore;
    use chrono::NaiveDate;
    use uuid::Uuid;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn sample_customer(number: u32) -> Customer {
            Customer {
                id: Uuid::new_v4(),
                number,
                first_name: format!("Test{}", letters(number)),
                surname: "Owner".to_string(),
                address: format!("{} Kennel Lane", number),
                postcode: "AB12 3CD".to_string(),
                email: format!("owner{}@example.com", number),
                phone: "07123456789".to_string(),
            }
        }

        pub fn sample_pet(number: u32) -> Pet {
            Pet {
                id: Uuid::new_v4(),
                number,
                name: format!("Rex{}", letters(number)),
                age: 3,
                species: "Dog".to_string(),
                description: "Friendly".to_string(),
                diet: "Kibble".to_string(),
                additional_info: String::new(),
            }
        }

        pub fn sample_booking(room: &str) -> Booking {
            Booking {
                id: Uuid::new_v4(),
                number: 1,
                pet_id: Uuid::new_v4(),
                customer_id: Uuid::new_v4(),
                start: NaiveDate::from_ymd_opt(2099, 1, 10).unwrap(),
                end: NaiveDate::from_ymd_opt(2099, 1, 20).unwrap(),
                drop_off: "09:00".to_string(),
                collect: "17:00".to_string(),
                room: room.to_string(),
            }
        }

        pub fn with_customers(mut self, count: u32) -> Self {
            let mut customers = self.store.customers().to_vec();
            for _ in 0..count {
                let number = customers.len() as u32 + 1;
                customers.push(Self::sample_customer(number));
            }
            self.store.save_customers(customers).unwrap();
            self
        }

        pub fn with_pets(mut self, count: u32) -> Self {
            let mut pets = self.store.pets().to_vec();
            for _ in 0..count {
                let number = pets.len() as u32 + 1;
                pets.push(Self::sample_pet(number));
            }
            self.store.save_pets(pets).unwrap();
            self
        }

        /// Adds a booking in `room`, pointing at the first customer and pet when present.
        pub fn with_booking(mut self, room: &str, tier: BookingTier) -> Self {
            let mut booking = Self::sample_booking(room);
            if let Some(customer) = self.store.customers().first() {
                booking.customer_id = customer.id;
            }
            if let Some(pet) = self.store.pets().first() {
                booking.pet_id = pet.id;
            }
            let mut bookings = self.store.bookings(tier).to_vec();
            booking.number = bookings.len() as u32 + 1;
            bookings.push(booking);
            self.store.save_bookings(tier, bookings).unwrap();
            self
        }

        pub fn with_booking_dates(
            mut self,
            room: &str,
            start: NaiveDate,
            end: NaiveDate,
        ) -> Self {
            let mut booking = Self::sample_booking(room);
            booking.start = start;
            booking.end = end;
            if let Some(pet) = self.store.pets().first() {
                booking.pet_id = pet.id;
            }
            let mut bookings = self.store.bookings(BookingTier::Active).to_vec();
            booking.number = bookings.len() as u32 + 1;
            bookings.push(booking);
            self.store
                .save_bookings(BookingTier::Active, bookings)
                .unwrap();
            self
        }
    }

    /// Names must stay letters-only to pass validation, so numbers become suffix letters.
    fn letters(n: u32) -> String {
        let mut n = n;
        let mut out = Vec::new();
        loop {
            out.push((b'a' + (n % 26) as u8) as char);
            n /= 26;
            if n == 0 {
                break;
            }
        }
        out.iter().rev().collect()
    }
}
