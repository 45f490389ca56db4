//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every pethotel operation, whatever the client.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs**: clients address records by their 1-based list position;
//!   the facade turns positions into stable UUIDs before any command runs
//! - **Supplies context**: configured rooms, page size and today's date
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing, prompting or formatting. Confirming destructive actions is
//! left to the client, which can show the record via [`HotelApi::customer`] and
//! friends first.
//!
//! ## Generic Over DataStore
//!
//! `HotelApi<S: DataStore>` runs against `HotelApi<FileStore>` in production and
//! `HotelApi<InMemoryStore>` in tests.

use crate::auth::AccessLevel;
use crate::commands::{self, helpers::resolve_position, HotelPaths};
use crate::config::HotelConfig;
use crate::error::Result;
use crate::model::{
    Booking, BookingForm, BookingTier, Customer, CustomerForm, Pet, PetForm, Selection,
};
use crate::paging::Pager;
use crate::query::{BookingQuery, CustomerQuery, PetQuery};
use crate::schedule::MonthView;
use crate::store::DataStore;
use chrono::{Local, NaiveDate};

/// Customer fields given by a client. Unset fields are empty when adding and
/// unchanged when editing.
#[derive(Debug, Clone, Default)]
pub struct CustomerInput {
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub address: Option<String>,
    pub postcode: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl CustomerInput {
    fn over(self, mut form: CustomerForm) -> CustomerForm {
        overlay(&mut form.first_name, self.first_name);
        overlay(&mut form.surname, self.surname);
        overlay(&mut form.address, self.address);
        overlay(&mut form.postcode, self.postcode);
        overlay(&mut form.email, self.email);
        overlay(&mut form.phone, self.phone);
        form
    }
}

#[derive(Debug, Clone, Default)]
pub struct PetInput {
    pub name: Option<String>,
    pub age: Option<String>,
    pub species: Option<String>,
    pub description: Option<String>,
    pub diet: Option<String>,
    pub additional_info: Option<String>,
}

impl PetInput {
    fn over(self, mut form: PetForm) -> PetForm {
        overlay(&mut form.name, self.name);
        overlay(&mut form.age, self.age);
        overlay(&mut form.species, self.species);
        overlay(&mut form.description, self.description);
        overlay(&mut form.diet, self.diet);
        overlay(&mut form.additional_info, self.additional_info);
        form
    }
}

/// Booking fields given by a client. Customer and pet are list positions.
#[derive(Debug, Clone, Default)]
pub struct BookingInput {
    pub customer: Option<usize>,
    pub pet: Option<usize>,
    pub room: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub drop_off: Option<String>,
    pub collect: Option<String>,
}

fn overlay(field: &mut String, value: Option<String>) {
    if let Some(v) = value {
        *field = v;
    }
}

/// The main API facade for pethotel operations.
pub struct HotelApi<S: DataStore> {
    store: S,
    paths: HotelPaths,
    config: HotelConfig,
    today: Option<NaiveDate>,
}

impl<S: DataStore> HotelApi<S> {
    pub fn new(store: S, paths: HotelPaths, config: HotelConfig) -> Self {
        Self {
            store,
            paths,
            config,
            today: None,
        }
    }

    /// Pins "today" for date validation instead of the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn paths(&self) -> &HotelPaths {
        &self.paths
    }

    pub fn settings(&self) -> &HotelConfig {
        &self.config
    }

    fn pager(&self, page: usize) -> Pager {
        Pager::at_page(self.config.page_size, page)
    }

    // --- customers ---

    pub fn customer(&self, position: usize) -> Result<&Customer> {
        let id = resolve_position(self.store.customers(), position)?;
        self.store.customer(&id)
    }

    pub fn add_customer(&mut self, input: CustomerInput) -> Result<commands::CmdResult> {
        let form = input.over(CustomerForm::default());
        commands::customers::create(&mut self.store, &form)
    }

    pub fn edit_customer(
        &mut self,
        position: usize,
        input: CustomerInput,
    ) -> Result<commands::CmdResult> {
        let current = self.customer(position)?;
        let id = current.id;
        let form = input.over(CustomerForm::from(current));
        commands::customers::modify(&mut self.store, &id, &form)
    }

    pub fn delete_customer(&mut self, position: usize) -> Result<commands::CmdResult> {
        let id = resolve_position(self.store.customers(), position)?;
        commands::customers::delete(&mut self.store, &id)
    }

    pub fn list_customers(
        &self,
        query: &CustomerQuery,
        page: usize,
    ) -> Result<commands::CmdResult> {
        commands::customers::list(&self.store, query, &self.pager(page))
    }

    // --- pets ---

    pub fn pet(&self, position: usize) -> Result<&Pet> {
        let id = resolve_position(self.store.pets(), position)?;
        self.store.pet(&id)
    }

    pub fn add_pet(&mut self, input: PetInput) -> Result<commands::CmdResult> {
        let form = input.over(PetForm::default());
        commands::pets::create(&mut self.store, &form)
    }

    pub fn edit_pet(&mut self, position: usize, input: PetInput) -> Result<commands::CmdResult> {
        let current = self.pet(position)?;
        let id = current.id;
        let form = input.over(PetForm::from(current));
        commands::pets::modify(&mut self.store, &id, &form)
    }

    pub fn delete_pet(&mut self, position: usize) -> Result<commands::CmdResult> {
        let id = resolve_position(self.store.pets(), position)?;
        commands::pets::delete(&mut self.store, &id)
    }

    pub fn list_pets(&self, query: &PetQuery, page: usize) -> Result<commands::CmdResult> {
        commands::pets::list(&self.store, query, &self.pager(page))
    }

    // --- bookings ---

    pub fn booking(&self, tier: BookingTier, position: usize) -> Result<&Booking> {
        let id = resolve_position(self.store.bookings(tier), position)?;
        self.store.booking(tier, &id)
    }

    /// Resolves positions in `input` and lays it over `form`.
    fn booking_form(&self, input: BookingInput, mut form: BookingForm) -> Result<BookingForm> {
        if let Some(position) = input.customer {
            form.customer = Selection::Chosen(resolve_position(self.store.customers(), position)?);
        }
        if let Some(position) = input.pet {
            form.pet = Selection::Chosen(resolve_position(self.store.pets(), position)?);
        }
        if let Some(room) = input.room {
            form.room = Selection::Chosen(room.trim().to_string());
        }
        overlay(&mut form.start, input.start);
        overlay(&mut form.end, input.end);
        overlay(&mut form.drop_off, input.drop_off);
        overlay(&mut form.collect, input.collect);
        Ok(form)
    }

    pub fn add_booking(&mut self, input: BookingInput) -> Result<commands::CmdResult> {
        commands::bookings::ensure_bookable(&self.store, &self.config.rooms)?;
        let form = self.booking_form(input, BookingForm::default())?;
        let today = self.today();
        commands::bookings::create(&mut self.store, &self.config.rooms, &form, today)
    }

    pub fn edit_booking(
        &mut self,
        position: usize,
        input: BookingInput,
    ) -> Result<commands::CmdResult> {
        let current = self.booking(BookingTier::Active, position)?;
        let id = current.id;
        let form = self.booking_form(input, BookingForm::from(current))?;
        let today = self.today();
        commands::bookings::modify(&mut self.store, &self.config.rooms, &id, &form, today)
    }

    pub fn delete_booking(&mut self, position: usize) -> Result<commands::CmdResult> {
        let id = resolve_position(self.store.bookings(BookingTier::Active), position)?;
        commands::bookings::delete(&mut self.store, &id)
    }

    pub fn view_booking(&self, tier: BookingTier, position: usize) -> Result<commands::CmdResult> {
        let id = resolve_position(self.store.bookings(tier), position)?;
        commands::bookings::view(&self.store, tier, &id)
    }

    pub fn list_bookings(&self, query: &BookingQuery, page: usize) -> Result<commands::CmdResult> {
        commands::bookings::list(&self.store, query, &self.pager(page))
    }

    pub fn list_archived(&self, page: usize) -> Result<commands::CmdResult> {
        commands::bookings::list_archived(&self.store, &self.pager(page))
    }

    pub fn archive_booking(&mut self, position: usize) -> Result<commands::CmdResult> {
        let id = resolve_position(self.store.bookings(BookingTier::Active), position)?;
        commands::archive::run(&mut self.store, &id)
    }

    pub fn unarchive_booking(&mut self, position: usize) -> Result<commands::CmdResult> {
        let id = resolve_position(self.store.bookings(BookingTier::Archived), position)?;
        commands::unarchive::run(&mut self.store, &id)
    }

    pub fn available_rooms(&self) -> Result<commands::CmdResult> {
        commands::rooms::run(&self.store, &self.config.rooms)
    }

    pub fn schedule(&self, month: MonthView) -> Result<commands::CmdResult> {
        commands::schedule::run(&self.store, &self.config.rooms, month)
    }

    // --- settings & access ---

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.paths, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn init(&self, standard: &str, elevated: &str) -> Result<commands::CmdResult> {
        commands::access::init(&self.paths, standard, elevated)
    }

    pub fn login(&self, secret: &str) -> Result<AccessLevel> {
        commands::access::login(&self.paths, secret)
    }

    pub fn passwd(
        &self,
        current: &str,
        standard: &str,
        elevated: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::access::passwd(&self.paths, current, standard, elevated)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{BookingDetail, CmdMessage, CmdResult, Listed, MessageLevel, PageInfo};
