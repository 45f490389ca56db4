use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Date text format used at every boundary (entry, display, persisted files).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Rooms offered when no configuration overrides them.
pub const DEFAULT_ROOMS: [&str; 10] = ["R1", "R2", "R3", "R4", "R5", "R6", "R7", "R8", "R9", "R10"];

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

/// Converts a calendar picker date (`MM/DD/YY`) to the `DD/MM/YYYY` form used
/// everywhere else. Two-digit years take chrono's century.
pub fn picker_date_to_display(picked: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(picked.trim(), "%m/%d/%y")
        .map(format_date)
        .map_err(|_| "Please enter a valid date in DD/MM/YYYY format.".to_string())
}

/// Serde adapter that keeps dates as `DD/MM/YYYY` strings on disk.
mod dmy {
    use super::DATE_FORMAT;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&text, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Shared identity of every stored record.
///
/// `id` is the stable key used for references and lookups. `number` is the
/// user-facing id assigned as `count + 1` at creation time; it is not unique
/// once records have been deleted.
pub trait Record {
    const KIND: &'static str;

    fn id(&self) -> Uuid;
    fn number(&self) -> u32;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub number: u32,
    pub first_name: String,
    pub surname: String,
    pub address: String,
    pub postcode: String,
    pub email: String,
    pub phone: String,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
    }
}

impl Record for Customer {
    const KIND: &'static str = "Customer";

    fn id(&self) -> Uuid {
        self.id
    }

    fn number(&self) -> u32 {
        self.number
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: Uuid,
    pub number: u32,
    pub name: String,
    pub age: u8,
    pub species: String,
    pub description: String,
    pub diet: String,
    #[serde(default)]
    pub additional_info: String,
}

impl Record for Pet {
    const KIND: &'static str = "Pet";

    fn id(&self) -> Uuid {
        self.id
    }

    fn number(&self) -> u32 {
        self.number
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub number: u32,
    pub pet_id: Uuid,
    pub customer_id: Uuid,
    #[serde(with = "dmy")]
    pub start: NaiveDate,
    #[serde(with = "dmy")]
    pub end: NaiveDate,
    pub drop_off: String,
    pub collect: String,
    pub room: String,
}

impl Record for Booking {
    const KIND: &'static str = "Booking";

    fn id(&self) -> Uuid {
        self.id
    }

    fn number(&self) -> u32 {
        self.number
    }
}

/// Which of the two booking stores a booking lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingTier {
    Active,
    Archived,
}

impl std::fmt::Display for BookingTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingTier::Active => write!(f, "active"),
            BookingTier::Archived => write!(f, "archived"),
        }
    }
}

/// A form selector: either still on its placeholder or holding a choice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    Unselected,
    Chosen(T),
}

impl<T> Selection<T> {
    pub fn chosen(&self) -> Option<&T> {
        match self {
            Selection::Unselected => None,
            Selection::Chosen(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Selection::Chosen(v),
            None => Selection::Unselected,
        }
    }
}

/// Raw customer entry, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerForm {
    pub first_name: String,
    pub surname: String,
    pub address: String,
    pub postcode: String,
    pub email: String,
    pub phone: String,
}

impl From<&Customer> for CustomerForm {
    fn from(c: &Customer) -> Self {
        Self {
            first_name: c.first_name.clone(),
            surname: c.surname.clone(),
            address: c.address.clone(),
            postcode: c.postcode.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
        }
    }
}

/// Raw pet entry. `age` stays text until validation has accepted it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetForm {
    pub name: String,
    pub age: String,
    pub species: String,
    pub description: String,
    pub diet: String,
    pub additional_info: String,
}

impl From<&Pet> for PetForm {
    fn from(p: &Pet) -> Self {
        Self {
            name: p.name.clone(),
            age: p.age.to_string(),
            species: p.species.clone(),
            description: p.description.clone(),
            diet: p.diet.clone(),
            additional_info: p.additional_info.clone(),
        }
    }
}

/// Raw booking entry with stable references already resolved by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub customer: Selection<Uuid>,
    pub pet: Selection<Uuid>,
    pub room: Selection<String>,
    pub start: String,
    pub end: String,
    pub drop_off: String,
    pub collect: String,
}

impl From<&Booking> for BookingForm {
    fn from(b: &Booking) -> Self {
        Self {
            customer: Selection::Chosen(b.customer_id),
            pet: Selection::Chosen(b.pet_id),
            room: Selection::Chosen(b.room.clone()),
            start: format_date(b.start),
            end: format_date(b.end),
            drop_off: b.drop_off.clone(),
            collect: b.collect.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_dates_serialize_as_day_month_year() {
        let booking = Booking {
            id: Uuid::new_v4(),
            number: 1,
            pet_id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            start: NaiveDate::from_ymd_opt(2099, 3, 4).unwrap(),
            end: NaiveDate::from_ymd_opt(2099, 3, 14).unwrap(),
            drop_off: "09:00".into(),
            collect: "17:30".into(),
            room: "R2".into(),
        };

        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["start"], "04/03/2099");
        assert_eq!(json["end"], "14/03/2099");

        let back: Booking = serde_json::from_value(json).unwrap();
        assert_eq!(back, booking);
    }

    #[test]
    fn rejects_iso_dates_on_load() {
        let json = serde_json::json!({
            "id": Uuid::new_v4(),
            "number": 1,
            "pet_id": Uuid::new_v4(),
            "customer_id": Uuid::new_v4(),
            "start": "2099-03-04",
            "end": "14/03/2099",
            "drop_off": "09:00",
            "collect": "17:30",
            "room": "R2",
        });
        assert!(serde_json::from_value::<Booking>(json).is_err());
    }

    #[test]
    fn parse_date_accepts_padded_and_trims() {
        assert_eq!(
            parse_date(" 01/02/2030 "),
            NaiveDate::from_ymd_opt(2030, 2, 1)
        );
        assert_eq!(parse_date("2030-02-01"), None);
        assert_eq!(parse_date("31/02/2030"), None);
    }

    #[test]
    fn picker_dates_are_reordered() {
        assert_eq!(picker_date_to_display("7/4/31").unwrap(), "04/07/2031");
        assert_eq!(picker_date_to_display("12/25/30").unwrap(), "25/12/2030");
        assert_eq!(
            picker_date_to_display("25/12/30").unwrap_err(),
            "Please enter a valid date in DD/MM/YYYY format."
        );
    }

    #[test]
    fn selection_from_option() {
        assert_eq!(Selection::<u8>::from(None), Selection::Unselected);
        assert_eq!(Selection::from(Some(3)).chosen(), Some(&3));
    }
}
