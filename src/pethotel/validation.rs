//! Field-by-field checks for customer, pet and booking entries.
//!
//! Every field of a form is evaluated. Within one field the rules run in order
//! (presence, then length, then format) and stop at the first failure, so a
//! [`ValidationReport`] holds at most one [`FieldError`] per field. Each error
//! carries the full sentence shown in the summary and a short hint meant to sit
//! next to the field.
//!
//! Text is trimmed before any rule runs. Lengths are counted in characters.

use crate::error::{HotelError, Result};
use crate::model::{parse_date, BookingForm, CustomerForm, PetForm};
use chrono::{NaiveDate, NaiveTime};
use std::fmt;

const NAME_MAX: usize = 30;
const ADDRESS_MIN: usize = 5;
const ADDRESS_MAX: usize = 99;
const POSTCODE_LEN: usize = 8;
const PHONE_LEN: usize = 11;
const AGE_MAX: u8 = 200;
const DESCRIPTION_MAX: usize = 200;
const ADDITIONAL_INFO_MAX: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    Surname,
    Address,
    Postcode,
    Email,
    Phone,
    Name,
    Age,
    Species,
    Description,
    Diet,
    AdditionalInfo,
    Room,
    Customer,
    Pet,
    StartDate,
    EndDate,
    DropOff,
    Collect,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::Surname => "Surname",
            Field::Address => "Address",
            Field::Postcode => "Postcode",
            Field::Email => "Email",
            Field::Phone => "Phone number",
            Field::Name => "Name",
            Field::Age => "Age",
            Field::Species => "Species",
            Field::Description => "Description",
            Field::Diet => "Diet",
            Field::AdditionalInfo => "Additional Information",
            Field::Room => "Room",
            Field::Customer => "Customer",
            Field::Pet => "Pet",
            Field::StartDate => "Start Date",
            Field::EndDate => "End Date",
            Field::DropOff => "Drop off time",
            Field::Collect => "Collection time",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
    pub hint: &'static str,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>, hint: &'static str) -> Self {
        Self {
            field,
            message: message.into(),
            hint,
        }
    }

    fn required(field: Field) -> Self {
        Self::new(field, format!("{} required.", field.label()), "Required.")
    }
}

/// Outcome of validating one form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Converts a failed report into [`HotelError::Validation`].
    pub fn into_result(self) -> Result<()> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(HotelError::Validation(self))
        }
    }

    fn check(&mut self, outcome: std::result::Result<(), FieldError>) {
        if let Err(e) = outcome {
            self.errors.push(e);
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

type Check = std::result::Result<(), FieldError>;

fn name_like(field: Field, value: &str) -> Check {
    let value = value.trim();
    let label = field.label();
    if value.is_empty() {
        return Err(FieldError::required(field));
    }
    if value.chars().count() > NAME_MAX {
        return Err(FieldError::new(
            field,
            format!("{} too long (over 30 characters).", label),
            "Over 30 characters.",
        ));
    }
    if !value.chars().all(char::is_alphabetic) {
        return Err(FieldError::new(
            field,
            format!("{} must contain only letters.", label),
            "Only letters.",
        ));
    }
    Ok(())
}

fn address(value: &str) -> Check {
    let len = value.trim().chars().count();
    if len == 0 {
        return Err(FieldError::required(Field::Address));
    }
    if len > ADDRESS_MAX {
        return Err(FieldError::new(
            Field::Address,
            "Address should not exceed 100 characters.",
            "Over 100 characters.",
        ));
    }
    if len < ADDRESS_MIN {
        return Err(FieldError::new(
            Field::Address,
            "Address must exceed 5 characters.",
            "Under 5 characters.",
        ));
    }
    Ok(())
}

/// `LL00 0LL`: the fifth character may be anything, usually a space.
pub fn is_postcode(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    chars.len() == POSTCODE_LEN
        && chars[0].is_alphabetic()
        && chars[1].is_alphabetic()
        && chars[2].is_numeric()
        && chars[3].is_numeric()
        && chars[5].is_numeric()
        && chars[6].is_alphabetic()
        && chars[7].is_alphabetic()
}

fn postcode(value: &str) -> Check {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::required(Field::Postcode));
    }
    if !is_postcode(value) {
        return Err(FieldError::new(
            Field::Postcode,
            "Postcode does not match format LL00 0LL.",
            "Does not match format LL00 0LL.",
        ));
    }
    Ok(())
}

fn email(value: &str) -> Check {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::required(Field::Email));
    }
    match value.split_once('@') {
        None => Err(FieldError::new(
            Field::Email,
            "Email must contain an @.",
            "Must contain an @.",
        )),
        Some((_, domain)) if !domain.contains('.') => Err(FieldError::new(
            Field::Email,
            "Email must contain a domain.",
            "Must contain a domain.",
        )),
        Some(_) => Ok(()),
    }
}

fn phone(value: &str) -> Check {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::required(Field::Phone));
    }
    if value.chars().count() != PHONE_LEN {
        return Err(FieldError::new(
            Field::Phone,
            "Phone number must be 11 digits.",
            "Must be 11 digits.",
        ));
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(FieldError::new(
            Field::Phone,
            "Phone number must be only digits.",
            "Only digits.",
        ));
    }
    Ok(())
}

/// Parses an age that has already passed validation.
pub fn parse_age(value: &str) -> Option<u8> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|age| (0..=AGE_MAX as i64).contains(age))
        .map(|age| age as u8)
}

fn age(value: &str) -> Check {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::required(Field::Age));
    }
    let Ok(age) = value.parse::<i64>() else {
        return Err(FieldError::new(
            Field::Age,
            "Age must be a number.",
            "Only numbers.",
        ));
    };
    if !(0..=AGE_MAX as i64).contains(&age) {
        return Err(FieldError::new(
            Field::Age,
            "Age must be between 0 and 200.",
            "Must be 0-200.",
        ));
    }
    Ok(())
}

fn description(value: &str) -> Check {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::required(Field::Description));
    }
    if value.chars().count() > DESCRIPTION_MAX {
        return Err(FieldError::new(
            Field::Description,
            "Description too long (over 200 characters).",
            "Over 200 characters.",
        ));
    }
    Ok(())
}

fn additional_info(value: &str) -> Check {
    if value.trim().chars().count() > ADDITIONAL_INFO_MAX {
        return Err(FieldError::new(
            Field::AdditionalInfo,
            "Additional Information too long (over 500 characters).",
            "Over 500 characters.",
        ));
    }
    Ok(())
}

fn selected<T>(field: Field, chosen: Option<&T>) -> Check {
    match chosen {
        Some(_) => Ok(()),
        None => Err(FieldError::new(
            field,
            format!("{} selection required.", field.label()),
            "Required.",
        )),
    }
}

fn start_date(value: &str, today: NaiveDate) -> std::result::Result<NaiveDate, FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::new(
            Field::StartDate,
            "A Start Date is required.",
            "Required.",
        ));
    }
    let Some(start) = parse_date(value) else {
        return Err(FieldError::new(
            Field::StartDate,
            "Invalid Start Date format.",
            "Invalid format.",
        ));
    };
    if start < today {
        return Err(FieldError::new(
            Field::StartDate,
            "Start Date cannot be in the past.",
            "Cannot be in the past.",
        ));
    }
    Ok(start)
}

/// The ordering rule needs a start date; when the start itself did not parse
/// only the past-date rule applies to the end.
fn end_date(value: &str, start: Option<NaiveDate>, today: NaiveDate) -> Check {
    if value.trim().is_empty() {
        return Err(FieldError::new(
            Field::EndDate,
            "An End Date is required.",
            "Required.",
        ));
    }
    let Some(end) = parse_date(value) else {
        return Err(FieldError::new(
            Field::EndDate,
            "Invalid End Date format.",
            "Invalid format.",
        ));
    };
    if start.is_some_and(|start| end <= start) {
        return Err(FieldError::new(
            Field::EndDate,
            "End Date must be after Start Date.",
            "Must be after Start Date.",
        ));
    }
    if end < today {
        return Err(FieldError::new(
            Field::EndDate,
            "End Date cannot be in the past.",
            "Cannot be in the past.",
        ));
    }
    Ok(())
}

fn time(field: Field, value: &str) -> Check {
    let value = value.trim();
    if value.trim_matches(':').is_empty() {
        return Err(FieldError::required(field));
    }
    if NaiveTime::parse_from_str(value, "%H:%M").is_err() {
        return Err(FieldError::new(
            field,
            format!("{} must be HH:MM.", field.label()),
            "Invalid format.",
        ));
    }
    Ok(())
}

pub fn validate_customer(form: &CustomerForm) -> ValidationReport {
    let mut report = ValidationReport::default();
    report.check(name_like(Field::FirstName, &form.first_name));
    report.check(name_like(Field::Surname, &form.surname));
    report.check(address(&form.address));
    report.check(postcode(&form.postcode));
    report.check(email(&form.email));
    report.check(phone(&form.phone));
    report
}

pub fn validate_pet(form: &PetForm) -> ValidationReport {
    let mut report = ValidationReport::default();
    report.check(name_like(Field::Name, &form.name));
    report.check(age(&form.age));
    report.check(name_like(Field::Species, &form.species));
    report.check(description(&form.description));
    report.check(name_like(Field::Diet, &form.diet));
    report.check(additional_info(&form.additional_info));
    report
}

/// Checks a booking entry against `today`. Room availability is not a field
/// rule; callers check it against the current active bookings.
pub fn validate_booking(form: &BookingForm, today: NaiveDate) -> ValidationReport {
    let mut report = ValidationReport::default();
    report.check(selected(Field::Room, form.room.chosen()));
    report.check(selected(Field::Customer, form.customer.chosen()));
    report.check(selected(Field::Pet, form.pet.chosen()));

    let start = match start_date(&form.start, today) {
        Ok(start) => Some(start),
        Err(e) => {
            let parsed = parse_date(&form.start);
            report.errors.push(e);
            parsed
        }
    };
    report.check(end_date(&form.end, start, today));
    report.check(time(Field::DropOff, &form.drop_off));
    report.check(time(Field::Collect, &form.collect));
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Selection;
    use uuid::Uuid;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, 15).unwrap()
    }

    fn customer() -> CustomerForm {
        CustomerForm {
            first_name: "Ada".into(),
            surname: "Lovelace".into(),
            address: "12 Analytical Row".into(),
            postcode: "AB12 3CD".into(),
            email: "ada@example.com".into(),
            phone: "07123456789".into(),
        }
    }

    fn pet() -> PetForm {
        PetForm {
            name: "Biscuit".into(),
            age: "4".into(),
            species: "Cat".into(),
            description: "Ginger tabby".into(),
            diet: "Fish".into(),
            additional_info: String::new(),
        }
    }

    fn booking() -> BookingForm {
        BookingForm {
            customer: Selection::Chosen(Uuid::new_v4()),
            pet: Selection::Chosen(Uuid::new_v4()),
            room: Selection::Chosen("R1".into()),
            start: "01/07/2030".into(),
            end: "05/07/2030".into(),
            drop_off: "09:00".into(),
            collect: "17:30".into(),
        }
    }

    fn message(report: &ValidationReport, field: Field) -> &str {
        report.get(field).map(|e| e.message.as_str()).unwrap_or("")
    }

    #[test]
    fn valid_forms_pass() {
        assert!(validate_customer(&customer()).is_ok());
        assert!(validate_pet(&pet()).is_ok());
        assert!(validate_booking(&booking(), today()).is_ok());
    }

    #[test]
    fn postcode_format() {
        assert!(is_postcode("AB12 3CD"));
        assert!(is_postcode("AB12-3CD"));
        assert!(!is_postcode("123 456"));
        assert!(!is_postcode("AB12 3C"));

        let mut form = customer();
        form.postcode = "123 456".into();
        let report = validate_customer(&form);
        assert_eq!(
            message(&report, Field::Postcode),
            "Postcode does not match format LL00 0LL."
        );
    }

    #[test]
    fn reports_every_failing_field_once() {
        let form = CustomerForm {
            first_name: "".into(),
            surname: "O'Brien".into(),
            address: "abc".into(),
            postcode: "AB12 3CD".into(),
            email: "someone".into(),
            phone: "0712345678x".into(),
        };
        let report = validate_customer(&form);
        assert_eq!(report.errors().len(), 5);
        assert_eq!(message(&report, Field::FirstName), "First name required.");
        assert_eq!(
            message(&report, Field::Surname),
            "Surname must contain only letters."
        );
        assert_eq!(
            message(&report, Field::Address),
            "Address must exceed 5 characters."
        );
        assert_eq!(message(&report, Field::Email), "Email must contain an @.");
        assert_eq!(
            message(&report, Field::Phone),
            "Phone number must be only digits."
        );
        assert!(report.get(Field::Postcode).is_none());
    }

    #[test]
    fn length_is_checked_before_format() {
        let mut form = customer();
        form.first_name = "A1".repeat(16);
        let report = validate_customer(&form);
        assert_eq!(
            message(&report, Field::FirstName),
            "First name too long (over 30 characters)."
        );
        assert_eq!(report.get(Field::FirstName).unwrap().hint, "Over 30 characters.");
    }

    #[test]
    fn address_bounds() {
        let mut form = customer();
        form.address = "x".repeat(99);
        assert!(validate_customer(&form).is_ok());
        form.address = "x".repeat(100);
        assert_eq!(
            message(&validate_customer(&form), Field::Address),
            "Address should not exceed 100 characters."
        );
        form.address = "12345".into();
        assert!(validate_customer(&form).is_ok());
    }

    #[test]
    fn email_needs_dot_after_at() {
        let mut form = customer();
        form.email = "a.b@localhost".into();
        assert_eq!(
            message(&validate_customer(&form), Field::Email),
            "Email must contain a domain."
        );
    }

    #[test]
    fn phone_length_before_digits() {
        let mut form = customer();
        form.phone = "0712".into();
        assert_eq!(
            message(&validate_customer(&form), Field::Phone),
            "Phone number must be 11 digits."
        );
    }

    #[test]
    fn pet_age_rules() {
        let mut form = pet();
        form.age = "old".into();
        assert_eq!(message(&validate_pet(&form), Field::Age), "Age must be a number.");
        form.age = "201".into();
        assert_eq!(
            message(&validate_pet(&form), Field::Age),
            "Age must be between 0 and 200."
        );
        form.age = "-1".into();
        assert!(!validate_pet(&form).is_ok());
        form.age = " 0 ".into();
        assert!(validate_pet(&form).is_ok());
        assert_eq!(parse_age(" 200"), Some(200));
        assert_eq!(parse_age("201"), None);
    }

    #[test]
    fn additional_info_is_optional_but_bounded() {
        let mut form = pet();
        form.additional_info = "x".repeat(501);
        assert_eq!(
            message(&validate_pet(&form), Field::AdditionalInfo),
            "Additional Information too long (over 500 characters)."
        );
    }

    #[test]
    fn unselected_choices_are_reported() {
        let form = BookingForm {
            start: "01/07/2030".into(),
            end: "05/07/2030".into(),
            drop_off: "09:00".into(),
            collect: "17:30".into(),
            ..Default::default()
        };
        let report = validate_booking(&form, today());
        assert_eq!(message(&report, Field::Room), "Room selection required.");
        assert_eq!(message(&report, Field::Customer), "Customer selection required.");
        assert_eq!(message(&report, Field::Pet), "Pet selection required.");
    }

    #[test]
    fn start_in_the_past() {
        let mut form = booking();
        form.start = "01/01/2020".into();
        let report = validate_booking(&form, today());
        assert_eq!(
            message(&report, Field::StartDate),
            "Start Date cannot be in the past."
        );
    }

    #[test]
    fn end_before_start() {
        let mut form = booking();
        form.start = "01/01/2099".into();
        form.end = "01/01/2098".into();
        let report = validate_booking(&form, today());
        assert!(report.get(Field::StartDate).is_none());
        assert_eq!(
            message(&report, Field::EndDate),
            "End Date must be after Start Date."
        );
    }

    #[test]
    fn end_equal_to_start_is_rejected() {
        let mut form = booking();
        form.end = form.start.clone();
        assert_eq!(
            message(&validate_booking(&form, today()), Field::EndDate),
            "End Date must be after Start Date."
        );
    }

    #[test]
    fn bad_date_formats() {
        let mut form = booking();
        form.start = "2030-07-01".into();
        form.end = "".into();
        let report = validate_booking(&form, today());
        assert_eq!(message(&report, Field::StartDate), "Invalid Start Date format.");
        assert_eq!(message(&report, Field::EndDate), "An End Date is required.");
    }

    #[test]
    fn past_start_still_orders_end() {
        let mut form = booking();
        form.start = "10/06/2030".into();
        form.end = "09/06/2030".into();
        let report = validate_booking(&form, today());
        assert_eq!(
            message(&report, Field::EndDate),
            "End Date must be after Start Date."
        );
    }

    #[test]
    fn times_are_required() {
        let mut form = booking();
        form.drop_off = ":".into();
        form.collect = "25:00".into();
        let report = validate_booking(&form, today());
        assert_eq!(message(&report, Field::DropOff), "Drop off time required.");
        assert_eq!(
            message(&report, Field::Collect),
            "Collection time must be HH:MM."
        );
    }

    #[test]
    fn report_display_and_error() {
        let mut form = customer();
        form.email = String::new();
        form.phone = String::new();
        let report = validate_customer(&form);
        assert_eq!(
            report.to_string(),
            "Email required.\nPhone number required."
        );
        let err = report.into_result().unwrap_err();
        assert!(matches!(err, HotelError::Validation(_)));
    }
}
