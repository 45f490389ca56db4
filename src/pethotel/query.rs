//! Linear search over record lists.
//!
//! A query is a set of optional field predicates. Absent or blank predicates
//! always pass; text predicates match case-insensitively as substrings; pet age
//! and booking dates match exactly. [`filter`] keeps the relative order of the
//! input and pairs each hit with its 1-based list position; an empty query
//! returns the whole input without evaluating any predicate.

use crate::model::{format_date, Booking, Customer, Pet};

pub trait Query<T> {
    /// True when no predicate is set (blank text counts as unset).
    fn is_empty(&self) -> bool;

    fn matches(&self, record: &T) -> bool;
}

pub fn filter<'a, T, Q: Query<T>>(records: &'a [T], query: &Q) -> Vec<(usize, &'a T)> {
    let positioned = records.iter().enumerate().map(|(i, r)| (i + 1, r));
    if query.is_empty() {
        return positioned.collect();
    }
    positioned.filter(|(_, r)| query.matches(r)).collect()
}

/// A predicate that is present and not blank, trimmed.
fn term(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|t| !t.is_empty())
}

fn contains_folded(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(n) => haystack.to_lowercase().contains(&n.to_lowercase()),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerQuery {
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub address: Option<String>,
    pub postcode: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Query<Customer> for CustomerQuery {
    fn is_empty(&self) -> bool {
        [
            &self.first_name,
            &self.surname,
            &self.address,
            &self.postcode,
            &self.email,
            &self.phone,
        ]
        .into_iter()
        .all(|v| term(v).is_none())
    }

    fn matches(&self, c: &Customer) -> bool {
        contains_folded(&c.first_name, term(&self.first_name))
            && contains_folded(&c.surname, term(&self.surname))
            && contains_folded(&c.address, term(&self.address))
            && contains_folded(&c.postcode, term(&self.postcode))
            && contains_folded(&c.email, term(&self.email))
            && term(&self.phone).is_none_or(|p| c.phone.contains(p))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetQuery {
    pub name: Option<String>,
    pub species: Option<String>,
    pub age: Option<String>,
}

impl Query<Pet> for PetQuery {
    fn is_empty(&self) -> bool {
        [&self.name, &self.species, &self.age]
            .into_iter()
            .all(|v| term(v).is_none())
    }

    /// An age term that is not a whole number matches no pet.
    fn matches(&self, p: &Pet) -> bool {
        contains_folded(&p.name, term(&self.name))
            && contains_folded(&p.species, term(&self.species))
            && term(&self.age).is_none_or(|a| a.parse::<i64>().ok() == Some(p.age as i64))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingQuery {
    pub room: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl Query<Booking> for BookingQuery {
    fn is_empty(&self) -> bool {
        [&self.room, &self.start, &self.end]
            .into_iter()
            .all(|v| term(v).is_none())
    }

    fn matches(&self, b: &Booking) -> bool {
        contains_folded(&b.room, term(&self.room))
            && term(&self.start).is_none_or(|s| s == format_date(b.start))
            && term(&self.end).is_none_or(|e| e == format_date(b.end))
    }
}
