//! Month grid of room occupancy.
//!
//! [`project`] lays the active bookings over a room x day grid for one month.
//! A booking is clipped to the month; if anything remains it becomes a
//! [`Span`] in its room's row covering the clipped days inclusively.

use crate::error::{HotelError, Result};
use crate::model::{Booking, Pet};
use chrono::{Datelike, Local, NaiveDate};
use uuid::Uuid;

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// The month currently on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthView {
    year: i32,
    month: u32,
}

impl MonthView {
    /// Fails for a month outside 1..=12 or a year chrono cannot represent.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self::containing)
            .ok_or_else(|| HotelError::Api(format!("Month {:02}/{} is out of range", month, year)))
    }

    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn days(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn last_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, self.days()).unwrap_or_default()
    }

    /// The month `months` away from this one, in either direction.
    pub fn shifted(self, months: i32) -> Result<Self> {
        let index = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(months);
        let year = i32::try_from(index.div_euclid(12))
            .map_err(|_| HotelError::Api(format!("Month offset {} is out of range", months)))?;
        Self::new(year, index.rem_euclid(12) as u32 + 1)
    }

    /// Stays put at the last representable month.
    pub fn next(self) -> Self {
        self.shifted(1).unwrap_or(self)
    }

    /// Stays put at the first representable month.
    pub fn prev(self) -> Self {
        self.shifted(-1).unwrap_or(self)
    }

    /// e.g. "February 2032"
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

impl Default for MonthView {
    fn default() -> Self {
        Self::current()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub booking_id: Uuid,
    /// First and last day of the month covered, 1-based, inclusive.
    pub from_day: u32,
    pub to_day: u32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRow {
    pub room: String,
    pub spans: Vec<Span>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub month: MonthView,
    pub rows: Vec<RoomRow>,
}

impl Schedule {
    pub fn days(&self) -> u32 {
        self.month.days()
    }
}

/// Clips `[start, end]` to `month`, giving the covered day numbers.
pub fn clip(month: MonthView, start: NaiveDate, end: NaiveDate) -> Option<(u32, u32)> {
    let from = start.max(month.first_day());
    let to = end.min(month.last_day());
    (from <= to).then(|| (from.day(), to.day()))
}

/// One row per configured room, in configuration order. Spans are labelled with
/// the pet's name; bookings for rooms not in `rooms` are left out.
pub fn project(month: MonthView, rooms: &[String], bookings: &[Booking], pets: &[Pet]) -> Schedule {
    let mut rows: Vec<RoomRow> = rooms
        .iter()
        .map(|room| RoomRow {
            room: room.clone(),
            spans: Vec::new(),
        })
        .collect();

    for booking in bookings {
        let Some((from_day, to_day)) = clip(month, booking.start, booking.end) else {
            continue;
        };
        let Some(row) = rows.iter_mut().find(|r| r.room == booking.room) else {
            tracing::warn!(room = %booking.room, "booking room is not configured, left off the schedule");
            continue;
        };
        let label = pets
            .iter()
            .find(|p| p.id == booking.pet_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "?".to_string());
        row.spans.push(Span {
            booking_id: booking.id,
            from_day,
            to_day,
            label,
        });
    }

    Schedule { month, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn month(y: i32, m: u32) -> MonthView {
        MonthView::new(y, m).unwrap()
    }

    fn rooms() -> Vec<String> {
        vec!["R1".into(), "R2".into(), "R3".into()]
    }

    #[test]
    fn february_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2031, 4), 30);
        assert_eq!(days_in_month(2031, 12), 31);
    }

    #[test]
    fn navigation_rolls_over_years() {
        assert_eq!(month(2030, 12).next(), month(2031, 1));
        assert_eq!(month(2030, 1).prev(), month(2029, 12));
        assert_eq!(month(2030, 6).next().prev(), month(2030, 6));
        assert!(MonthView::new(2030, 13).is_err());
        assert_eq!(month(2032, 2).label(), "February 2032");
    }

    #[test]
    fn shifting_by_many_months() {
        assert_eq!(month(2031, 3).shifted(10).unwrap(), month(2032, 1));
        assert_eq!(month(2031, 3).shifted(-3).unwrap(), month(2030, 12));
        assert_eq!(month(2031, 3).shifted(-27).unwrap(), month(2028, 12));
        assert_eq!(month(2031, 3).shifted(0).unwrap(), month(2031, 3));
    }

    #[test]
    fn years_beyond_the_calendar_are_refused() {
        let err = MonthView::new(1_000_000, 1).unwrap_err();
        assert!(matches!(err, HotelError::Api(_)));
        assert!(MonthView::new(i32::MIN, 6).is_err());

        let last = MonthView::containing(NaiveDate::MAX);
        assert!(last.shifted(1).is_err());
        assert_eq!(last.next(), last);
        assert!(month(2031, 3).shifted(i32::MAX).is_err());
    }

    #[test]
    fn clipping() {
        let m = month(2031, 3);
        assert_eq!(clip(m, date(2031, 3, 5), date(2031, 3, 9)), Some((5, 9)));
        assert_eq!(clip(m, date(2031, 2, 20), date(2031, 3, 2)), Some((1, 2)));
        assert_eq!(clip(m, date(2031, 3, 30), date(2031, 4, 2)), Some((30, 31)));
        assert_eq!(clip(m, date(2031, 2, 1), date(2031, 5, 1)), Some((1, 31)));
        assert_eq!(clip(m, date(2031, 4, 1), date(2031, 4, 2)), None);
        assert_eq!(clip(m, date(2030, 3, 1), date(2030, 3, 9)), None);
    }

    #[test]
    fn projects_spans_into_room_rows() {
        let mut pet = StoreFixture::sample_pet(1);
        pet.name = "Biscuit".into();

        let mut inside = StoreFixture::sample_booking("R2");
        inside.pet_id = pet.id;
        inside.start = date(2031, 2, 27);
        inside.end = date(2031, 3, 3);

        let mut outside = StoreFixture::sample_booking("R1");
        outside.start = date(2031, 4, 1);
        outside.end = date(2031, 4, 5);

        let schedule = project(month(2031, 2), &rooms(), &[inside.clone(), outside], &[pet]);
        assert_eq!(schedule.days(), 28);
        assert_eq!(schedule.rows.len(), 3);
        assert!(schedule.rows[0].spans.is_empty());
        assert_eq!(
            schedule.rows[1].spans,
            vec![Span {
                booking_id: inside.id,
                from_day: 27,
                to_day: 28,
                label: "Biscuit".into(),
            }]
        );
        assert!(schedule.rows[2].spans.is_empty());
    }

    #[test]
    fn unknown_room_and_pet() {
        let stray = StoreFixture::sample_booking("R99");
        let orphan = StoreFixture::sample_booking("R3");
        let schedule = project(month(2099, 1), &rooms(), &[stray, orphan], &[]);
        let spans: usize = schedule.rows.iter().map(|r| r.spans.len()).sum();
        assert_eq!(spans, 1);
        assert_eq!(schedule.rows[2].spans[0].label, "?");
    }
}
