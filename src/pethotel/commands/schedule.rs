use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::BookingTier;
use crate::schedule::{project, MonthView};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, rooms: &[String], month: MonthView) -> Result<CmdResult> {
    let schedule = project(
        month,
        rooms,
        store.bookings(BookingTier::Active),
        store.pets(),
    );
    Ok(CmdResult::default().with_schedule(schedule))
}
