use crate::commands::{Listed, PageInfo};
use crate::error::{HotelError, Result};
use crate::model::Record;
use crate::paging::Pager;
use crate::query::{filter, Query};
use uuid::Uuid;

/// `count + 1`, the user-facing number given to a new record.
pub fn next_number<T>(records: &[T]) -> u32 {
    records.len() as u32 + 1
}

/// Maps a 1-based list position to the record's stable id.
pub fn resolve_position<T: Record>(records: &[T], position: usize) -> Result<Uuid> {
    position
        .checked_sub(1)
        .and_then(|i| records.get(i))
        .map(Record::id)
        .ok_or_else(|| HotelError::Api(format!("{} {} not found", T::KIND, position)))
}

/// Filters `records` with `query`, keeps each match's list position, and cuts
/// out the page `pager` points at.
pub fn search_page<T: Clone, Q: Query<T>>(
    records: &[T],
    query: &Q,
    pager: &Pager,
) -> (Vec<Listed<T>>, PageInfo) {
    let matches: Vec<Listed<T>> = filter(records, query)
        .into_iter()
        .map(|(position, record)| Listed {
            position,
            record: record.clone(),
        })
        .collect();
    let window = pager.view(&matches);
    let info = PageInfo {
        number: window.number(pager.page_size()),
        has_prev: window.has_prev,
        has_next: window.has_next,
        total: matches.len(),
    };
    (window.items, info)
}

pub fn positioned<T: Clone>(records: &[T]) -> Vec<Listed<T>> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| Listed {
            position: i + 1,
            record: r.clone(),
        })
        .collect()
}
