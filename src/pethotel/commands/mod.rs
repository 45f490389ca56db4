//! # Command Layer
//!
//! One function per user action. Commands take a [`DataStore`](crate::store::DataStore)
//! and already-resolved stable ids, run the business rules, persist, and describe
//! what happened in a [`CmdResult`]. They never prompt and never print; confirming
//! destructive actions is the client's job.

use crate::config::HotelConfig;
use crate::model::{Booking, BookingTier, Customer, Pet};
use crate::schedule::Schedule;
use std::path::PathBuf;

pub mod access;
pub mod archive;
pub mod bookings;
pub mod config;
pub mod customers;
pub mod helpers;
pub mod pets;
pub mod rooms;
pub mod schedule;
pub mod unarchive;

#[derive(Debug, Clone)]
pub struct HotelPaths {
    pub data: PathBuf,
}

impl HotelPaths {
    pub fn new(data: PathBuf) -> Self {
        Self { data }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A record with its 1-based position in the full (unfiltered) list, which is
/// how clients address it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listed<T> {
    pub position: usize,
    pub record: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub number: usize,
    pub has_prev: bool,
    pub has_next: bool,
    /// Matches across all pages
    pub total: usize,
}

/// A booking with its references resolved for display. Names are `None` when
/// the referenced record no longer exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDetail {
    pub tier: BookingTier,
    pub booking: Booking,
    pub customer_name: Option<String>,
    pub pet_name: Option<String>,
    pub pet_species: Option<String>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_customers: Vec<Customer>,
    pub affected_pets: Vec<Pet>,
    pub affected_bookings: Vec<Booking>,
    pub listed_customers: Vec<Listed<Customer>>,
    pub listed_pets: Vec<Listed<Pet>>,
    pub listed_bookings: Vec<Listed<Booking>>,
    pub page: Option<PageInfo>,
    pub booking_detail: Option<BookingDetail>,
    pub rooms: Vec<String>,
    pub schedule: Option<Schedule>,
    pub config: Option<HotelConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_page(mut self, page: PageInfo) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_rooms(mut self, rooms: Vec<String>) -> Self {
        self.rooms = rooms;
        self
    }

    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    pub fn with_config(mut self, config: HotelConfig) -> Self {
        self.config = Some(config);
        self
    }
}
