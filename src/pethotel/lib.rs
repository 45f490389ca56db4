//! # Pet Hotel Architecture
//!
//! Pethotel keeps customer, pet and room booking records for a small pet boarding
//! business. It is a **UI-agnostic library** with a command-line client on top;
//! everything the client can do goes through [`api::HotelApi`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, formats output                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (list positions → UUIDs)               │
//! │  - Supplies rooms, page size and today's date               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, booking lifecycle, search and paging         │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait over four whole-file record lists        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//!
//! Every record carries two ids. `number` is the user-facing `count + 1` number
//! assigned at creation; it can repeat after deletions. `id` is a UUID used for
//! every reference (a booking's customer and pet) and lookup. Clients address
//! records by their 1-based position in the current list, which the API turns
//! into the UUID before any command runs.
//!
//! ## Durability
//!
//! Each mutation rewrites its whole list before it counts as done. There is a
//! single writer and no locking.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: Business logic for each user action
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Records, forms and date helpers
//! - [`validation`]: Field rules and reports
//! - [`query`]: Linear search predicates
//! - [`paging`]: Fixed-size pages
//! - [`schedule`]: Month grid projection
//! - [`auth`]: Password file and access levels
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod auth;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod paging;
pub mod query;
pub mod schedule;
pub mod store;
pub mod validation;
