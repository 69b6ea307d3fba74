//! # Repository Module
//!
//! Storage access for Hotel Desk.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Desk command                                                          │
//! │       │  db.bookings().save_all(&list)                                 │
//! │       ▼                                                                 │
//! │  BookingRepository   ← JSON encode / decode, corrupt-value handling    │
//! │       │  kv.set("hotel-bookings", json)                                │
//! │       ▼                                                                 │
//! │  KeyValueRepository  ← plain string get / set / remove                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  kv_store table                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`KeyValueRepository`](kv::KeyValueRepository) - string values by key
//! - [`BookingRepository`](booking::BookingRepository) - the booking list

pub mod booking;
pub mod kv;
