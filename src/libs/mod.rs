//! Core library modules for the laxmi application.
//!
//! - **Entry lifecycle**: [`entry`], [`store`], [`clock`], [`duration`], [`error`]
//! - **Presentation**: [`view`], [`export`], [`messages`]
//! - **Settings**: [`config`], [`data_storage`]
//!
//! ## Usage
//!
//! ```rust
//! use laxmi::libs::clock::{ClockFormat, SystemClock};
//! use laxmi::libs::entry::EntryField;
//! use laxmi::libs::store::EntryStore;
//!
//! let mut store = EntryStore::with_rows(SystemClock::new(ClockFormat::H24), 1);
//! store.update_field(0, EntryField::Brand, "Acme").unwrap();
//! store.start(0).unwrap();
//! ```

pub mod clock;
pub mod config;
pub mod data_storage;
pub mod duration;
pub mod entry;
pub mod error;
pub mod export;
pub mod messages;
pub mod store;
pub mod view;
