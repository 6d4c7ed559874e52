//! # palaver-store
//!
//! In-memory storage for the palaver chat simulation.
//!
//! The crate exposes a synchronous, runtime-free surface: a clonable
//! `History` handle that serializes every append and scan through a single
//! mutex, and a `Roster` of known participants.  Nothing here persists;
//! the whole state lives and dies with the process.

pub mod history;
pub mod models;
pub mod roster;

mod error;

pub use error::StoreError;
pub use history::History;
pub use models::*;
pub use roster::Roster;
