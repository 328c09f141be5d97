//! # Catalogue Model
//!
//! Pure data structures for the twelve catalogue resources. Each resource has:
//!
//! - the stored entity (`Movie`), identified by a typed id (`MovieId`, shown as `movie_7`)
//! - a change request (`MovieChange`) used for both add and update; every field is
//!   optional so that validation, not deserialization, reports what is missing
//! - a search filter (`MovieFilter`) of optional strings plus an optional `operation`
//!
//! Entities expose their searchable fields through [`Record`](catalog_framework::Record).

mod account;
mod artist;
mod author;
mod book;
mod game;
mod genre;
mod movie;
mod music;
mod platform;
mod program;
mod publisher;
mod series;

pub use account::*;
pub use artist::*;
pub use author::*;
pub use book::*;
pub use game::*;
pub use genre::*;
pub use movie::*;
pub use music::*;
pub use platform::*;
pub use program::*;
pub use publisher::*;
pub use series::*;
