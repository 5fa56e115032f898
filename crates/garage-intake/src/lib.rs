//! # garage-intake
//!
//! First step of every turn, before any collaborator sees the complaint.
//!
//! - [`InputNormalizer`]: expands workshop abbreviations and Hindi/English
//!   slang, fixes common contractions, collapses whitespace.
//! - [`find_vehicle`] / [`decode_vehicle`]: pull a VIN or Indian registration
//!   number out of the text and decode what it says about the vehicle.

pub mod normalizer;
pub mod vehicle;

pub use normalizer::{InputNormalizer, NormalizedInput};
pub use vehicle::{decode_vehicle, find_vehicle};
