//! # garage-resolution
//!
//! Decides whether ranked candidates are decisive or need clarification, and
//! picks the follow-up questions to ask when they are not.

pub mod resolver;
pub mod templates;

pub use resolver::{rank_candidates, AmbiguityResolver, Resolution};
