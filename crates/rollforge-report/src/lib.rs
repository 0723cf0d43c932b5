//! rollforge-report — renders generated character sheets.
//!
//! The core hands over a finished `CharacterSheet`; this crate owns all
//! textual layout: the classic stat block, a summary table for batch
//! runs, and JSON export.

pub mod json;
pub mod text;
