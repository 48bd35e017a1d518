//! logseq-meetings - Meeting note templates for Logseq journals
//!
//! Fetches the day's events from Google Calendar and appends one outline note per
//! meeting to the matching Logseq journal page.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::MeetingsError;
