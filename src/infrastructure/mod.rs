//! Infrastructure layer - Calendar API, credentials and journal storage

pub mod calendar;
pub mod config;
pub mod home;
pub mod oauth;
pub mod writer;

pub use calendar::{EventSource, GoogleCalendar};
pub use config::Config;
pub use home::MeetingsHome;
pub use oauth::{ClientSecrets, StoredToken};
pub use writer::{append_blocks, JournalWriter};
