//! Domain layer - Meeting notes and journal model

pub mod block;
pub mod event;
pub mod journal;
pub mod template;
pub mod time_ref;

pub use block::{render_entry, Block};
pub use event::{EventRecord, EventStart};
pub use journal::JournalDay;
pub use template::generate;
pub use time_ref::TimeReference;
