//! Application layer - Use cases and orchestration

pub mod authorize;
pub mod init;
pub mod list_meetings;
pub mod manage_config;
pub mod sync_meetings;

pub use authorize::AuthorizeService;
pub use list_meetings::{list_meetings, RecordedMeeting};
pub use manage_config::ConfigService;
pub use sync_meetings::{day_window, MeetingNote, SyncMeetingsService, SyncReport};
