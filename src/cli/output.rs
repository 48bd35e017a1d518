//! Output formatting utilities

use crate::application::{MeetingNote, RecordedMeeting, SyncReport};
use crate::domain::render_entry;
use crate::infrastructure::Config;

/// Render dry-run notes exactly as they would be appended
pub fn format_notes(notes: &[MeetingNote]) -> String {
    if notes.is_empty() {
        return "No meetings to add".to_string();
    }

    notes
        .iter()
        .map(|note| render_entry(&note.blocks))
        .collect()
}

/// One-line summary of a sync run
pub fn format_sync_summary(report: &SyncReport) -> String {
    let mut summary = match &report.path {
        Some(path) => format!(
            "Added {} meeting(s) to {}",
            report.notes.len(),
            path.display()
        ),
        None => "No meetings to add".to_string(),
    };
    if !report.excluded.is_empty() {
        summary.push_str(&format!(" ({} excluded)", report.excluded.len()));
    }
    summary
}

/// Format recorded meetings as `HH:MM  Title` lines
pub fn format_meeting_list(meetings: &[RecordedMeeting]) -> String {
    if meetings.is_empty() {
        return "No meetings recorded".to_string();
    }

    let mut output = String::new();
    for meeting in meetings {
        let time = meeting.time.as_deref().unwrap_or("--:--");
        output.push_str(&format!("{}  {}\n", time, meeting.title));
    }
    output
}

/// Format the effective configuration as `key = value` lines
pub fn format_config(config: &Config) -> String {
    format!(
        "journal_dir = {}\ncalendar_id = {}\nexcluded_titles = {}\ncredentials_file = {}\ntoken_file = {}\napi_base_url = {}\n",
        config.journal_dir.display(),
        config.calendar_id,
        config.excluded_titles.join(", "),
        config.credentials_file.display(),
        config.token_file.display(),
        config.api_base_url
    )
}
