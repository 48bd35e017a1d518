//! Sync meetings use case: calendar events in, meeting notes appended

use crate::domain::{template, Block, EventRecord};
use crate::error::Result;
use crate::infrastructure::{Config, EventSource, JournalWriter};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use std::path::PathBuf;
use tracing::{debug, info};

/// UTC window covering `day`, from midnight to the last microsecond
pub fn day_window(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = day.and_time(NaiveTime::MIN).and_utc();
    let end = start + Duration::days(1) - Duration::microseconds(1);
    (start, end)
}

/// Note generated for one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingNote {
    pub title: String,
    pub blocks: Vec<Block>,
}

/// Outcome of one sync run
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Journal page that was appended to, if any event was written
    pub path: Option<PathBuf>,
    pub notes: Vec<MeetingNote>,
    pub excluded: Vec<String>,
}

/// Fetches a day's events and appends a note per meeting
pub struct SyncMeetingsService<S: EventSource> {
    source: S,
    config: Config,
    writer: JournalWriter,
}

impl<S: EventSource> SyncMeetingsService<S> {
    pub fn new(source: S, config: Config, writer: JournalWriter) -> Self {
        SyncMeetingsService {
            source,
            config,
            writer,
        }
    }

    /// Fetch the events for `day` and append a note for each one that is not excluded.
    ///
    /// Events are handled in calendar order; the first failure stops the run and
    /// leaves notes already appended in place. With `dry_run` nothing is written.
    pub fn execute(&self, day: NaiveDate, dry_run: bool) -> Result<SyncReport> {
        let (day_start, day_end) = day_window(day);
        let events = self
            .source
            .list_events(&self.config.calendar_id, day_start, day_end)?;
        info!(%day, count = events.len(), "fetched calendar events");

        let mut report = SyncReport::default();
        for event in events {
            if self.config.is_excluded(event.title.as_deref()) {
                debug!(title = event.display_title(), "skipping excluded event");
                report.excluded.push(event.display_title().to_string());
                continue;
            }

            let note = self.note_for(&event)?;
            if !dry_run {
                let path = self.writer.append(&note.blocks, day)?;
                info!(title = %note.title, path = %path.display(), "appended meeting note");
                report.path = Some(path);
            }
            report.notes.push(note);
        }

        Ok(report)
    }

    fn note_for(&self, event: &EventRecord) -> Result<MeetingNote> {
        Ok(MeetingNote {
            title: event.display_title().to_string(),
            blocks: template::generate(event)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EventStart;
    use crate::error::MeetingsError;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    struct FakeSource {
        events: Vec<EventRecord>,
        calls: RefCell<Vec<(String, DateTime<Utc>, DateTime<Utc>)>>,
    }

    impl FakeSource {
        fn new(events: Vec<EventRecord>) -> Self {
            FakeSource {
                events,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl EventSource for FakeSource {
        fn list_events(
            &self,
            calendar_id: &str,
            day_start: DateTime<Utc>,
            day_end: DateTime<Utc>,
        ) -> Result<Vec<EventRecord>> {
            self.calls
                .borrow_mut()
                .push((calendar_id.to_string(), day_start, day_end));
            Ok(self.events.clone())
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn service(temp: &TempDir, events: Vec<EventRecord>) -> SyncMeetingsService<FakeSource> {
        SyncMeetingsService::new(
            FakeSource::new(events),
            Config::default(),
            JournalWriter::new(temp.path().join("journals")),
        )
    }

    #[test]
    fn test_day_window() {
        let (start, end) = day_window(day());
        assert_eq!(start.to_rfc3339(), "2024-03-01T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2024-03-01T23:59:59.999999+00:00");
    }

    #[test]
    fn test_queries_configured_calendar_for_day() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp, vec![]);

        service.execute(day(), false).unwrap();

        let calls = service.source.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "primary");
        assert_eq!(calls[0].1, day_window(day()).0);
    }

    #[test]
    fn test_appends_notes_in_event_order() {
        let temp = TempDir::new().unwrap();
        let service = service(
            &temp,
            vec![
                EventRecord::new(Some("Standup"), EventStart::at("2024-03-01T09:00:00Z")),
                EventRecord::new(Some("Retro"), EventStart::at("2024-03-01T15:30:00Z")),
            ],
        );

        let report = service.execute(day(), false).unwrap();

        let path = report.path.unwrap();
        assert!(path.ends_with("2024_03_01.md"));
        let content = fs::read_to_string(path).unwrap();
        let standup = content.find("## Meeting: Standup #meeting").unwrap();
        let retro = content.find("## Meeting: Retro #meeting").unwrap();
        assert!(standup < retro);
        assert_eq!(content.lines().count(), 2 * 9);
    }

    #[test]
    fn test_excluded_titles_are_skipped() {
        let temp = TempDir::new().unwrap();
        let service = service(
            &temp,
            vec![EventRecord::new(Some("Home"), EventStart::all_day("2024-03-01"))],
        );

        let report = service.execute(day(), false).unwrap();

        assert!(report.notes.is_empty());
        assert_eq!(report.excluded, vec!["Home"]);
        assert!(report.path.is_none());
        assert!(!temp.path().join("journals").exists());
    }

    #[test]
    fn test_untitled_event_is_not_excluded() {
        let temp = TempDir::new().unwrap();
        let service = service(
            &temp,
            vec![EventRecord::new(None, EventStart::at("2024-03-01T11:00:00Z"))],
        );

        let report = service.execute(day(), false).unwrap();
        assert_eq!(report.notes[0].title, "Untitled Meeting");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let service = service(
            &temp,
            vec![EventRecord::new(Some("Standup"), EventStart::at("2024-03-01T09:00:00Z"))],
        );

        let report = service.execute(day(), true).unwrap();

        assert_eq!(report.notes.len(), 1);
        assert_eq!(report.notes[0].blocks.len(), template::BLOCKS_PER_MEETING);
        assert!(report.path.is_none());
        assert!(!temp.path().join("journals").exists());
    }

    #[test]
    fn test_malformed_event_stops_after_earlier_notes() {
        let temp = TempDir::new().unwrap();
        let service = service(
            &temp,
            vec![
                EventRecord::new(Some("First"), EventStart::at("2024-03-01T09:00:00Z")),
                EventRecord::new(Some("Broken"), EventStart::default()),
                EventRecord::new(Some("Never"), EventStart::at("2024-03-01T17:00:00Z")),
            ],
        );

        let err = service.execute(day(), false).unwrap_err();
        assert!(matches!(err, MeetingsError::MalformedEvent { .. }));

        let content =
            fs::read_to_string(temp.path().join("journals").join("2024_03_01.md")).unwrap();
        assert!(content.contains("## Meeting: First #meeting"));
        assert!(!content.contains("Never"));
    }

    #[test]
    fn test_rerun_duplicates_notes() {
        let temp = TempDir::new().unwrap();
        let service = service(
            &temp,
            vec![EventRecord::new(Some("Standup"), EventStart::at("2024-03-01T09:00:00Z"))],
        );

        service.execute(day(), false).unwrap();
        let report = service.execute(day(), false).unwrap();

        let content = fs::read_to_string(report.path.unwrap()).unwrap();
        assert_eq!(content.matches("## Meeting: Standup #meeting").count(), 2);
    }
}
