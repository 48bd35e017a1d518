//! Meeting note template

use crate::domain::{Block, EventRecord};
use crate::error::Result;

// Fixed child blocks following the time line
const TOPICS_DISCUSSED: &str = "**Topics Discussed**";
const ACTION_ITEMS: &str = "**Action Items**";
const TASK_ONE: &str = "[ ] Task 1";
const TASK_TWO: &str = "[ ] Task 2";
const NOTES: &str = "**Notes**";

/// Number of blocks emitted per meeting
pub const BLOCKS_PER_MEETING: usize = 7;

/// Header text for a meeting with the given title
pub fn meeting_header(title: &str) -> String {
    format!("## Meeting: {} #meeting", title)
}

/// Build the note blocks for one calendar event.
///
/// The header sits at indent 0; the time line and the five fixed sections sit at indent 1.
/// Fails with `MalformedEvent` when the event has no usable start time.
pub fn generate(event: &EventRecord) -> Result<Vec<Block>> {
    let time = event.start_time()?.format("%H:%M");

    Ok(vec![
        Block::new(meeting_header(event.display_title()), 0),
        Block::new(format!("**Time:** {}", time), 1),
        Block::new(TOPICS_DISCUSSED, 1),
        Block::new(ACTION_ITEMS, 1),
        Block::new(TASK_ONE, 1),
        Block::new(TASK_TWO, 1),
        Block::new(NOTES, 1),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EventStart;
    use crate::error::MeetingsError;

    fn texts(blocks: &[Block]) -> Vec<&str> {
        blocks.iter().map(|b| b.text.as_str()).collect()
    }

    #[test]
    fn test_generate_sprint_planning() {
        let event = EventRecord::new(
            Some("Sprint Planning"),
            EventStart::at("2024-03-01T09:30:00Z"),
        );
        let blocks = generate(&event).unwrap();

        assert_eq!(blocks.len(), BLOCKS_PER_MEETING);
        assert_eq!(
            texts(&blocks),
            vec![
                "## Meeting: Sprint Planning #meeting",
                "**Time:** 09:30",
                "**Topics Discussed**",
                "**Action Items**",
                "[ ] Task 1",
                "[ ] Task 2",
                "**Notes**",
            ]
        );
    }

    #[test]
    fn test_indent_levels() {
        let event = EventRecord::new(Some("1:1"), EventStart::at("2024-03-01T14:05:00+02:00"));
        let blocks = generate(&event).unwrap();

        assert_eq!(blocks[0].indent, 0);
        assert!(blocks[1..].iter().all(|b| b.indent == 1));
    }

    #[test]
    fn test_time_is_24_hour() {
        let event = EventRecord::new(Some("Late"), EventStart::at("2024-03-01T21:07:00Z"));
        let blocks = generate(&event).unwrap();
        assert_eq!(blocks[1].text, "**Time:** 21:07");
    }

    #[test]
    fn test_untitled_meeting() {
        let event = EventRecord::new(None, EventStart::at("2024-03-01T08:00:00Z"));
        let blocks = generate(&event).unwrap();
        assert_eq!(blocks[0].text, "## Meeting: Untitled Meeting #meeting");
    }

    #[test]
    fn test_all_day_event_renders_midnight() {
        let event = EventRecord::new(Some("Offsite"), EventStart::all_day("2024-03-01"));
        let blocks = generate(&event).unwrap();
        assert_eq!(blocks[1].text, "**Time:** 00:00");
    }

    #[test]
    fn test_missing_start_fails() {
        let event = EventRecord::new(Some("No start"), EventStart::default());
        assert!(matches!(
            generate(&event),
            Err(MeetingsError::MalformedEvent { .. })
        ));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let event = EventRecord::new(Some("Retro"), EventStart::at("2024-03-01T16:00:00Z"));
        assert_eq!(generate(&event).unwrap(), generate(&event).unwrap());
    }
}
