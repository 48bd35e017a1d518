//! List meetings already recorded in a day's journal page

use crate::domain::Block;
use crate::error::Result;
use crate::infrastructure::JournalWriter;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

fn header_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^## Meeting: (.*) #meeting$").unwrap())
}

fn time_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\*\*Time:\*\* (\d{2}:\d{2})$").unwrap())
}

/// A meeting header found in a journal page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedMeeting {
    pub title: String,
    pub time: Option<String>,
}

/// Collect meeting headers and their time lines, in page order
pub fn recorded_meetings(blocks: &[Block]) -> Vec<RecordedMeeting> {
    let mut meetings: Vec<RecordedMeeting> = Vec::new();
    // Set only while the latest top-level block is a meeting header
    let mut in_meeting = false;

    for block in blocks {
        if block.indent == 0 {
            in_meeting = match header_regex().captures(&block.text) {
                Some(captures) => {
                    meetings.push(RecordedMeeting {
                        title: captures[1].to_string(),
                        time: None,
                    });
                    true
                }
                None => false,
            };
            continue;
        }

        if !in_meeting || block.indent != 1 {
            continue;
        }
        if let (Some(current), Some(captures)) =
            (meetings.last_mut(), time_regex().captures(&block.text))
        {
            if current.time.is_none() {
                current.time = Some(captures[1].to_string());
            }
        }
    }

    meetings
}

/// Read the page for `day` and list the meetings recorded in it
pub fn list_meetings(writer: &JournalWriter, day: NaiveDate) -> Result<Vec<RecordedMeeting>> {
    let blocks = writer.read_blocks(day)?;
    Ok(recorded_meetings(&blocks))
}
