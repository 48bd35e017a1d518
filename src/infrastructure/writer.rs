//! Append-only journal writer

use crate::domain::{render_entry, Block, JournalDay};
use crate::error::{MeetingsError, Result};
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append `blocks` to the journal page for `day` inside `journal_dir`.
///
/// The directory and file are created when missing. Existing content is never read
/// or rewritten; each call adds a blank line, the rendered blocks and another blank line.
/// Returns the path that was written.
pub fn append_blocks(blocks: &[Block], day: NaiveDate, journal_dir: &Path) -> Result<PathBuf> {
    let path = JournalDay::new(day).path_in(journal_dir);

    fs::create_dir_all(journal_dir).map_err(|e| MeetingsError::storage(journal_dir, e))?;

    let entry = render_entry(blocks);
    {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| MeetingsError::storage(&path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(entry.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| MeetingsError::storage(&path, e))?;
    }

    Ok(path)
}

/// Journal writer bound to one journals directory
#[derive(Debug, Clone)]
pub struct JournalWriter {
    journal_dir: PathBuf,
}

impl JournalWriter {
    pub fn new(journal_dir: PathBuf) -> Self {
        JournalWriter { journal_dir }
    }

    pub fn journal_dir(&self) -> &Path {
        &self.journal_dir
    }

    pub fn append(&self, blocks: &[Block], day: NaiveDate) -> Result<PathBuf> {
        append_blocks(blocks, day, &self.journal_dir)
    }

    /// Read back the outline blocks of a day's page. A missing page has no blocks.
    pub fn read_blocks(&self, day: NaiveDate) -> Result<Vec<Block>> {
        let path = JournalDay::new(day).path_in(&self.journal_dir);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(MeetingsError::storage(&path, e)),
        };
        Ok(content.lines().filter_map(Block::parse_line).collect())
    }
}
