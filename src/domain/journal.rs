//! Daily journal file naming

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// One Logseq journal page, identified by its day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalDay {
    pub date: NaiveDate,
}

impl JournalDay {
    pub fn new(date: NaiveDate) -> Self {
        JournalDay { date }
    }

    /// File name in Logseq's default journal format, e.g. `2024_03_01.md`
    pub fn filename(&self) -> String {
        self.date.format("%Y_%m_%d.md").to_string()
    }

    /// Full path of this day's page inside `journal_dir`
    pub fn path_in(&self, journal_dir: &Path) -> PathBuf {
        journal_dir.join(self.filename())
    }
}
