// src/store.rs
//! Two-generation snapshot store: `previous` (last good document) and `current`
//! (this run's download, waiting to be promoted).
//!
//! Writes go through `file::write_atomic`; promotion is a single rename done after both
//! files have been read, so a crash never leaves both generations half-written.

use std::{fs, io, path::{Path, PathBuf}};

use crate::change::{self, Comparison};
use crate::config::options::StoreOptions;
use crate::file::{read_optional, write_atomic};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Promotion {
    /// No current snapshot on disk; nothing moved.
    Nothing,
    /// Current became previous; there was nothing to compare against.
    First,
    /// Current replaced previous after comparing them.
    Compared(Comparison),
}

#[derive(Clone, Debug)]
pub struct SnapshotStore {
    previous: PathBuf,
    current: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: &Path, previous_file: &str, current_file: &str) -> Self {
        Self {
            previous: dir.join(previous_file),
            current: dir.join(current_file),
        }
    }

    pub fn from_options(opts: &StoreOptions) -> Self {
        Self::new(&opts.dir, &opts.previous_file, &opts.current_file)
    }

    pub fn previous_path(&self) -> &Path { &self.previous }
    pub fn current_path(&self) -> &Path { &self.current }

    /// Last promoted document, if any.
    pub fn read_previous(&self) -> io::Result<Option<String>> {
        match read_optional(&self.previous)? {
            Some(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            None => Ok(None),
        }
    }

    pub fn write_current(&self, doc: &str) -> io::Result<()> {
        write_atomic(&self.current, doc.as_bytes())
    }

    /// What `promote` would report. Moves nothing, so `previous` still holds the old document.
    pub fn pending(&self) -> io::Result<Promotion> {
        let Some(current) = read_optional(&self.current)? else {
            return Ok(Promotion::Nothing);
        };
        Ok(match read_optional(&self.previous)? {
            Some(previous) => Promotion::Compared(change::compare(&previous, &current)),
            None => Promotion::First,
        })
    }

    /// Compare current against previous (when both exist), then rename current over previous.
    pub fn promote(&self) -> io::Result<Promotion> {
        let outcome = self.pending()?;
        if outcome == Promotion::Nothing {
            return Ok(outcome);
        }

        fs::rename(&self.current, &self.previous)?;
        logf!("Promoted {} -> {} ({outcome:?})", self.current.display(), self.previous.display());
        Ok(outcome)
    }
}
