use chrono::{Datelike, Local, NaiveDate};
use std::io;
use std::path::{Path, PathBuf};

/// Process state a run depends on, captured once so every stage sees the same values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub root: PathBuf,
    pub today: NaiveDate,
}

impl RunContext {
    pub fn new(root: impl Into<PathBuf>, today: NaiveDate) -> Self {
        Self {
            root: root.into(),
            today,
        }
    }

    /// Snapshot of the current working directory and local date.
    pub fn capture() -> io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?, Local::now().date_naive()))
    }

    pub fn year(&self) -> String {
        format!("{}", self.today.year())
    }

    pub fn month(&self) -> String {
        format!("{:02}", self.today.month())
    }

    pub fn day(&self) -> String {
        format!("{}", self.today.day())
    }

    /// Resolves a path relative to the site root.
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }
}
