/// High-score table and its persistence.
///
/// On disk the table is exactly three lines.  Each line is a 3-character name
/// immediately followed by the decimal score, no separator:
///
/// ```text
/// BBB1000
/// AAA500
/// CCC200
/// ```

use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub const TABLE_SIZE: usize = 3;
pub const NAME_LEN: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighScoreEntry {
    pub name: String,
    pub score: u32,
}

impl HighScoreEntry {
    pub fn new(name: &str, score: u32) -> Self {
        HighScoreEntry {
            name: name.to_string(),
            score,
        }
    }
}

impl fmt::Display for HighScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.score)
    }
}

#[derive(Debug, Error)]
pub enum HighScoreError {
    #[error("high-score file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("malformed high-score line {line}: {content:?}")]
    Malformed { line: usize, content: String },
    #[error("expected {expected} high-score lines, found {found}")]
    WrongLineCount { expected: usize, found: usize },
    #[error("player name must be exactly 3 characters, got {0:?}")]
    InvalidName(String),
}

pub fn default_table() -> Vec<HighScoreEntry> {
    vec![HighScoreEntry::new("---", 0); TABLE_SIZE]
}

// ── Text format ───────────────────────────────────────────────────────────────

pub fn parse_table(contents: &str) -> Result<Vec<HighScoreEntry>, HighScoreError> {
    let lines: Vec<&str> = contents.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() != TABLE_SIZE {
        return Err(HighScoreError::WrongLineCount {
            expected: TABLE_SIZE,
            found: lines.len(),
        });
    }

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let malformed = || HighScoreError::Malformed {
                line: i + 1,
                content: line.to_string(),
            };
            let split = line
                .char_indices()
                .nth(NAME_LEN)
                .map(|(idx, _)| idx)
                .ok_or_else(malformed)?;
            let (name, digits) = line.split_at(split);
            let score = digits.trim_end().parse::<u32>().map_err(|_| malformed())?;
            Ok(HighScoreEntry::new(name, score))
        })
        .collect()
}

pub fn format_table(table: &[HighScoreEntry]) -> String {
    table.iter().map(|e| format!("{e}\n")).collect()
}

/// Insert `score` in descending order.  Ties keep the older entry first; the
/// lowest entry falls off once the table is full.
pub fn insert_score(table: &[HighScoreEntry], name: &str, score: u32) -> Vec<HighScoreEntry> {
    let mut updated = table.to_vec();
    let pos = updated
        .iter()
        .position(|e| score > e.score)
        .unwrap_or(updated.len());
    updated.insert(pos, HighScoreEntry::new(name, score));
    updated.truncate(TABLE_SIZE);
    updated
}

// ── Stores ────────────────────────────────────────────────────────────────────

/// Persistence collaborator, invoked once per game at game over.
pub trait HighScoreStore {
    /// Current table; falls back to defaults rather than failing.
    fn load_or_init(&mut self) -> Vec<HighScoreEntry>;

    /// Record a finished game and return the updated table.
    fn submit_score(&mut self, name: &str, score: u32)
        -> Result<Vec<HighScoreEntry>, HighScoreError>;
}

fn validate_name(name: &str) -> Result<(), HighScoreError> {
    if name.chars().count() == NAME_LEN {
        Ok(())
    } else {
        Err(HighScoreError::InvalidName(name.to_string()))
    }
}

/// Table stored in a text file.
#[derive(Clone, Debug)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileHighScoreStore { path: path.into() }
    }

    fn write(&self, table: &[HighScoreEntry]) -> Result<(), HighScoreError> {
        fs::write(&self.path, format_table(table))?;
        Ok(())
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load_or_init(&mut self) -> Vec<HighScoreEntry> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match parse_table(&contents) {
                Ok(table) => table,
                Err(err) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        %err,
                        "ignoring malformed high-score file"
                    );
                    default_table()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                let table = default_table();
                if let Err(err) = self.write(&table) {
                    tracing::warn!(
                        path = %self.path.display(),
                        %err,
                        "could not create high-score file"
                    );
                }
                table
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "could not read high-score file");
                default_table()
            }
        }
    }

    fn submit_score(
        &mut self,
        name: &str,
        score: u32,
    ) -> Result<Vec<HighScoreEntry>, HighScoreError> {
        validate_name(name)?;
        let table = insert_score(&self.load_or_init(), name, score);
        self.write(&table)?;
        tracing::info!(name, score, "high-score table saved");
        Ok(table)
    }
}

/// Table held in memory only.
#[derive(Clone, Debug)]
pub struct MemoryHighScoreStore {
    pub table: Vec<HighScoreEntry>,
}

impl Default for MemoryHighScoreStore {
    fn default() -> Self {
        MemoryHighScoreStore {
            table: default_table(),
        }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load_or_init(&mut self) -> Vec<HighScoreEntry> {
        self.table.clone()
    }

    fn submit_score(
        &mut self,
        name: &str,
        score: u32,
    ) -> Result<Vec<HighScoreEntry>, HighScoreError> {
        validate_name(name)?;
        self.table = insert_score(&self.table, name, score);
        Ok(self.table.clone())
    }
}
