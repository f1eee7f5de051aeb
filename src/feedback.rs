//! User feedback log.
//!
//! Feedback events are appended to a CSV file with a single `FeedbackType`
//! column:
//! ```csv
//! FeedbackType
//! Thumbs Up
//! Thumbs Down
//! ```
//!
//! Rows are never deduplicated, edited or removed. Each append is a single
//! write on a file opened in append mode; concurrent writers from several
//! processes are not coordinated.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use csv::{ReaderBuilder, WriterBuilder};
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{EmotionError, Result};

/// Default location of the feedback log.
pub const DEFAULT_FEEDBACK_FILE: &str = "feedback_summary.csv";

/// Name of the single CSV column.
pub const FEEDBACK_HEADER: &str = "FeedbackType";

/// A thumbs up or thumbs down response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum FeedbackType {
    /// The prediction looked right.
    #[serde(rename = "Thumbs Up")]
    #[value(name = "up", alias = "yes")]
    ThumbsUp,
    /// The prediction looked wrong.
    #[serde(rename = "Thumbs Down")]
    #[value(name = "down", alias = "no")]
    ThumbsDown,
}

/// What the user did with the feedback controls this cycle.
pub type FeedbackAction = Option<FeedbackType>;

impl FeedbackType {
    /// The value written to the log.
    pub fn as_str(self) -> &'static str {
        match self {
            FeedbackType::ThumbsUp => "Thumbs Up",
            FeedbackType::ThumbsDown => "Thumbs Down",
        }
    }
}

impl fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedbackType {
    type Err = EmotionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "Thumbs Up" => Ok(FeedbackType::ThumbsUp),
            "Thumbs Down" => Ok(FeedbackType::ThumbsDown),
            other => Err(EmotionError::invalid_argument(format!(
                "unknown feedback type: {other}"
            ))),
        }
    }
}

/// Counts of recorded feedback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeedbackSummary {
    pub thumbs_up: usize,
    pub thumbs_down: usize,
}

impl FeedbackSummary {
    /// Total number of recorded events.
    pub fn total(&self) -> usize {
        self.thumbs_up + self.thumbs_down
    }
}

/// Destination of feedback events.
pub trait FeedbackRecorder: Send + Sync {
    /// Append one event.
    fn record(&self, feedback: FeedbackType) -> Result<()>;

    /// Get the name of this recorder for debugging and logging.
    fn name(&self) -> &'static str;
}

/// Appends feedback to a CSV file.
#[derive(Debug, Clone)]
pub struct CsvFeedbackRecorder {
    path: PathBuf,
}

impl Default for CsvFeedbackRecorder {
    fn default() -> Self {
        Self::new(DEFAULT_FEEDBACK_FILE)
    }
}

impl CsvFeedbackRecorder {
    /// Create a recorder writing to `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        CsvFeedbackRecorder {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Location of the log.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encode the bytes appended for one event, with the header if needed.
    ///
    /// `terminate` first closes an unterminated last line.
    fn encode_row(
        feedback: FeedbackType,
        with_header: bool,
        terminate: bool,
    ) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        if terminate {
            buf.push(b'\n');
        }
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(buf);

        if with_header {
            writer.write_record([FEEDBACK_HEADER])?;
        }
        writer.write_record([feedback.as_str()])?;

        writer
            .into_inner()
            .map_err(|e| EmotionError::feedback_write(format!("cannot encode row: {e}")))
    }

    fn append(&self, feedback: FeedbackType) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)?;

        let is_empty = file.metadata()?.len() == 0;
        let terminate = !is_empty && !Self::ends_with_newline(&mut file)?;
        let bytes = Self::encode_row(feedback, is_empty, terminate)?;
        file.write_all(&bytes)?;
        Ok(())
    }

    fn ends_with_newline(file: &mut File) -> Result<bool> {
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))?;
        file.read_exact(&mut last)?;
        Ok(last[0] == b'\n')
    }

    /// Read back every recorded event in order.
    ///
    /// A missing log reads as empty.
    pub fn entries(&self) -> Result<Vec<FeedbackType>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(File::open(&self.path)?);

        let headers = reader.headers()?.clone();
        if headers.get(0) != Some(FEEDBACK_HEADER) {
            return Err(EmotionError::other(format!(
                "{} does not start with a {FEEDBACK_HEADER} header",
                self.path.display()
            )));
        }

        reader
            .records()
            .map(|record| -> Result<FeedbackType> {
                let record = record?;
                record
                    .get(0)
                    .ok_or_else(|| EmotionError::other("empty feedback row"))?
                    .parse()
            })
            .collect()
    }

    /// Count the recorded events.
    pub fn summary(&self) -> Result<FeedbackSummary> {
        let mut summary = FeedbackSummary::default();
        for entry in self.entries()? {
            match entry {
                FeedbackType::ThumbsUp => summary.thumbs_up += 1,
                FeedbackType::ThumbsDown => summary.thumbs_down += 1,
            }
        }
        Ok(summary)
    }
}

impl FeedbackRecorder for CsvFeedbackRecorder {
    fn record(&self, feedback: FeedbackType) -> Result<()> {
        self.append(feedback).map_err(|e| {
            EmotionError::feedback_write(format!("{}: {e}", self.path.display()))
        })?;
        info!("Recorded feedback {feedback:?} in {}", self.path.display());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "csv"
    }
}
