//! Exam model.
//!
//! An exam occupies a room, an invigilator and a class for `duration`
//! hours starting at `date` + `start_time`.
//!
//! # Time Model
//! Date and start time are kept as the raw strings the store provides.
//! They are interpreted as naive local time (no time zone) only when an
//! interval is needed, so a malformed record can still be held and listed.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ExamTimeError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];
const MS_PER_HOUR: f64 = 3_600_000.0;

/// A scheduled exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    /// Record identifier. Empty for a candidate that is not persisted yet.
    #[serde(default)]
    pub id: String,
    /// Subject being examined.
    #[serde(default)]
    pub subject: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Time of day, `HH:MM` or `HH:MM:SS`.
    pub start_time: String,
    /// Length in hours (may be fractional).
    pub duration: f64,
    /// Room identifier.
    pub room: String,
    /// Invigilator identifier.
    pub invigilator: String,
    /// Class sitting the exam.
    pub class: String,
    /// Lifecycle status.
    #[serde(default)]
    pub status: ExamStatus,
}

/// Exam lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

/// A half-open interval `[start, end)` of local date-times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamInterval {
    /// Interval start (inclusive).
    pub start: NaiveDateTime,
    /// Interval end (exclusive).
    pub end: NaiveDateTime,
}

impl ExamInterval {
    /// Creates a new interval.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether an instant falls within this interval.
    #[inline]
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.start && at < self.end
    }

    /// Whether two intervals intersect.
    ///
    /// Back-to-back intervals (one ends exactly when the other starts)
    /// do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }
}

impl Exam {
    /// Creates an upcoming exam with no id or subject.
    pub fn new(
        date: impl Into<String>,
        start_time: impl Into<String>,
        duration: f64,
        room: impl Into<String>,
        invigilator: impl Into<String>,
        class: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            subject: String::new(),
            date: date.into(),
            start_time: start_time.into(),
            duration,
            room: room.into(),
            invigilator: invigilator.into(),
            class: class.into(),
            status: ExamStatus::Upcoming,
        }
    }

    /// Sets the record id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: ExamStatus) -> Self {
        self.status = status;
        self
    }

    /// Parses `date`.
    pub fn parsed_date(&self) -> Result<NaiveDate, ExamTimeError> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| ExamTimeError::InvalidDate(self.date.clone()))
    }

    /// Parses `start_time`, accepting with or without seconds.
    pub fn parsed_start_time(&self) -> Result<NaiveTime, ExamTimeError> {
        let raw = self.start_time.trim();
        TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(raw, fmt).ok())
            .ok_or_else(|| ExamTimeError::InvalidStartTime(self.start_time.clone()))
    }

    /// Computes `[date + start_time, date + start_time + duration hours)`.
    ///
    /// Non-positive durations are not rejected; the resulting interval is
    /// empty or inverted and is compared as-is.
    pub fn interval(&self) -> Result<ExamInterval, ExamTimeError> {
        let start = self.parsed_date()?.and_time(self.parsed_start_time()?);

        if !self.duration.is_finite() {
            return Err(ExamTimeError::InvalidDuration(self.duration));
        }
        let end = Duration::try_milliseconds((self.duration * MS_PER_HOUR).round() as i64)
            .and_then(|length| start.checked_add_signed(length))
            .ok_or(ExamTimeError::InvalidDuration(self.duration))?;

        Ok(ExamInterval::new(start, end))
    }
}
