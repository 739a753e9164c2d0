//! Delivery and pickup windows

use std::fmt;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// One boundary of a schedule window.
///
/// The platform wants `YYYY-MM-DD` and `HH:MM:SS` as separate strings, not a
/// combined timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Schedule {
    pub date: String,
    pub time: String,
}

impl Schedule {
    /// Split a timestamp into the platform's date/time string pair.
    pub fn from_datetime<Tz: TimeZone>(at: &DateTime<Tz>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self {
            date: at.format("%Y-%m-%d").to_string(),
            time: at.format("%H:%M:%S").to_string(),
        }
    }
}

/// Delivery or pickup window as a start/end pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleSlot {
    pub start: Schedule,
    pub end: Schedule,
}

impl ScheduleSlot {
    /// Build a window from two timestamps.
    pub fn new<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self { start: Schedule::from_datetime(start), end: Schedule::from_datetime(end) }
    }
}
