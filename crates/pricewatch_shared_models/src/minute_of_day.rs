use crate::error::InvalidMinuteOfDay;
use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Wall-clock minute of a UTC day, `hour * 60 + minute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct MinuteOfDay(u16);

impl MinuteOfDay {
    pub fn new(value: u16) -> Result<Self, InvalidMinuteOfDay> {
        if value < MINUTES_PER_DAY {
            Ok(Self(value))
        } else {
            Err(InvalidMinuteOfDay(value.into()))
        }
    }

    pub fn from_time(time: DateTime<Utc>) -> Self {
        // chrono keeps hour < 24 and minute < 60
        Self((time.hour() * 60 + time.minute()) as u16)
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl TryFrom<u16> for MinuteOfDay {
    type Error = InvalidMinuteOfDay;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MinuteOfDay> for u16 {
    fn from(minute: MinuteOfDay) -> Self {
        minute.0
    }
}

impl fmt::Display for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.hour(), self.minute())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("expected H:M with H in 0..=23 and M in 0..=59, got {0:?}")]
pub struct ParseMinuteOfDayError(String);

impl FromStr for MinuteOfDay {
    type Err = ParseMinuteOfDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMinuteOfDayError(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(err)?;
        let hour: u16 = hour.trim().parse().map_err(|_| err())?;
        let minute: u16 = minute.trim().parse().map_err(|_| err())?;
        if hour >= 24 || minute >= 60 {
            return Err(err());
        }
        Ok(Self(hour * 60 + minute))
    }
}
