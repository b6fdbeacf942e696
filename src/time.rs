//! Wall-clock readings, and the sources they come from.

use std::fmt;

use chrono::{NaiveTime, Timelike};

/// A single wall-clock reading on a 12 hour dial.
///
/// These are read fresh on every draw and never kept around afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeSample {
    /// From 0 to 11, where 0 is twelve o'clock.
    pub hour: u8,

    /// From 0 to 59.
    pub minute: u8,

    /// From 0 to 59.
    pub second: u8,
}

impl TimeSample {
    /// Creates a new sample, wrapping every field into its range.
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour: hour % 12,
            minute: minute % 60,
            second: second % 60,
        }
    }

    /// Reads the relevant fields out of anything [`chrono`] considers a time of day.
    pub fn of(time: &impl Timelike) -> Self {
        let (_, hour) = time.hour12();

        // `hour12` goes from 1 to 12, but the dial starts at 0.
        Self::new(hour as u8, time.minute() as u8, time.second() as u8)
    }
}

impl fmt::Display for TimeSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = if self.hour == 0 { 12 } else { self.hour };
        write!(f, "{hour:02}:{:02}:{:02}", self.minute, self.second)
    }
}

/// Parses `HH:MM:SS` or `HH:MM` into a [`TimeSample`].
///
/// Hours are accepted in 24 hour form, and folded onto the dial.
pub fn parse(src: &str) -> Result<TimeSample, chrono::ParseError> {
    let time = NaiveTime::parse_from_str(src, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(src, "%H:%M"))?;

    Ok(TimeSample::of(&time))
}

/// Something that can be asked what time it is.
pub trait Source: Send {
    /// Takes a fresh reading.
    fn sample(&self) -> TimeSample;
}

/// The host's local wall-clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct Local;

impl Source for Local {
    fn sample(&self) -> TimeSample {
        TimeSample::of(&chrono::Local::now())
    }
}

/// A clock that's been stopped at a specific time.
#[derive(Debug, Clone, Copy)]
pub struct Fixed(pub TimeSample);

impl Source for Fixed {
    fn sample(&self) -> TimeSample {
        self.0
    }
}
