/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

mod format;

pub use format::{DateTimeFormatError, InstantParseError};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A point in time, stored as seconds and nanoseconds relative to the Unix epoch.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: (fraction * NANOS_PER_SECOND as f64) as u32,
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds, rem)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                if duration.subsec_nanos() == 0 {
                    Instant::from_epoch_seconds(-(duration.as_secs() as i64))
                } else {
                    Instant {
                        seconds: -(duration.as_secs() as i64) - 1,
                        subsecond_nanos: NANOS_PER_SECOND - duration.subsec_nanos(),
                    }
                }
            }
        }
    }

    pub fn from_str(s: &str, format: Format) -> Result<Self, InstantParseError> {
        match format {
            Format::DateTime => format::date_time::parse(s),
            Format::EpochSeconds => format::epoch_seconds::parse(s),
        }
    }

    fn to_chrono(self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.seconds, self.subsecond_nanos)
            .single()
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn epoch_subsecond_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Formats the instant. Fails only for `DateTime` when the instant falls outside of the
    /// range of years a date-time string can represent.
    pub fn fmt(&self, format: Format) -> Result<String, DateTimeFormatError> {
        match format {
            Format::DateTime => {
                let rfc3339 = self
                    .to_chrono()
                    .ok_or_else(|| DateTimeFormatError::new(self.seconds))?
                    .to_rfc3339_opts(SecondsFormat::AutoSi, true);
                if !rfc3339.contains('.') {
                    return Ok(rfc3339);
                }
                // AutoSi pads fractions to millis/micros/nanos; trim back to the significant digits
                let mut trimmed = rfc3339
                    .trim_end_matches('Z')
                    .trim_end_matches('0')
                    .to_owned();
                trimmed.push('Z');
                Ok(trimmed)
            }
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    Ok(format!("{}", self.seconds))
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    Ok(format!(
                        "{}.{}",
                        self.seconds,
                        fraction.trim_end_matches('0')
                    ))
                }
            }
        }
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Instant::fmt(self, Format::DateTime) {
            Ok(formatted) => f.write_str(&formatted),
            Err(_) => write!(f, "{}s", self.seconds),
        }
    }
}

/// Wire representation of a timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC 3339 / ISO 8601 date-time string, eg. `2019-12-16T23:48:18.52Z`
    DateTime,
    /// Seconds since the Unix epoch with an optional fraction, eg. `1576540098.52`
    EpochSeconds,
}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn whole_seconds_keep_trailing_zero_digits() {
        let instant = Instant::from_epoch_seconds(1576540100);
        assert_eq!(
            instant.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:20Z"
        );
    }

    #[test]
    fn system_time_before_epoch() {
        let instant = Instant::from_system_time(UNIX_EPOCH - Duration::from_millis(1500));
        assert_eq!(instant.epoch_seconds(), -2);
        assert_eq!(instant.epoch_subsecond_nanos(), 500_000_000);
        assert_eq!(instant.epoch_fractional_seconds(), -1.5);
    }

    #[test]
    fn out_of_range_date_time_fails_to_format() {
        let instant = Instant::from_epoch_seconds(i64::MAX);
        assert!(instant.fmt(Format::DateTime).is_err());
        assert_eq!(
            instant.fmt(Format::EpochSeconds).unwrap(),
            i64::MAX.to_string()
        );
    }

    #[test]
    fn display_uses_date_time() {
        assert_eq!(
            Instant::from_epoch_seconds(0).to_string(),
            "1970-01-01T00:00:00Z"
        );
    }
}
