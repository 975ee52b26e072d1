/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub enum InstantParseError {
    Invalid(Cow<'static, str>),
    IntParseError,
}

impl fmt::Display for InstantParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstantParseError::Invalid(msg) => write!(f, "invalid timestamp: {}", msg),
            InstantParseError::IntParseError => write!(f, "failed to parse integer in timestamp"),
        }
    }
}

impl std::error::Error for InstantParseError {}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DateTimeFormatError {
    seconds: i64,
}

impl DateTimeFormatError {
    pub(super) fn new(seconds: i64) -> Self {
        DateTimeFormatError { seconds }
    }
}

impl fmt::Display for DateTimeFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} seconds since the epoch cannot be represented as a date-time",
            self.seconds
        )
    }
}

impl std::error::Error for DateTimeFormatError {}

pub mod date_time {
    use super::InstantParseError;
    use crate::Instant;
    use chrono::DateTime;

    /// Ok: "2019-12-16T23:48:18Z"
    /// Ok: "2019-12-16T23:48:18.52Z"
    /// Ok: "2019-12-16T15:48:18-08:00"
    /// Not Ok: "2019-12-16"
    pub fn parse(s: &str) -> Result<Instant, InstantParseError> {
        let parsed = DateTime::parse_from_rfc3339(s.trim())
            .map_err(|err| InstantParseError::Invalid(err.to_string().into()))?;
        Ok(Instant::from_secs_and_nanos(
            parsed.timestamp(),
            parsed.timestamp_subsec_nanos(),
        ))
    }
}

pub mod epoch_seconds {
    use super::InstantParseError;
    use crate::Instant;

    /// Ok: "1576540098"
    /// Ok: "1576540098.52"
    /// Not Ok: "1576540098.1234567891"
    pub fn parse(s: &str) -> Result<Instant, InstantParseError> {
        let mut parts = s.trim().splitn(2, '.');
        let seconds: i64 = parts
            .next()
            .unwrap_or_default()
            .parse()
            .map_err(|_| InstantParseError::IntParseError)?;
        let nanos = match parts.next() {
            None => 0,
            Some(fraction) if fraction.is_empty() || fraction.len() > 9 => {
                return Err(InstantParseError::Invalid(
                    "fraction must have between 1 and 9 digits".into(),
                ))
            }
            Some(fraction) => {
                if !fraction.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(InstantParseError::IntParseError);
                }
                let digits: u32 = fraction
                    .parse()
                    .map_err(|_| InstantParseError::IntParseError)?;
                digits * 10_u32.pow(9 - fraction.len() as u32)
            }
        };
        Ok(Instant::from_secs_and_nanos(seconds, nanos))
    }
}

#[cfg(test)]
mod test {
    use super::{date_time, epoch_seconds, InstantParseError};
    use crate::instant::Format;
    use crate::Instant;
    use proptest::prelude::*;

    #[test]
    fn parse_date_time() {
        assert_eq!(
            date_time::parse("2019-12-16T23:48:18Z"),
            Ok(Instant::from_epoch_seconds(1576540098))
        );
        assert_eq!(
            date_time::parse("2019-12-16T23:48:18.52Z"),
            Ok(Instant::from_secs_and_nanos(1576540098, 520_000_000))
        );
        assert_eq!(
            date_time::parse("2019-12-16T15:48:18-08:00"),
            Ok(Instant::from_epoch_seconds(1576540098))
        );
        assert!(matches!(
            date_time::parse("2019-12-16"),
            Err(InstantParseError::Invalid(_))
        ));
    }

    #[test]
    fn parse_epoch_seconds() {
        assert_eq!(
            epoch_seconds::parse("1576540098"),
            Ok(Instant::from_epoch_seconds(1576540098))
        );
        assert_eq!(
            epoch_seconds::parse("1576540098.52"),
            Ok(Instant::from_secs_and_nanos(1576540098, 520_000_000))
        );
        assert_eq!(
            epoch_seconds::parse("15765x"),
            Err(InstantParseError::IntParseError)
        );
        assert!(epoch_seconds::parse("1.").is_err());
        assert!(epoch_seconds::parse("1.1234567891").is_err());
        assert_eq!(
            epoch_seconds::parse("1.+5"),
            Err(InstantParseError::IntParseError)
        );
    }

    proptest! {
        #[test]
        fn date_time_round_trip(seconds in 0i64..253_402_300_799, nanos in 0u32..1_000_000_000) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            let formatted = instant.fmt(Format::DateTime).unwrap();
            prop_assert_eq!(Instant::from_str(&formatted, Format::DateTime), Ok(instant));
        }

        #[test]
        fn epoch_seconds_round_trip(seconds in 0i64..i64::MAX, nanos in 0u32..1_000_000_000) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            let formatted = instant.fmt(Format::EpochSeconds).unwrap();
            prop_assert_eq!(Instant::from_str(&formatted, Format::EpochSeconds), Ok(instant));
        }
    }
}
