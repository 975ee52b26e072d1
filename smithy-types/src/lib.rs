/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod error;
pub mod instant;

use std::convert::TryFrom;
use std::fmt;

pub use crate::error::GenericError;
pub use crate::instant::Instant;

/// A number type that implements Javascript / JSON semantics, modeled on serde_json:
/// https://docs.serde.rs/src/serde_json/number.rs.html#20-22
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

impl Number {
    /// Converts to an `f64`. Integers too large for the mantissa lose precision.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::PosInt(v) => v as f64,
            Number::NegInt(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

/// The number could not be represented by the requested integer type.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TryFromNumberError {
    OutsideIntegerRange(std::num::TryFromIntError),
    FloatToIntegerLossyConversion(f64),
}

impl fmt::Display for TryFromNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TryFromNumberError::OutsideIntegerRange(err) => {
                write!(f, "integer too large for target type: {}", err)
            }
            TryFromNumberError::FloatToIntegerLossyConversion(v) => write!(
                f,
                "cannot convert floating point number {} into an integer",
                v
            ),
        }
    }
}

impl std::error::Error for TryFromNumberError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TryFromNumberError::OutsideIntegerRange(err) => Some(err),
            TryFromNumberError::FloatToIntegerLossyConversion(_) => None,
        }
    }
}

impl From<std::num::TryFromIntError> for TryFromNumberError {
    fn from(err: std::num::TryFromIntError) -> Self {
        TryFromNumberError::OutsideIntegerRange(err)
    }
}

impl TryFrom<Number> for i64 {
    type Error = TryFromNumberError;

    fn try_from(value: Number) -> Result<Self, Self::Error> {
        match value {
            Number::PosInt(v) => Ok(i64::try_from(v)?),
            Number::NegInt(v) => Ok(v),
            Number::Float(v) => Err(TryFromNumberError::FloatToIntegerLossyConversion(v)),
        }
    }
}

impl TryFrom<Number> for i32 {
    type Error = TryFromNumberError;

    fn try_from(value: Number) -> Result<Self, Self::Error> {
        match value {
            Number::PosInt(v) => Ok(i32::try_from(v)?),
            Number::NegInt(v) => Ok(i32::try_from(v)?),
            Number::Float(v) => Err(TryFromNumberError::FloatToIntegerLossyConversion(v)),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::instant::Format;
    use crate::{Instant, Number, TryFromNumberError};
    use std::convert::TryFrom;

    #[test]
    fn test_instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(
            instant.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18Z"
        );
        assert_eq!(instant.fmt(Format::EpochSeconds).unwrap(), "1576540098");

        let instant = Instant::from_fractional_seconds(1576540098, 0.52);
        assert_eq!(
            instant.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18.52Z"
        );
        assert_eq!(instant.fmt(Format::EpochSeconds).unwrap(), "1576540098.52");
    }

    #[test]
    fn integer_conversions() {
        assert_eq!(Ok(5), i32::try_from(Number::PosInt(5)));
        assert_eq!(Ok(-5), i32::try_from(Number::NegInt(-5)));
        assert_eq!(Ok(-5_i64), i64::try_from(Number::NegInt(-5)));
        assert!(matches!(
            i32::try_from(Number::PosInt(u64::MAX)),
            Err(TryFromNumberError::OutsideIntegerRange(_))
        ));
        assert!(matches!(
            i64::try_from(Number::PosInt(u64::MAX)),
            Err(TryFromNumberError::OutsideIntegerRange(_))
        ));
        assert_eq!(
            Err(TryFromNumberError::FloatToIntegerLossyConversion(1.5)),
            i32::try_from(Number::Float(1.5))
        );
    }

    #[test]
    fn float_conversion() {
        assert_eq!(3.0, Number::PosInt(3).to_f64());
        assert_eq!(-3.0, Number::NegInt(-3).to_f64());
        assert_eq!(0.25, Number::Float(0.25).to_f64());
    }
}
