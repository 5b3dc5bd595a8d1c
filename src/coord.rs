//! Conversion of NMEA's packed `dddmm.mmmm` coordinates into decimal degrees.

use std::num::ParseFloatError;

use crate::err::{Axis, ParseError};

/// The cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardDir {
    North,
    South,
    East,
    West,
}

impl CardDir {
    /// Accepts exactly `"N"` or `"S"`.
    pub fn latitude(s: &str) -> Result<Self, ParseError> {
        match s {
            "N" => Ok(CardDir::North),
            "S" => Ok(CardDir::South),
            _ => Err(ParseError::InvalidHemisphere(Axis::Latitude, s.to_owned())),
        }
    }

    /// Accepts exactly `"E"` or `"W"`.
    pub fn longitude(s: &str) -> Result<Self, ParseError> {
        match s {
            "E" => Ok(CardDir::East),
            "W" => Ok(CardDir::West),
            _ => Err(ParseError::InvalidHemisphere(Axis::Longitude, s.to_owned())),
        }
    }

    #[inline]
    fn get_sign(self) -> f64 {
        match self {
            CardDir::North | CardDir::East => 1.0,
            CardDir::South | CardDir::West => -1.0,
        }
    }
}

/// Converts `raw`, a coordinate where the integer part of `value / 100` are
/// the degrees and the remainder are the minutes, to signed decimal degrees.
///
/// A coordinate in the southern or western hemisphere is negative. No range
/// check is done; `dir` has to be validated by the caller already.
///
/// ```
/// use sextant::coord::{to_decimal_degrees, CardDir};
///
/// let lat = to_decimal_degrees("4916.45", CardDir::North).unwrap();
/// assert!((lat - 49.274166).abs() < 1e-6);
/// ```
pub fn to_decimal_degrees(raw: &str, dir: CardDir) -> Result<f64, ParseFloatError> {
    let value = raw.parse::<f64>()?;
    let degrees = (value / 100.0).trunc();
    let minutes = value - degrees * 100.0;
    let dec_deg = degrees + minutes / 60.0;

    // `-0.0 == 0.0`, but a negative zero must never leak out
    if dec_deg == 0.0 {
        return Ok(0.0);
    }
    Ok(dec_deg * dir.get_sign())
}
