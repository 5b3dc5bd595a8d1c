//! This module provides a parser for the *GGA* sentence of the *NMEA 0183*
//! protocol.
//!
//! ```text
//!                                                      11
//!         1         2       3 4        5 6 7  8   9  10 |  12 13  14
//!         |         |       | |        | | |  |   |   | |   | |   |
//!  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh
//! ```

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::coord::{to_decimal_degrees, CardDir};
use crate::err::{Field, ParseError};
use crate::sentence::{frame, parse_time, split_fields};

/// Number of data fields following the talker id.
const GGA_FIELDS: usize = 14;

/// Indicator of the quality of gps data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpsQualityInd {
    FixNotValid = 0,
    GpsFix = 1,
    DifferentialGpsFix = 2,
    /// Not applicable; some receivers report a PPS fix here.
    Reserved = 3,
    RealTimeKinematic = 4,
    FloatRtk = 5,
    DeadReckoning = 6,
    ManualInputMode = 7,
    SimulationMode = 8,
    Waas = 9,
}

impl GpsQualityInd {
    /// The numeric code as transmitted in the sentence.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<i64> for GpsQualityInd {
    type Error = ParseError;

    /// Takes an integer in the range `0..=9` and returns the corresponding
    /// `GpsQualityInd`.
    /// Else `ParseError::InvalidQuality` is returned.
    fn try_from(int: i64) -> Result<Self, ParseError> {
        match int {
            0 => Ok(GpsQualityInd::FixNotValid),
            1 => Ok(GpsQualityInd::GpsFix),
            2 => Ok(GpsQualityInd::DifferentialGpsFix),
            3 => Ok(GpsQualityInd::Reserved),
            4 => Ok(GpsQualityInd::RealTimeKinematic),
            5 => Ok(GpsQualityInd::FloatRtk),
            6 => Ok(GpsQualityInd::DeadReckoning),
            7 => Ok(GpsQualityInd::ManualInputMode),
            8 => Ok(GpsQualityInd::SimulationMode),
            9 => Ok(GpsQualityInd::Waas),
            _ => Err(ParseError::InvalidQuality(int)),
        }
    }
}

/// This represents a correct GGA sentence and can be created by
/// [`parse_gga`] or [`parse_gga_on`].
#[derive(Debug, Clone, PartialEq)]
pub struct GgaSentence {
    /// Sentence id including the leading `$`, e.g. `$GPGGA`.
    pub id: String,
    /// Time of the fix. GGA only transmits the time of day, the date is
    /// the one given at parse time (see [`parse_gga`]).
    pub utc: DateTime<Utc>,
    /// Latitude in decimal degrees.
    /// A positive value indicates that the coordinate is in the northern hemisphere.
    /// A negative value indicates that the coordinate is in the southern hemisphere.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    /// A positive value indicates that the coordinate is in the eastern hemisphere.
    /// A negative value indicates that the coordinate is in the western hemisphere.
    pub longitude: f64,
    /// Orthometric height above mean-sea-level (geoid) in meters.
    pub altitude: f64,
    /// Indicates the quality of the gps data.
    pub quality: GpsQualityInd,
    /// Number of satellites in use.
    pub satellites: u32,
    /// Horizontal dilution of precision.
    pub hdop: f64,
    /// Geoidal separation, the difference between the WGS-84 earth ellipsoid
    /// and mean-sea-level (geoid), "-" means mean-sea-level below ellipsoid.
    pub geoid_separation: f64,
    /// Age of differential GPS data in seconds, `None` when DGPS is not used.
    pub dgps_age: Option<f64>,
    /// Differential reference station id, nominally `0000`-`4095`.
    /// Kept as transmitted, it is not guaranteed to be numeric.
    pub station_id: Option<String>,
    /// Checksum including the leading `*`. It is not verified.
    pub checksum: String,
}

/// Parse a GGA sentence, dating the fix with the current UTC date.
///
/// GGA carries no date, so a fix received just before midnight and parsed
/// after it is dated a day late. Pair it with a ZDA sentence or use
/// [`parse_gga_on`] with a trusted date if that matters.
pub fn parse_gga(line: &str) -> Result<GgaSentence, ParseError> {
    parse_gga_on(line, Utc::now().date_naive())
}

/// Parse a GGA sentence, dating the fix with `date`.
///
/// `line` has to start with `'$'` and end with the checksum, without a
/// line ending.
pub fn parse_gga_on(line: &str, date: NaiveDate) -> Result<GgaSentence, ParseError> {
    let frame = frame(line, "GGA")?;
    if !frame.talker.ends_with("GGA") {
        return Err(ParseError::UnexpectedSentenceType(frame.talker.to_owned()));
    }

    let fields = split_fields(frame.payload)?;
    if fields.len() < GGA_FIELDS {
        return Err(ParseError::FieldCount(GGA_FIELDS, fields.len()));
    }

    // Parse utc
    let time = parse_time(fields[0])?;
    let utc = Utc.from_utc_datetime(&date.and_time(time));

    // Parse latitude
    let lat_dir = CardDir::latitude(fields[2])?;
    let latitude = to_decimal_degrees(fields[1], lat_dir)
        .map_err(|e| ParseError::Float(Field::Latitude, e))?;

    // Parse longitude
    let long_dir = CardDir::longitude(fields[4])?;
    let longitude = to_decimal_degrees(fields[3], long_dir)
        .map_err(|e| ParseError::Float(Field::Longitude, e))?;

    let quality = GpsQualityInd::try_from(convert!(fields[5], Field::Quality, i64)?)?;
    let satellites = convert!(fields[6], Field::Satellites, u32)?;
    let hdop = convert!(fields[7], Field::Hdop, f64)?;
    // fields[9] and fields[11] are the units of altitude and separation
    let altitude = convert!(fields[8], Field::Altitude, f64)?;
    let geoid_separation = convert!(fields[10], Field::GeoidSeparation, f64)?;

    let dgps_age = convert_opt!(fields[12], Field::DgpsAge, f64)?;
    let station_id = match fields[13] {
        "" => None,
        id => Some(id.to_owned()),
    };

    Ok(GgaSentence {
        id: format!("${}", frame.talker),
        utc,
        latitude,
        longitude,
        altitude,
        quality,
        satellites,
        hdop,
        geoid_separation,
        dgps_age,
        station_id,
        checksum: frame.checksum.to_owned(),
    })
}
