use std::{fmt, io, num};

/// Identifies the sentence field a conversion error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Latitude,
    Longitude,
    Quality,
    Satellites,
    Hdop,
    Altitude,
    GeoidSeparation,
    DgpsAge,
    Day,
    Month,
    Year,
    ZoneHours,
    ZoneMinutes,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::Quality => "quality indicator",
            Field::Satellites => "number of satellites",
            Field::Hdop => "horizontal dilution of precision",
            Field::Altitude => "altitude",
            Field::GeoidSeparation => "geoidal separation",
            Field::DgpsAge => "age of differential data",
            Field::Day => "day",
            Field::Month => "month",
            Field::Year => "year",
            Field::ZoneHours => "local zone hours",
            Field::ZoneMinutes => "local zone minutes",
        };
        f.write_str(name)
    }
}

/// The coordinate axis a hemisphere letter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

quick_error! {
    #[derive(Debug)]
    pub enum ParseError {
        MissingDelimiter {
            display("Sentence does not start with '$'")
        }
        Shape(kind: &'static str) {
            display("Sentence does not match the {} grammar", kind)
        }
        UnexpectedSentenceType(talker: String) {
            display("Encountered unexpected sentence type in \"{}\"", talker)
        }
        FieldCount(expected: usize, found: usize) {
            display("Expected at least {} fields, found {}", expected, found)
        }
        TooManyFields(capacity: usize) {
            display("Sentence has more than {} fields", capacity)
        }
        MalformedTime(raw: String) {
            display("Could not parse \"{}\" as hhmmss.ss", raw)
        }
        MalformedDate(day: u32, month: u32, year: i32) {
            display("{:04}-{:02}-{:02} is not a calendar date", year, month, day)
        }
        InvalidHemisphere(axis: Axis, found: String) {
            display("Invalid {} hemisphere \"{}\"", axis, found)
        }
        InvalidQuality(value: i64) {
            display("Quality indicator {} is outside of 0..=9", value)
        }
        Float(field: Field, err: num::ParseFloatError) {
            display("Could not parse {}: {}", field, err)
            source(err)
        }
        Int(field: Field, err: num::ParseIntError) {
            display("Could not parse {}: {}", field, err)
            source(err)
        }
        Checksum(expected: u8, found: u8) {
            display("Expected checksum \"{:02X}\", found checksum \"{:02X}\"", expected, found)
        }
        Io(err: io::Error) {
            from()
            display("Encountered I/O error while reading sentences: {}", err)
            source(err)
        }
    }
}
