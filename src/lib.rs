//! Strict parsers for the *GGA* (position fix) and *ZDA* (date and time)
//! sentences of the *NMEA 0183* protocol.
//!
//! Every parser takes exactly one line, without line ending, and either
//! returns a complete record or a [`ParseError`] describing the first field
//! that was rejected. Checksums are extracted but only verified on request,
//! see [`checksum`].
//!
//! ```
//! use sextant::{parse_gga, GpsQualityInd};
//!
//! let fix = parse_gga("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47").unwrap();
//! assert_eq!(fix.quality, GpsQualityInd::GpsFix);
//! assert_eq!(fix.dgps_age, None);
//! ```
#[cfg(test)]
#[macro_use]
extern crate assert_matches;
#[macro_use]
extern crate quick_error;

#[macro_use]
mod macros;
pub mod checksum;
pub mod coord;
pub mod epoch;
pub mod err;
pub mod gga;
pub mod reader;
pub mod sentence;
pub mod zda;

pub use checksum::{verify_checksum, ChecksumMode};
pub use err::{Axis, Field, ParseError};
pub use gga::{parse_gga, parse_gga_on, GgaSentence, GpsQualityInd};
pub use reader::{ReaderConfig, SentenceReader};
pub use sentence::{parse_sentence, Sentence};
pub use zda::{parse_zda, ZdaSentence};
