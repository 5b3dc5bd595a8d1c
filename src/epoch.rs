//! Reference epochs for converting sentence timestamps into other time scales.

use chrono::{DateTime, Duration, Utc};

/// Seconds between the NTP epoch (1900-01-01) and the Unix epoch (1970-01-01).
pub const NTP_UNIX_DELTA: i64 = 2_208_988_800;

/// 1900-01-01T00:00:00Z, the epoch of NTP timestamps.
pub fn epoch_ntp_1900() -> DateTime<Utc> {
    epoch_unix_1970() - Duration::seconds(NTP_UNIX_DELTA)
}

/// 1970-01-01T00:00:00Z.
pub fn epoch_unix_1970() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

/// Seconds elapsed since the NTP epoch, including the fraction of a second.
pub fn ntp_seconds(utc: &DateTime<Utc>) -> f64 {
    (utc.timestamp() + NTP_UNIX_DELTA) as f64 + f64::from(utc.timestamp_subsec_nanos()) / 1e9
}
