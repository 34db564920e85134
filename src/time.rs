use chrono::{DateTime, TimeZone, Utc};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Deref;

/// Custom time type that wraps chrono::DateTime and provides the JSON
/// serialization used by the Feedly API: an integer count of milliseconds
/// since the Unix epoch.
///
/// Decoding truncates to whole seconds, so `encode(decode(m))` yields
/// `m - m % 1000`. The API never relies on sub-second precision and the
/// truncation matches the wire format exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Time(pub DateTime<Utc>);

impl Time {
    /// Create a new Time from a DateTime
    pub fn new(dt: DateTime<Utc>) -> Self {
        Time(dt)
    }

    /// Create a Time from a millisecond epoch timestamp, truncated to whole
    /// seconds. Values beyond the representable range saturate.
    pub fn from_unix_milli(ms: i64) -> Self {
        Self::from_unix(ms.div_euclid(1000))
    }

    /// Create a Time from a second epoch timestamp. Values beyond the
    /// representable range saturate.
    pub fn from_unix(secs: i64) -> Self {
        match Utc.timestamp_opt(secs, 0).single() {
            Some(dt) => Time(dt),
            None if secs < 0 => Time(DateTime::<Utc>::MIN_UTC),
            None => Time(DateTime::<Utc>::MAX_UTC),
        }
    }

    /// Get the unix timestamp in seconds
    pub fn unix(&self) -> i64 {
        self.0.timestamp()
    }

    /// Get the wire representation: unix seconds multiplied back to milliseconds
    pub fn unix_milli(&self) -> i64 {
        self.unix() * 1000
    }
}

impl Deref for Time {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DateTime<Utc>> for Time {
    fn from(dt: DateTime<Utc>) -> Self {
        Time(dt)
    }
}

impl From<Time> for DateTime<Utc> {
    fn from(t: Time) -> Self {
        t.0
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").fmt(f)
    }
}

impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.unix_milli())
    }
}

/// Decode-path conversion: an out-of-range wire value is a decode error,
/// never a panic or a silently saturated timestamp.
fn millis_to_time<E: de::Error>(ms: i64) -> Result<Time, E> {
    Utc.timestamp_opt(ms.div_euclid(1000), 0)
        .single()
        .map(Time)
        .ok_or_else(|| E::custom(format!("millisecond timestamp {} is out of range", ms)))
}

struct MillisVisitor;

impl<'de> de::Visitor<'de> for MillisVisitor {
    type Value = Time;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer count of milliseconds since the Unix epoch")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Time, E> {
        millis_to_time(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Time, E> {
        let ms = i64::try_from(v)
            .map_err(|_| E::custom(format!("millisecond timestamp {} is out of range", v)))?;
        millis_to_time(ms)
    }

    // Generic JSON decoding may hand timestamps over as floats
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Time, E> {
        if !v.is_finite() {
            return Err(E::custom(format!(
                "millisecond timestamp {} is not an integer",
                v
            )));
        }

        // Float-to-int casts saturate, so out-of-range values fall through
        // to the range check in millis_to_time
        millis_to_time(v as i64)
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_i64(MillisVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_truncates_to_whole_seconds() {
        let time: Time = serde_json::from_str("1609459200747").unwrap();
        assert_eq!(time.unix(), 1609459200);
        assert_eq!(time.timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn test_encode_is_seconds_times_thousand() {
        let time = Time::from_unix(1609459200);
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, "1609459200000");
    }

    #[test]
    fn test_round_trip_drops_millisecond_remainder() {
        for m in [0i64, 999, 1000, 1609459200747, 1597242491000] {
            let time: Time = serde_json::from_value(serde_json::json!(m)).unwrap();
            assert_eq!(time.unix_milli(), m - m % 1000);
        }
    }

    #[test]
    fn test_decode_of_encoded_whole_second_is_identity() {
        let time = Time::from_unix(1597242491);
        let json = serde_json::to_value(time).unwrap();
        let back: Time = serde_json::from_value(json).unwrap();
        assert_eq!(back, time);
    }

    #[test]
    fn test_null_decodes_to_none() {
        let result: Option<Time> = serde_json::from_str("null").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_non_integer_is_an_error() {
        let result: Result<Time, _> = serde_json::from_str("\"2021-01-01\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_range_integer_is_an_error() {
        // Fits in i64 but far beyond the representable date range
        let result: Result<Time, _> = serde_json::from_str("9000000000000000000");
        assert!(result.is_err());
    }

    #[test]
    fn test_integer_beyond_i64_is_an_error() {
        let result: Result<Time, _> = serde_json::from_str("10000000000000000000");
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_range_float_is_an_error() {
        let result: Result<Time, _> = serde_json::from_str("1e300");
        assert!(result.is_err());
    }

    #[test]
    fn test_constructors_saturate_out_of_range_values() {
        assert_eq!(Time::from_unix(i64::MAX), Time::new(DateTime::<Utc>::MAX_UTC));
        assert_eq!(Time::from_unix(i64::MIN), Time::new(DateTime::<Utc>::MIN_UTC));
        assert_eq!(
            Time::from_unix_milli(i64::MAX),
            Time::new(DateTime::<Utc>::MAX_UTC)
        );
    }
}
