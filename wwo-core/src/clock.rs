//! Local clock encodings used by the provider.
//!
//! The API reports times of day in two different shapes: astronomy, tide and
//! observation times as 12-hour strings (`"3:04 PM"`), and hourly sample slots
//! as bare integers (`930`, `1830`). Both are exposed as an offset from local
//! midnight.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, TimeDelta, Timelike};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// A text value that does not match the encoding of the type it was decoded into.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{value:?} is not a valid {expected}")]
pub struct ScalarError {
    pub value: String,
    pub expected: &'static str,
}

impl ScalarError {
    pub fn new(value: &str, expected: &'static str) -> Self {
        Self { value: value.to_owned(), expected }
    }
}

/// A 12-hour local clock time that may be reported as not happening at all
/// (`"No moonrise"`, `"No sunset"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTime {
    /// Offset from local midnight.
    At(TimeDelta),
    /// The event does not occur on this day.
    DoesNotOccur,
}

impl EventTime {
    pub fn since_midnight(&self) -> Option<TimeDelta> {
        match self {
            EventTime::At(delta) => Some(*delta),
            EventTime::DoesNotOccur => None,
        }
    }

    pub fn occurs(&self) -> bool {
        matches!(self, EventTime::At(_))
    }

    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        let seconds = u32::try_from(self.since_midnight()?.num_seconds()).ok()?;
        NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
    }
}

impl Default for EventTime {
    fn default() -> Self {
        EventTime::At(TimeDelta::zero())
    }
}

impl FromStr for EventTime {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("No ") {
            return Ok(EventTime::DoesNotOccur);
        }

        let time = NaiveTime::parse_from_str(s.trim(), "%I:%M %p")
            .map_err(|_| ScalarError::new(s, "12-hour clock time"))?;

        Ok(EventTime::At(TimeDelta::seconds(i64::from(time.num_seconds_from_midnight()))))
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventTime::At(delta) => write_hour_minute(f, *delta),
            EventTime::DoesNotOccur => f.write_str("none"),
        }
    }
}

impl Serialize for EventTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EventTime::At(_) => serializer.collect_str(self),
            EventTime::DoesNotOccur => serializer.serialize_none(),
        }
    }
}

/// A local clock time encoded as an `HMM`/`HHMM` integer, e.g. `930` for 09:30.
///
/// The two halves are taken as given: `960` is 9 hours plus 60 minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HmmTime(TimeDelta);

impl HmmTime {
    /// Largest encoded value the provider can send (12 bits).
    pub const MAX_ENCODED: u16 = 4095;

    pub fn from_encoded(value: u16) -> Option<Self> {
        if value > Self::MAX_ENCODED {
            return None;
        }
        let (hours, minutes) = (i64::from(value / 100), i64::from(value % 100));
        Some(HmmTime(TimeDelta::minutes(hours * 60 + minutes)))
    }

    pub fn since_midnight(&self) -> TimeDelta {
        self.0
    }
}

impl FromStr for HmmTime {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u16>()
            .ok()
            .and_then(HmmTime::from_encoded)
            .ok_or_else(|| ScalarError::new(s, "HMM clock time"))
    }
}

impl fmt::Display for HmmTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hour_minute(f, self.0)
    }
}

impl Serialize for HmmTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn write_hour_minute(f: &mut fmt::Formatter<'_>, delta: TimeDelta) -> fmt::Result {
    let minutes = delta.num_minutes();
    write!(f, "{:02}:{:02}", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(s: &str) -> EventTime {
        s.parse().expect("valid 12-hour time")
    }

    #[test]
    fn twelve_hour_times_convert_to_24_hour() {
        assert_eq!(event("3:04 PM").to_string(), "15:04");
        assert_eq!(event("12:00 AM").to_string(), "00:00");
        assert_eq!(event("12:30 PM").to_string(), "12:30");
        assert_eq!(event("07:45 AM").to_string(), "07:45");
        assert_eq!(event("11:59 PM").to_string(), "23:59");
    }

    #[test]
    fn every_valid_twelve_hour_time_matches_standard_conversion() {
        for hour in 1..=12u32 {
            for minute in [0u32, 1, 15, 30, 59] {
                for (suffix, pm) in [("AM", false), ("PM", true)] {
                    let text = format!("{hour}:{minute:02} {suffix}");
                    let expected_hour = match (hour, pm) {
                        (12, false) => 0,
                        (12, true) => 12,
                        (h, false) => h,
                        (h, true) => h + 12,
                    };
                    assert_eq!(
                        event(&text).to_string(),
                        format!("{expected_hour:02}:{minute:02}"),
                        "converting {text}"
                    );
                }
            }
        }
    }

    #[test]
    fn no_event_sentinel_is_not_midnight() {
        for text in ["No moonrise", "No moonset", "No sunrise", "No sunset"] {
            let t = event(text);
            assert_eq!(t, EventTime::DoesNotOccur);
            assert_ne!(t, event("12:00 AM"));
            assert_eq!(t.since_midnight(), None);
            assert!(!t.occurs());
        }
    }

    #[test]
    fn malformed_twelve_hour_time_is_rejected() {
        for text in ["", "15:04", "3:04", "noon", "13:00 PM"] {
            let err = text.parse::<EventTime>().unwrap_err();
            assert_eq!(err.expected, "12-hour clock time");
        }
    }

    #[test]
    fn event_time_to_naive_time() {
        assert_eq!(event("6:05 AM").to_naive_time(), NaiveTime::from_hms_opt(6, 5, 0));
        assert_eq!(EventTime::DoesNotOccur.to_naive_time(), None);
    }

    #[test]
    fn hmm_encodings_split_hours_and_minutes() {
        for v in 0..=2359u32 {
            if v % 100 >= 60 {
                continue;
            }
            let t: HmmTime = v.to_string().parse().expect("valid HMM value");
            let expected = TimeDelta::hours(i64::from(v / 100)) + TimeDelta::minutes(i64::from(v % 100));
            assert_eq!(t.since_midnight(), expected, "decoding {v}");
        }

        assert_eq!("930".parse::<HmmTime>().unwrap().to_string(), "09:30");
        assert_eq!("0".parse::<HmmTime>().unwrap().to_string(), "00:00");
        assert_eq!("2359".parse::<HmmTime>().unwrap().to_string(), "23:59");
        assert_eq!("1830".parse::<HmmTime>().unwrap().to_string(), "18:30");
    }

    #[test]
    fn hmm_minutes_past_59_carry_into_the_hour() {
        assert_eq!("960".parse::<HmmTime>().unwrap().to_string(), "10:00");
        assert_eq!("2401".parse::<HmmTime>().unwrap().to_string(), "24:01");
        assert_eq!("4095".parse::<HmmTime>().unwrap().since_midnight(), TimeDelta::minutes(40 * 60 + 95));
    }

    #[test]
    fn hmm_rejects_values_outside_twelve_bits() {
        for text in ["4096", "65536", "4294967295", "-100", "abc", ""] {
            assert!(text.parse::<HmmTime>().is_err(), "{text:?} should not decode");
        }
    }

    #[test]
    fn clock_types_serialize_as_hour_minute() {
        let json = serde_json::to_string(&event("9:07 PM")).unwrap();
        assert_eq!(json, "\"21:07\"");

        let json = serde_json::to_string(&EventTime::DoesNotOccur).unwrap();
        assert_eq!(json, "null");

        let json = serde_json::to_string(&"600".parse::<HmmTime>().unwrap()).unwrap();
        assert_eq!(json, "\"06:00\"");
    }
}
