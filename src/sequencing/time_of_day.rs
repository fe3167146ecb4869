use std::fmt;
use std::str::FromStr;

use chrono::Timelike;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{RepeaterError, Result};

pub const MINUTES_PER_QUARTER: u8 = 15;

const MAX_HOUR24: u32 = 23;
const MAX_MINUTE: u32 = 59;

/// A wall-clock reading at minute resolution.
///
/// Always holds a valid time: construction goes through [`TimeOfDay::new`],
/// `HH:MM` parsing, or a chrono value whose fields are already in range.
/// With the `serde` feature it travels as its `HH:MM` string, so deserializing
/// is validated the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct TimeOfDay {
    hour24: u8,
    minute: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour24: 0,
        minute: 0,
    };

    pub const NOON: TimeOfDay = TimeOfDay {
        hour24: 12,
        minute: 0,
    };

    /// Validate and build a time from a 24-hour clock reading
    pub fn new(hour24: u32, minute: u32) -> Result<Self> {
        if hour24 > MAX_HOUR24 {
            return Err(RepeaterError::InvalidInput {
                field: "hour24",
                value: hour24,
                max: MAX_HOUR24,
            });
        }
        if minute > MAX_MINUTE {
            return Err(RepeaterError::InvalidInput {
                field: "minute",
                value: minute,
                max: MAX_MINUTE,
            });
        }

        Ok(Self {
            hour24: hour24 as u8,
            minute: minute as u8,
        })
    }

    /// Read the hour and minute off any chrono time value
    pub fn from_timelike<T: Timelike>(time: &T) -> Self {
        Self {
            hour24: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }

    pub fn hour24(&self) -> u8 {
        self.hour24
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Hour on a 12-hour dial, in 1..=12.
    ///
    /// Midnight and noon both read as 12.
    pub fn hour12(&self) -> u8 {
        let hour = if self.hour24 > 12 {
            self.hour24 - 12
        } else {
            self.hour24
        };
        if hour == 0 {
            12
        } else {
            hour
        }
    }

    /// Completed quarter-hours, in 0..=3
    pub fn quarters(&self) -> u8 {
        self.minute / MINUTES_PER_QUARTER
    }

    /// Minutes since the last quarter, in 0..=14
    pub fn minutes_past_quarter(&self) -> u8 {
        self.minute % MINUTES_PER_QUARTER
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour24, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = RepeaterError;

    /// Parse `H:MM` or `HH:MM` on a 24-hour clock
    fn from_str(s: &str) -> Result<Self> {
        let unparseable = || RepeaterError::Unparseable {
            input: s.to_owned(),
        };

        let (hour, minute) = s.trim().split_once(':').ok_or_else(unparseable)?;
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !(1..=2).contains(&hour.len()) || minute.len() != 2 {
            return Err(unparseable());
        }
        if !all_digits(hour) || !all_digits(minute) {
            return Err(unparseable());
        }
        let hour: u32 = hour.parse().map_err(|_| unparseable())?;
        let minute: u32 = minute.parse().map_err(|_| unparseable())?;

        Self::new(hour, minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = RepeaterError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            TimeOfDay::new(24, 0),
            Err(RepeaterError::InvalidInput {
                field: "hour24",
                value: 24,
                max: 23
            })
        );
        assert_eq!(
            TimeOfDay::new(0, 60),
            Err(RepeaterError::InvalidInput {
                field: "minute",
                value: 60,
                max: 59
            })
        );
        assert!(TimeOfDay::new(23, 59).is_ok());
    }

    #[test]
    fn test_hour12_conversion() {
        let hour12 = |h| TimeOfDay::new(h, 0).unwrap().hour12();

        assert_eq!(hour12(0), 12); // midnight
        assert_eq!(hour12(12), 12); // noon
        assert_eq!(hour12(13), 1);
        assert_eq!(hour12(1), 1);
        assert_eq!(hour12(23), 11);

        assert_eq!(TimeOfDay::MIDNIGHT, TimeOfDay::new(0, 0).unwrap());
        assert_eq!(TimeOfDay::NOON, TimeOfDay::new(12, 0).unwrap());
        assert_eq!(TimeOfDay::MIDNIGHT.hour12(), TimeOfDay::NOON.hour12());

        for h in 0..24 {
            assert!((1..=12).contains(&hour12(h)), "hour24={h}");
        }
    }

    #[test]
    fn test_quarter_split_round_trips() {
        for m in 0..60 {
            let time = TimeOfDay::new(3, m).unwrap();
            assert!(time.quarters() <= 3);
            assert!(time.minutes_past_quarter() <= 14);
            assert_eq!(
                time.quarters() as u32 * 15 + time.minutes_past_quarter() as u32,
                m
            );
        }
    }

    #[test]
    fn test_parse_and_display() {
        let time: TimeOfDay = "4:59".parse().unwrap();
        assert_eq!((time.hour24(), time.minute()), (4, 59));
        assert_eq!(time.to_string(), "04:59");

        assert_eq!(" 23:45 ".parse::<TimeOfDay>().unwrap().to_string(), "23:45");
        assert!(matches!(
            "12".parse::<TimeOfDay>(),
            Err(RepeaterError::Unparseable { .. })
        ));
        assert!(matches!(
            "12:5".parse::<TimeOfDay>(),
            Err(RepeaterError::Unparseable { .. })
        ));
        let malformed = [
            "+4:59", "004:59", "4:+9", "-1:30", "4:5 ", ":30", "4:-5", "٤:59",
        ];
        for malformed in malformed {
            assert!(
                matches!(
                    malformed.parse::<TimeOfDay>(),
                    Err(RepeaterError::Unparseable { .. })
                ),
                "{malformed:?}"
            );
        }
        assert_eq!("0:00".parse::<TimeOfDay>().unwrap(), TimeOfDay::MIDNIGHT);
        assert_eq!("12:00".parse::<TimeOfDay>().unwrap(), TimeOfDay::NOON);
        assert!(matches!(
            "25:00".parse::<TimeOfDay>(),
            Err(RepeaterError::InvalidInput { field: "hour24", .. })
        ));
    }

    #[test]
    fn test_string_form_is_validated() {
        let time = TimeOfDay::try_from(String::from("7:05")).unwrap();
        assert_eq!(String::from(time), "07:05");
        assert_eq!(TimeOfDay::try_from(String::from(time)), Ok(time));

        assert!(matches!(
            TimeOfDay::try_from(String::from("+7:05")),
            Err(RepeaterError::Unparseable { .. })
        ));
        assert!(matches!(
            TimeOfDay::try_from(String::from("07:60")),
            Err(RepeaterError::InvalidInput { field: "minute", .. })
        ));
    }

    #[test]
    fn test_from_chrono() {
        let naive = chrono::NaiveTime::from_hms_opt(13, 7, 42).unwrap();
        let time = TimeOfDay::from_timelike(&naive);
        assert_eq!(time, TimeOfDay::new(13, 7).unwrap());
        assert_eq!(time.hour12(), 1);
    }
}
