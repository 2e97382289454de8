//! # Fields
//!
//! A field is the exact text of one row of the face, one character per slot. The three rows are
//!
//! - time, four characters: `"0905"` or `" 905"` on a 12 hour clock
//! - date, five characters: weekday then day of month, `"MO 19"`
//! - status, five characters: battery charge then bluetooth, `"07% B"`

use core::fmt;
use core::str::Chars;

use heapless::String;

use crate::error::Error;

/// Text of exactly `W` ASCII characters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixedStr<const W: usize>(String<W>);

impl<const W: usize> FixedStr<W> {
    pub fn new(text: &str) -> Result<Self, Error> {
        if text.len() != W || !text.is_ascii() {
            return Err(Error::FieldWidth {
                expected: W,
                found: text.len(),
            });
        }

        Ok(Self(text.chars().collect()))
    }

    /// Every char must be ASCII
    fn from_chars(chars: [char; W]) -> Self {
        debug_assert!(chars.iter().all(char::is_ascii));
        Self(chars.into_iter().collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn chars(&self) -> Chars<'_> {
        self.0.chars()
    }
}

impl<const W: usize> fmt::Display for FixedStr<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub type TimeField = FixedStr<4>;
pub type DateField = FixedStr<5>;
pub type StatusField = FixedStr<5>;

/// Whether the hour is shown 0-23 or 1-12
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockStyle {
    TwelveHour,
    #[default]
    TwentyFourHour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Weekday from the number of days since Sunday, wrapping past Saturday
    pub const fn from_days_from_sunday(days: u8) -> Self {
        match days % 7 {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }

    pub const fn abbreviation(self) -> [char; 2] {
        match self {
            Weekday::Sunday => ['S', 'U'],
            Weekday::Monday => ['M', 'O'],
            Weekday::Tuesday => ['T', 'U'],
            Weekday::Wednesday => ['W', 'E'],
            Weekday::Thursday => ['T', 'H'],
            Weekday::Friday => ['F', 'R'],
            Weekday::Saturday => ['S', 'A'],
        }
    }
}

fn digit(value: u8) -> char {
    char::from(b'0' + value % 10)
}

/// Hour and minute. The hour is zero padded on a 24 hour clock and space padded on a 12 hour
/// clock.
pub fn format_time(hour: u8, minute: u8, style: ClockStyle) -> TimeField {
    let hour = match style {
        ClockStyle::TwentyFourHour => hour % 24,
        ClockStyle::TwelveHour => match hour % 12 {
            0 => 12,
            h => h,
        },
    };
    let minute = minute % 60;

    let tens = match (style, hour / 10) {
        (ClockStyle::TwelveHour, 0) => ' ',
        (_, tens) => digit(tens),
    };

    FixedStr::from_chars([tens, digit(hour), digit(minute / 10), digit(minute)])
}

/// Weekday abbreviation followed by the day of month, right aligned
pub fn format_date(weekday: Weekday, day: u8) -> DateField {
    let [first, second] = weekday.abbreviation();
    let day = day % 100;

    let tens = match day / 10 {
        0 => ' ',
        tens => digit(tens),
    };

    FixedStr::from_chars([first, second, ' ', tens, digit(day)])
}

/// Battery charge (shown up to 99) and bluetooth state. `blank` hides the charge digits, which
/// is used to blink them while charging.
pub fn format_status(charge: u8, connected: bool, blank: bool) -> StatusField {
    let charge = charge.min(99);
    let bluetooth = if connected { 'B' } else { '-' };

    let (tens, units) = if blank {
        (' ', ' ')
    } else {
        (digit(charge / 10), digit(charge))
    };

    FixedStr::from_chars([tens, units, '%', ' ', bluetooth])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_str_requires_exact_width() {
        assert!(FixedStr::<4>::new("1234").is_ok());
        assert_eq!(
            FixedStr::<4>::new("123"),
            Err(Error::FieldWidth {
                expected: 4,
                found: 3
            })
        );
        assert!(FixedStr::<4>::new("12345").is_err());
        assert!(FixedStr::<4>::new("12é").is_err());
    }

    #[test]
    fn time_is_four_characters() {
        assert_eq!(format_time(9, 5, ClockStyle::TwentyFourHour).as_str(), "0905");
        assert_eq!(format_time(23, 59, ClockStyle::TwentyFourHour).as_str(), "2359");
        assert_eq!(format_time(0, 0, ClockStyle::TwentyFourHour).as_str(), "0000");
    }

    #[test]
    fn twelve_hour_clock_pads_with_space() {
        assert_eq!(format_time(9, 5, ClockStyle::TwelveHour).as_str(), " 905");
        assert_eq!(format_time(21, 30, ClockStyle::TwelveHour).as_str(), " 930");
        assert_eq!(format_time(0, 7, ClockStyle::TwelveHour).as_str(), "1207");
        assert_eq!(format_time(12, 0, ClockStyle::TwelveHour).as_str(), "1200");
    }

    #[test]
    fn date_is_weekday_and_padded_day() {
        assert_eq!(format_date(Weekday::Monday, 19).as_str(), "MO 19");
        assert_eq!(format_date(Weekday::Tuesday, 5).as_str(), "TU  5");
        assert_eq!(format_date(Weekday::from_days_from_sunday(6), 31).as_str(), "SA 31");
    }

    #[test]
    fn status_caps_and_pads_charge() {
        assert_eq!(format_status(100, true, false).as_str(), "99% B");
        assert_eq!(format_status(7, true, false).as_str(), "07% B");
        assert_eq!(format_status(55, false, false).as_str(), "55% -");
    }

    #[test]
    fn charging_blink_blanks_the_digits() {
        assert_eq!(format_status(42, true, true).as_str(), "  % B");
    }
}
