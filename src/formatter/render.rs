//! The token table: one computation per format character.

use std::fmt::Write;

use crate::constants::{
    BEAT_MERIDIAN_SECONDS, BEATS_PER_DAY, ISO_8601_PATTERN, RFC_2822_PATTERN, SECONDS_PER_DAY,
};
use crate::parser::model::{Token, TokenKind};

use super::calendar::{
    day_of_year, days_in_month, is_leap_year, iso_week, iso_week_year, iso_weekday, weekday,
};
use super::pad::push_zero_padded;
use super::value::Moment;
use super::zone;

pub(crate) struct Names<'a> {
    pub weekdays: &'a [String],
    pub months: &'a [String],
}

pub(crate) fn render_tokens(out: &mut String, tokens: &[Token], moment: &Moment, names: &Names) {
    for token in tokens {
        render_token(out, token, moment, names);
    }
}

fn render_token(out: &mut String, token: &Token, m: &Moment, names: &Names) {
    match token.kind {
        // Day
        TokenKind::DayPadded => push_zero_padded(out, m.day as i64, 2),
        TokenKind::WeekdayAbbrev => {
            push_prefix(out, &names.weekdays[weekday(m.year, m.month, m.day) as usize], 3);
        }
        TokenKind::Day => {
            let _ = write!(out, "{}", m.day);
        }
        TokenKind::WeekdayName => {
            out.push_str(&names.weekdays[weekday(m.year, m.month, m.day) as usize]);
        }
        TokenKind::IsoWeekday => {
            let _ = write!(out, "{}", iso_weekday(m.year, m.month, m.day));
        }
        TokenKind::OrdinalSuffix => out.push_str(match m.day {
            1 | 21 | 31 => "st",
            2 | 22 => "nd",
            3 | 23 => "rd",
            _ => "th",
        }),
        TokenKind::Weekday => {
            let _ = write!(out, "{}", weekday(m.year, m.month, m.day));
        }
        TokenKind::DayOfYear => {
            let _ = write!(out, "{}", day_of_year(m.year, m.month, m.day));
        }

        // Week
        TokenKind::IsoWeek => {
            push_zero_padded(out, iso_week(m.year, m.month, m.day) as i64, 2);
        }

        // Month
        TokenKind::MonthName => out.push_str(&names.months[m.month as usize - 1]),
        TokenKind::MonthPadded => push_zero_padded(out, m.month as i64, 2),
        TokenKind::MonthAbbrev => push_prefix(out, &names.months[m.month as usize - 1], 3),
        TokenKind::Month => {
            let _ = write!(out, "{}", m.month);
        }
        TokenKind::DaysInMonth => {
            let _ = write!(out, "{}", days_in_month(m.month, m.year));
        }

        // Year
        TokenKind::LeapYear => out.push(if is_leap_year(m.year) { '1' } else { '0' }),
        TokenKind::IsoYear => {
            let _ = write!(out, "{}", iso_week_year(m.year, m.month, m.day));
        }
        TokenKind::Year => {
            let _ = write!(out, "{}", m.year);
        }
        TokenKind::YearShort => {
            push_zero_padded(out, m.year.rem_euclid(100) as i64, 2);
        }

        // Time
        TokenKind::AmPmLower => out.push_str(if m.hour < 12 { "am" } else { "pm" }),
        TokenKind::AmPmUpper => out.push_str(if m.hour < 12 { "AM" } else { "PM" }),
        TokenKind::SwatchBeat => {
            let seconds = m.utc_seconds_of_day();
            let mut beats = (seconds + BEAT_MERIDIAN_SECONDS) * BEATS_PER_DAY / SECONDS_PER_DAY;
            if beats >= BEATS_PER_DAY {
                beats -= BEATS_PER_DAY;
            }
            push_zero_padded(out, beats, 3);
        }
        TokenKind::Hour12 => {
            let _ = write!(out, "{}", hour12(m.hour));
        }
        TokenKind::Hour24 => {
            let _ = write!(out, "{}", m.hour);
        }
        TokenKind::Hour12Padded => push_zero_padded(out, hour12(m.hour) as i64, 2),
        TokenKind::Hour24Padded => push_zero_padded(out, m.hour as i64, 2),
        TokenKind::Minute => push_zero_padded(out, m.minute as i64, 2),
        TokenKind::Second => push_zero_padded(out, m.second as i64, 2),
        TokenKind::Microsecond => {
            push_zero_padded(out, m.millisecond as i64, 3);
            out.push_str("000");
        }
        TokenKind::Millisecond => push_zero_padded(out, m.millisecond as i64, 3),

        // Timezone
        TokenKind::ZoneId => out.push_str(&zone::zone_identifier(m)),
        TokenKind::DstFlag => {
            let _ = write!(out, "{}", zone::dst_flag(m));
        }
        TokenKind::OffsetBasic => out.push_str(&zone::offset_basic(m.offset_minutes)),
        TokenKind::OffsetColon => out.push_str(&zone::offset_colon(m.offset_minutes)),
        TokenKind::ZoneAbbrev => out.push_str(&zone::zone_abbreviation(m)),
        TokenKind::OffsetSeconds => {
            let _ = write!(out, "{}", m.offset_minutes as i64 * 60);
        }

        // Full date/time
        TokenKind::Iso8601 => render_sub_pattern(out, ISO_8601_PATTERN, m, names),
        TokenKind::Rfc2822 => render_sub_pattern(out, RFC_2822_PATTERN, m, names),
        TokenKind::Epoch => {
            let _ = write!(out, "{}", m.epoch_millis().div_euclid(1_000));
        }

        TokenKind::Escaped | TokenKind::Literal => {
            if let Some(ch) = token.literal_char() {
                out.push(ch);
            }
        }
    }
}

fn hour12(hour: u8) -> u8 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

// First `len` characters of a name, for the three-letter abbreviations.
fn push_prefix(out: &mut String, name: &str, len: usize) {
    out.extend(name.chars().take(len));
}

fn render_sub_pattern(out: &mut String, pattern: &str, moment: &Moment, names: &Names) {
    let parsed = super::prepare_pattern(pattern);
    render_tokens(out, &parsed.tokens, moment, names);
}
