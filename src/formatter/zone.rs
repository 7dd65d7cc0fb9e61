//! UTC-offset and timezone-name rendering.

use std::fmt::Write;

use super::value::Moment;

// Shared by the ±HH:MM and ±HHMM tokens.
fn offset_parts(offset_minutes: i32) -> (char, i32, i32) {
    let sign = if offset_minutes >= 0 { '+' } else { '-' };
    let magnitude = offset_minutes.abs();
    (sign, magnitude / 60, magnitude % 60)
}

/// UTC offset as `±HH:MM`.
pub fn offset_colon(offset_minutes: i32) -> String {
    let (sign, hours, minutes) = offset_parts(offset_minutes);
    format!("{sign}{hours:02}:{minutes:02}")
}

/// UTC offset as `±HHMM`.
pub fn offset_basic(offset_minutes: i32) -> String {
    let (sign, hours, minutes) = offset_parts(offset_minutes);
    format!("{sign}{hours:02}{minutes:02}")
}

/// Timezone abbreviation: the host-supplied short name when known, otherwise
/// "UTC" for a zero offset and "GMT±H[:MM]" for anything else.
pub fn zone_abbreviation(moment: &Moment) -> String {
    if let Some(abbreviation) = &moment.zone.abbreviation {
        return abbreviation.clone();
    }
    if moment.offset_minutes == 0 {
        return "UTC".to_string();
    }
    let (sign, hours, minutes) = offset_parts(moment.offset_minutes);
    let mut out = format!("GMT{sign}{hours}");
    if minutes != 0 {
        let _ = write!(out, ":{minutes:02}");
    }
    out
}

/// Timezone identifier: the IANA name when known, otherwise the abbreviation.
pub fn zone_identifier(moment: &Moment) -> String {
    match &moment.zone.id {
        Some(id) => id.clone(),
        None => zone_abbreviation(moment),
    }
}

/// 1 when the instant observes daylight saving time, 0 otherwise.
///
/// A zone observes DST in a given year when its January 1 and July 1 offsets
/// differ; the instant is in DST when its own offset equals the larger of
/// the two.
pub fn dst_flag(moment: &Moment) -> u8 {
    let january = moment.zone.january_offset.unwrap_or(moment.offset_minutes);
    let july = moment.zone.july_offset.unwrap_or(moment.offset_minutes);
    if january == july {
        return 0;
    }
    (moment.offset_minutes == january.max(july)) as u8
}
