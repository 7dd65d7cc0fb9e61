use chrono::{Datelike, Offset, TimeZone, Timelike};

use crate::constants::SECONDS_PER_DAY;

use super::calendar::{civil_from_days, days_from_civil};

/// A point in time carrying its local calendar fields and UTC offset.
///
/// The calendar fields describe the instant in its own timezone; the UTC
/// view and the epoch time are derived from them and `offset_minutes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moment {
    pub year: i32,
    /// 1 = January … 12 = December.
    pub month: u8,
    pub day: u8,
    /// 0–23.
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
    /// Local time minus UTC, in minutes; positive east of UTC.
    pub offset_minutes: i32,
    pub zone: ZoneInfo,
}

/// Host timezone facts beyond the instant's own offset. Every field is
/// optional; the formatter degrades to offset-derived renderings for
/// whatever is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneInfo {
    /// IANA identifier, e.g. "Europe/Berlin".
    pub id: Option<String>,
    /// Short name, e.g. "CEST".
    pub abbreviation: Option<String>,
    /// The zone's offset on January 1 of the instant's year, in minutes.
    pub january_offset: Option<i32>,
    /// The zone's offset on July 1 of the instant's year, in minutes.
    pub july_offset: Option<i32>,
}

impl Moment {
    /// Midnight UTC on the given civil date.
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
            offset_minutes: 0,
            zone: ZoneInfo::default(),
        }
    }

    pub fn with_time(mut self, hour: u8, minute: u8, second: u8) -> Self {
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        self
    }

    pub fn with_millisecond(mut self, millisecond: u16) -> Self {
        self.millisecond = millisecond;
        self
    }

    pub fn with_offset(mut self, offset_minutes: i32) -> Self {
        self.offset_minutes = offset_minutes;
        self
    }

    pub fn with_zone(mut self, zone: ZoneInfo) -> Self {
        self.zone = zone;
        self
    }

    /// The UTC instant `millis` milliseconds after the Unix epoch.
    pub fn from_epoch_millis(millis: i64) -> Self {
        Self::from_epoch_millis_with_offset(millis, 0)
    }

    /// The instant `millis` milliseconds after the Unix epoch, with its
    /// calendar fields expressed in a zone `offset_minutes` east of UTC.
    pub fn from_epoch_millis_with_offset(millis: i64, offset_minutes: i32) -> Self {
        let local_millis = millis + offset_minutes as i64 * 60_000;
        let seconds = local_millis.div_euclid(1_000);
        let millisecond = local_millis.rem_euclid(1_000) as u16;
        let days = seconds.div_euclid(SECONDS_PER_DAY);
        let of_day = seconds.rem_euclid(SECONDS_PER_DAY);
        let (year, month, day) = civil_from_days(days);
        Self {
            year,
            month,
            day,
            hour: (of_day / 3_600) as u8,
            minute: (of_day / 60 % 60) as u8,
            second: (of_day % 60) as u8,
            millisecond,
            offset_minutes,
            zone: ZoneInfo::default(),
        }
    }

    /// Milliseconds since the Unix epoch.
    pub fn epoch_millis(&self) -> i64 {
        let days = days_from_civil(self.year, self.month, self.day);
        let local = days * SECONDS_PER_DAY
            + self.hour as i64 * 3_600
            + self.minute as i64 * 60
            + self.second as i64;
        (local - self.offset_minutes as i64 * 60) * 1_000 + self.millisecond as i64
    }

    // Seconds since midnight of the current UTC day.
    pub(crate) fn utc_seconds_of_day(&self) -> i64 {
        self.epoch_millis().div_euclid(1_000).rem_euclid(SECONDS_PER_DAY)
    }
}

impl<Tz: TimeZone> From<&chrono::DateTime<Tz>> for Moment {
    fn from(value: &chrono::DateTime<Tz>) -> Self {
        let tz = value.timezone();
        let zone = ZoneInfo {
            id: None,
            abbreviation: None,
            january_offset: probe_offset(&tz, value.year(), 1),
            july_offset: probe_offset(&tz, value.year(), 7),
        };
        Self {
            year: value.year(),
            month: value.month() as u8,
            day: value.day() as u8,
            hour: value.hour() as u8,
            minute: value.minute() as u8,
            second: value.second() as u8,
            millisecond: (value.timestamp_subsec_millis() % 1_000) as u16,
            offset_minutes: value.offset().fix().local_minus_utc() / 60,
            zone,
        }
    }
}

// The zone's offset at midnight on the first of `month`, for the DST flag.
fn probe_offset<Tz: TimeZone>(tz: &Tz, year: i32, month: u32) -> Option<i32> {
    tz.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .earliest()
        .map(|dt| dt.offset().fix().local_minus_utc() / 60)
}
