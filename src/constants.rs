/// Seconds in a civil day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Swatch Internet Time splits the UTC day into 1000 beats, anchored to UTC+1.
pub const BEATS_PER_DAY: i64 = 1_000;
pub const BEAT_MERIDIAN_SECONDS: i64 = 3_600;

/// Sub-pattern behind the `c` token (ISO-8601 combined date and time).
pub const ISO_8601_PATTERN: &str = "Y-m-d\\TH:i:sP";

/// Sub-pattern behind the `r` token (RFC 2822 date).
pub const RFC_2822_PATTERN: &str = "D, d M Y H:i:s O";
