#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Day
    DayPadded,
    WeekdayAbbrev,
    Day,
    WeekdayName,
    IsoWeekday,
    OrdinalSuffix,
    Weekday,
    DayOfYear,
    // Week
    IsoWeek,
    // Month
    MonthName,
    MonthPadded,
    MonthAbbrev,
    Month,
    DaysInMonth,
    // Year
    LeapYear,
    IsoYear,
    Year,
    YearShort,
    // Time
    AmPmLower,
    AmPmUpper,
    SwatchBeat,
    Hour12,
    Hour24,
    Hour12Padded,
    Hour24Padded,
    Minute,
    Second,
    Microsecond,
    Millisecond,
    // Timezone
    ZoneId,
    DstFlag,
    OffsetBasic,
    OffsetColon,
    ZoneAbbrev,
    OffsetSeconds,
    // Full date/time
    Iso8601,
    Rfc2822,
    Epoch,
    // Everything else
    Escaped,
    Literal,
}

impl TokenKind {
    /// The format character behind each recognized token.
    pub fn from_char(ch: char) -> Option<Self> {
        let kind = match ch {
            'd' => Self::DayPadded,
            'D' => Self::WeekdayAbbrev,
            'j' => Self::Day,
            'l' => Self::WeekdayName,
            'N' => Self::IsoWeekday,
            'S' => Self::OrdinalSuffix,
            'w' => Self::Weekday,
            'z' => Self::DayOfYear,
            'W' => Self::IsoWeek,
            'F' => Self::MonthName,
            'm' => Self::MonthPadded,
            'M' => Self::MonthAbbrev,
            'n' => Self::Month,
            't' => Self::DaysInMonth,
            'L' => Self::LeapYear,
            'o' => Self::IsoYear,
            'Y' => Self::Year,
            'y' => Self::YearShort,
            'a' => Self::AmPmLower,
            'A' => Self::AmPmUpper,
            'B' => Self::SwatchBeat,
            'g' => Self::Hour12,
            'G' => Self::Hour24,
            'h' => Self::Hour12Padded,
            'H' => Self::Hour24Padded,
            'i' => Self::Minute,
            's' => Self::Second,
            'u' => Self::Microsecond,
            'v' => Self::Millisecond,
            'e' => Self::ZoneId,
            'I' => Self::DstFlag,
            'O' => Self::OffsetBasic,
            'P' => Self::OffsetColon,
            'T' => Self::ZoneAbbrev,
            'Z' => Self::OffsetSeconds,
            'c' => Self::Iso8601,
            'r' => Self::Rfc2822,
            'U' => Self::Epoch,
            _ => return None,
        };
        Some(kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenValue {
    #[default]
    None,
    Char(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub raw: String,
    pub value: TokenValue,
}

impl Token {
    pub fn new(kind: TokenKind, raw: impl Into<String>, value: TokenValue) -> Self {
        Self {
            kind,
            raw: raw.into(),
            value,
        }
    }

    /// The character an `Escaped` or `Literal` token emits.
    pub fn literal_char(&self) -> Option<char> {
        match self.value {
            TokenValue::Char(ch) => Some(ch),
            TokenValue::None => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub pattern: String,
    pub tokens: Vec<Token>,
}
