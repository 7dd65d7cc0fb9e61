/// Per-call formatting configuration.
///
/// Name tables resolve in order: tables set directly here, then the
/// registry entry for `locale`, then the default English tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatterOptions {
    /// Locale tag looked up in the registry; empty selects the default.
    pub locale: String,
    /// Explicit weekday names, Sunday first. Must hold exactly 7 entries.
    pub weekdays: Option<Vec<String>>,
    /// Explicit month names, January first. Must hold exactly 12 entries.
    pub months: Option<Vec<String>>,
}

impl FormatterOptions {
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_weekdays<I, S>(mut self, weekdays: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.weekdays = Some(weekdays.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_months<I, S>(mut self, months: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.months = Some(months.into_iter().map(Into::into).collect());
        self
    }
}
