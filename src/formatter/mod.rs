use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use crate::parser::model::Pattern;
use crate::parser::parse_pattern;

pub mod calendar;
mod locale;
pub mod options;
mod pad;
mod render;
pub mod value;
pub mod zone;

pub use locale::{Locale, LocaleError, LocaleSettings, add_locale, default_locale};
pub use options::FormatterOptions;
pub use value::{Moment, ZoneInfo};

use locale::get_locale_or_default;
use render::{Names, render_tokens};

static PATTERN_CACHE: OnceLock<Mutex<HashMap<String, Arc<Pattern>>>> = OnceLock::new();

fn pattern_cache() -> &'static Mutex<HashMap<String, Arc<Pattern>>> {
    PATTERN_CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

pub(crate) fn prepare_pattern(pattern: &str) -> Arc<Pattern> {
    let mut cache = pattern_cache().lock().expect("pattern cache poisoned");
    if let Some(parsed) = cache.get(pattern) {
        return parsed.clone();
    }
    let parsed = Arc::new(parse_pattern(pattern));
    cache.insert(pattern.to_string(), parsed.clone());
    parsed
}

/// Format `moment` according to `pattern` with the default name tables.
pub fn format(pattern: &str, moment: &Moment) -> String {
    format_with_options(pattern, moment, FormatterOptions::default())
}

/// Format `moment` according to `pattern`.
///
/// Recognized format characters render their date component; a backslash
/// escapes the next character; everything else passes through literally.
/// Total for every pattern and every moment.
pub fn format_with_options(pattern: &str, moment: &Moment, options: FormatterOptions) -> String {
    let parsed = prepare_pattern(pattern);
    let tag = if options.locale.is_empty() {
        None
    } else {
        Some(options.locale.as_str())
    };
    let locale = get_locale_or_default(tag);
    let names = Names {
        weekdays: options.weekdays.as_deref().unwrap_or(&locale.weekdays),
        months: options.months.as_deref().unwrap_or(&locale.months),
    };
    let mut out = String::with_capacity(pattern.len() * 2);
    render_tokens(&mut out, &parsed.tokens, moment, &names);
    out
}
