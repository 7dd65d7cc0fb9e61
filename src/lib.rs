pub mod constants;
pub mod formatter;
pub mod parser;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use formatter::{
    FormatterOptions, Locale, LocaleError, LocaleSettings, Moment, ZoneInfo, add_locale,
    default_locale, format, format_with_options,
};
pub use parser::{parse_pattern, tokenize};
