use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use serde::Deserialize;
use thiserror::Error;

/// Weekday and month name tables used by the name-producing tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Exactly seven names, Sunday first.
    pub weekdays: Vec<String>,
    /// Exactly twelve names, January first.
    pub months: Vec<String>,
}

/// Caller-supplied name tables for [`add_locale`]. Fields left `None` keep
/// the default English names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleSettings {
    pub weekdays: Option<Vec<String>>,
    pub months: Option<Vec<String>>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocaleError {
    #[error("expected 7 weekday names, got {0}")]
    WeekdayCount(usize),
    #[error("expected 12 month names, got {0}")]
    MonthCount(usize),
    #[error("invalid locale tag: {0:?}")]
    InvalidTag(String),
}

#[derive(Debug, Deserialize)]
struct LocaleFile {
    default: LocaleRaw,
    locales: HashMap<String, LocaleRaw>,
}

#[derive(Debug, Deserialize)]
struct LocaleRaw {
    weekdays: Vec<String>,
    months: Vec<String>,
}

#[derive(Debug, Clone)]
struct LocaleId {
    lang: String,
    language: String,
}

struct LocaleRegistry {
    default: Arc<Locale>,
    locales: RwLock<HashMap<String, Arc<Locale>>>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

fn registry() -> &'static LocaleRegistry {
    REGISTRY.get_or_init(LocaleRegistry::load)
}

impl LocaleRegistry {
    fn load() -> Self {
        let raw: LocaleFile =
            serde_json::from_str(include_str!("./locales.json")).expect("invalid locale data");
        let default = Arc::new(Locale::from_raw(raw.default));
        let mut locales = HashMap::new();
        for (key, value) in raw.locales {
            locales.insert(canonicalize_tag(&key), Arc::new(Locale::from_raw(value)));
        }
        Self {
            default,
            locales: RwLock::new(locales),
        }
    }
}

impl Locale {
    fn from_raw(raw: LocaleRaw) -> Self {
        Self {
            weekdays: raw.weekdays,
            months: raw.months,
        }
    }
}

/// The built-in English name tables.
pub fn default_locale() -> Arc<Locale> {
    registry().default.clone()
}

pub fn get_locale(tag: Option<&str>) -> Option<Arc<Locale>> {
    let id = parse_locale_tag(tag?)?;
    let locales = registry().locales.read().expect("locale registry poisoned");
    locales
        .get(&id.lang)
        .or_else(|| locales.get(&id.language))
        .cloned()
}

pub fn get_locale_or_default(tag: Option<&str>) -> Arc<Locale> {
    get_locale(tag).unwrap_or_else(default_locale)
}

/// Register (or replace) the name tables reachable under `tag`.
///
/// Table lengths are validated here so that formatting can index them
/// unconditionally.
pub fn add_locale(settings: LocaleSettings, tag: &str) -> Result<(), LocaleError> {
    if let Some(weekdays) = &settings.weekdays
        && weekdays.len() != 7
    {
        return Err(LocaleError::WeekdayCount(weekdays.len()));
    }
    if let Some(months) = &settings.months
        && months.len() != 12
    {
        return Err(LocaleError::MonthCount(months.len()));
    }
    let id = parse_locale_tag(tag).ok_or_else(|| LocaleError::InvalidTag(tag.to_string()))?;
    let reg = registry();
    let base = reg.default.clone();
    let locale = Arc::new(Locale {
        weekdays: settings
            .weekdays
            .unwrap_or_else(|| base.weekdays.clone()),
        months: settings.months.unwrap_or_else(|| base.months.clone()),
    });
    let mut locales = reg.locales.write().expect("locale registry poisoned");
    locales.insert(id.lang, locale);
    Ok(())
}

fn canonicalize_tag(tag: &str) -> String {
    parse_locale_tag(tag)
        .map(|id| id.lang)
        .unwrap_or_else(|| tag.to_ascii_lowercase())
}

fn parse_locale_tag(input: &str) -> Option<LocaleId> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let head = trimmed.split('@').next().unwrap_or(trimmed);
    let head = head.split('.').next().unwrap_or(head);
    let mut parts = head
        .split(['-', '_'])
        .filter(|part| !part.is_empty());

    let language = parts.next()?.to_ascii_lowercase();
    if !language.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    let territory = parts.next().map(|part| part.to_ascii_uppercase());
    if parts.next().is_some() {
        return None;
    }

    let lang = if let Some(region) = &territory {
        format!("{language}_{region}")
    } else {
        language.clone()
    };

    Some(LocaleId { lang, language })
}
