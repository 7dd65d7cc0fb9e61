use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::formatter::{FormatterOptions, Moment, format_with_options};
use crate::parser::model::TokenValue;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[derive(Serialize, Deserialize)]
pub struct TokenInfo {
    pub kind: String,
    pub raw: String,
    pub value: Option<String>,
}

#[wasm_bindgen]
pub fn tokenize_pattern(pattern: &str) -> JsValue {
    let tokens: Vec<TokenInfo> = crate::parser::tokenize(pattern)
        .into_iter()
        .map(|token| TokenInfo {
            kind: format!("{:?}", token.kind),
            value: match token.value {
                TokenValue::Char(ch) => Some(ch.to_string()),
                TokenValue::None => None,
            },
            raw: token.raw,
        })
        .collect();
    serde_wasm_bindgen::to_value(&tokens).unwrap()
}

#[wasm_bindgen]
pub fn format_timestamp(pattern: &str, epoch_millis: f64, offset_minutes: i32) -> String {
    let moment = Moment::from_epoch_millis_with_offset(epoch_millis as i64, offset_minutes);
    crate::formatter::format(pattern, &moment)
}

#[wasm_bindgen]
pub fn format_timestamp_localized(
    pattern: &str,
    epoch_millis: f64,
    offset_minutes: i32,
    locale: &str,
) -> String {
    let moment = Moment::from_epoch_millis_with_offset(epoch_millis as i64, offset_minutes);
    format_with_options(
        pattern,
        &moment,
        FormatterOptions::default().with_locale(locale),
    )
}
