pub mod classify;
pub mod options;
pub mod pair;
pub mod pattern;
pub mod ruby;

pub use options::MatchOptions;
pub use pair::AnnotationPair;

use once_cell::sync::Lazy;
use unicode_normalization::UnicodeNormalization;
use wasm_minimal_protocol::*;

initiate_protocol!();

static OPTIONS: Lazy<MatchOptions> = Lazy::new(MatchOptions::default);

// normalize to NFC so combining kana voicing marks collapse to precomposed
// chars before classification, e.g. "か" + U+3099 → "が"
fn decode(input: &[u8]) -> String {
    std::str::from_utf8(input).unwrap_or("").nfc().collect()
}

fn to_json(pairs: &[AnnotationPair]) -> Vec<u8> {
    serde_json::to_string(pairs)
        .unwrap_or_else(|_| "[]".to_string())
        .into_bytes()
}

/// Input: body and reading bytes, e.g. "食べる" / "たべる"
/// Output: JSON pairs, e.g. b'[{"base":"食","ruby":"た"},{"base":"べる","ruby":""}]'
#[wasm_func]
pub fn annotate(body: &[u8], reading: &[u8]) -> Vec<u8> {
    let pairs = ruby::annotate(&decode(body), &decode(reading), &OPTIONS);
    to_json(&pairs)
}

/// Like `annotate`, with extra separator/combinator characters accepted in
/// the reading (one set member per character of each argument).
#[wasm_func]
pub fn annotate_with(
    body: &[u8],
    reading: &[u8],
    extra_separators: &[u8],
    extra_combinators: &[u8],
) -> Vec<u8> {
    let opts = MatchOptions::new(
        "【",
        "】",
        &decode(extra_separators),
        &decode(extra_combinators),
    );
    let pairs = ruby::annotate(&decode(body), &decode(reading), &opts);
    to_json(&pairs)
}

/// The bracket pair a renderer should fall back to when its output format
/// has no native ruby support. Output: b'["【","】"]'
#[wasm_func]
pub fn fallback_parens() -> Vec<u8> {
    serde_json::to_string(&OPTIONS.fallback_parens)
        .unwrap_or_else(|_| "[]".to_string())
        .into_bytes()
}
