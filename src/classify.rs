/// Script class of a single character, the three-way branch that drives
/// both pattern construction and segment reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// CJK ideograph; its reading length against the kana is ambiguous.
    Logographic,
    /// Kana; expected to appear verbatim in the reading.
    Phonetic,
    /// Everything else (digits, Latin, punctuation, other scripts).
    Other,
}

/// Classify one character by codepoint range.
///
/// Operates per `char`, not per grapheme cluster: combining marks and
/// characters outside the BMP fall through to `Other`.
pub fn classify(ch: char) -> CharClass {
    match ch {
        '\u{3040}'..='\u{3096}'     // hiragana
        | '\u{30A1}'..='\u{30FA}'   // katakana
        | '\u{30FC}'                // long vowel mark ー
        | '\u{FF66}'..='\u{FF9F}'   // half-width katakana
        => CharClass::Phonetic,
        '\u{3400}'..='\u{9FAF}'     // CJK Extension A + Unified Ideographs
        => CharClass::Logographic,
        _ => CharClass::Other,
    }
}
