use crate::classify::{classify, CharClass};
use crate::options::{COMBINATOR_MARK, SEPARATOR_MARK};

/// One element of a matching pattern. The pattern is applied to the
/// normalized reading, so the only marks it ever sees are '.' and '+'.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternElement {
    /// The reading must contain exactly this character here (kana in the
    /// body appears verbatim in the reading).
    Literal(char),
    /// Captures one or more reading characters, none of them marks.
    /// Greedy: takes the longest run that still lets the rest match.
    Capture,
    /// Captures a single '.' or '+', or the empty string. Emitted between
    /// two adjacent logographic characters; the captured value decides
    /// whether their pairs merge or split.
    MarkerCapture,
    /// Optionally swallows a single '.' or '+' without capturing it.
    /// Emitted at class transitions to absorb a stray mark.
    Boundary,
}

pub struct Pattern {
    pub elements: Vec<PatternElement>,
    /// Number of capturing elements; a successful match yields exactly
    /// this many groups.
    pub groups: usize,
}

fn is_mark(ch: char) -> bool {
    ch == SEPARATOR_MARK || ch == COMBINATOR_MARK
}

/// Build the matching pattern for a body string, or `None` for an empty
/// body (an empty pattern would only ever match an empty reading, which the
/// caller treats as "no correspondence" anyway).
///
/// Example for "可愛い犬" (kanji kanji kana kanji):
///   可 → Capture                      (first kanji of a run)
///   愛 → MarkerCapture, Capture       (kanji after kanji: split/merge slot)
///   い → Boundary, Literal('い')      (kana after kanji)
///   犬 → Boundary, Capture            (kanji after kana)
pub fn build_pattern(body: &str) -> Option<Pattern> {
    if body.is_empty() {
        return None;
    }

    let mut elements = Vec::new();
    let mut groups = 0;
    let mut last = CharClass::Other;

    for ch in body.chars() {
        let class = classify(ch);
        match class {
            CharClass::Logographic => {
                match last {
                    CharClass::Logographic => {
                        elements.push(PatternElement::MarkerCapture);
                        groups += 1;
                    }
                    CharClass::Phonetic => elements.push(PatternElement::Boundary),
                    CharClass::Other => {}
                }
                elements.push(PatternElement::Capture);
                groups += 1;
            }
            CharClass::Phonetic => {
                if last == CharClass::Logographic {
                    elements.push(PatternElement::Boundary);
                }
                elements.push(PatternElement::Literal(ch));
            }
            CharClass::Other => {
                // contributes no literal and no capture; just absorb a mark
                // at the transition
                if last != CharClass::Other {
                    elements.push(PatternElement::Boundary);
                }
            }
        }
        last = class;
    }

    Some(Pattern { elements, groups })
}

/// Apply a pattern against the whole of a normalized reading. Returns the
/// captured groups in emission order, or `None` if the reading cannot be
/// matched end to end.
///
/// Captures are greedy with backtracking, so an unbroken kanji run binds as
/// much of the reading as possible to its earliest capture unless an
/// explicit mark forces a split.
pub fn match_reading(pattern: &Pattern, reading: &str) -> Option<Vec<String>> {
    let chars: Vec<char> = reading.chars().collect();
    let mut groups = Vec::with_capacity(pattern.groups);
    if match_at(&pattern.elements, &chars, 0, &mut groups) {
        Some(groups)
    } else {
        None
    }
}

fn match_at(
    elements: &[PatternElement],
    chars: &[char],
    pos: usize,
    groups: &mut Vec<String>,
) -> bool {
    let Some((element, rest)) = elements.split_first() else {
        // anchored: the whole reading must be consumed
        return pos == chars.len();
    };

    match element {
        PatternElement::Literal(ch) => {
            pos < chars.len() && chars[pos] == *ch && match_at(rest, chars, pos + 1, groups)
        }
        PatternElement::Boundary => {
            if pos < chars.len() && is_mark(chars[pos]) && match_at(rest, chars, pos + 1, groups) {
                return true;
            }
            match_at(rest, chars, pos, groups)
        }
        PatternElement::MarkerCapture => {
            if pos < chars.len() && is_mark(chars[pos]) {
                groups.push(chars[pos].to_string());
                if match_at(rest, chars, pos + 1, groups) {
                    return true;
                }
                groups.pop();
            }
            groups.push(String::new());
            if match_at(rest, chars, pos, groups) {
                return true;
            }
            groups.pop();
            false
        }
        PatternElement::Capture => {
            let mut end = pos;
            while end < chars.len() && !is_mark(chars[end]) {
                end += 1;
            }
            // longest run first, backtrack down to a single character
            while end > pos {
                groups.push(chars[pos..end].iter().collect());
                if match_at(rest, chars, end, groups) {
                    return true;
                }
                groups.pop();
                end -= 1;
            }
            false
        }
    }
}
