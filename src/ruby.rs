use crate::classify::{classify, CharClass};
use crate::options::MatchOptions;
use crate::pair::AnnotationPair;
use crate::pattern::{build_pattern, match_reading};

/// Default mark for emphasis mode when the author writes a bare '*'.
const EMPHASIS_MARK: &str = "●";

/// Align `body` with `reading`, returning one (base, ruby) pair per display
/// unit, in body order. Never fails: anything that cannot be matched
/// degrades to the single literal pair (body, reading).
///
/// A leading '=' / '＝' on the reading disables matching; a leading
/// '*' / '＊' switches to emphasis mode. Both are checked against the raw
/// reading, before any normalization.
pub fn annotate(body: &str, reading: &str, options: &MatchOptions) -> Vec<AnnotationPair> {
    let mut marker = reading.chars();
    match marker.next() {
        Some('=') | Some('＝') => {
            return vec![AnnotationPair::new(body, marker.as_str())];
        }
        Some('*') | Some('＊') => {
            let mark = marker.as_str();
            let mark = if mark.is_empty() { EMPHASIS_MARK } else { mark };
            return body
                .chars()
                .map(|ch| AnnotationPair::new(&ch.to_string(), mark))
                .collect();
        }
        _ => {}
    }

    let Some(pattern) = build_pattern(body) else {
        return vec![AnnotationPair::new(body, reading)];
    };
    match match_reading(&pattern, &options.normalize(reading)) {
        Some(groups) => reconstruct(body, &groups),
        // fallback keeps the reading verbatim, marks and all
        None => vec![AnnotationPair::new(body, reading)],
    }
}

/// Walk `body` in lock-step with the captured groups of a successful match
/// and emit the final pairs. Groups are consumed through a single forward
/// cursor, in the exact order the pattern emitted them.
pub fn reconstruct(body: &str, groups: &[String]) -> Vec<AnnotationPair> {
    let mut pairs = Vec::new();
    let mut base = String::new();
    let mut ruby = String::new();
    let mut last = CharClass::Other;
    let mut cursor = 0;

    for ch in body.chars() {
        let class = classify(ch);
        if class == CharClass::Logographic {
            if last == CharClass::Logographic {
                // the marker slot decides: '+' or nothing merges, a
                // separator splits
                let marker = take(groups, &mut cursor);
                if marker.is_empty() || marker == "+" {
                    base.push(ch);
                    ruby.push_str(take(groups, &mut cursor));
                } else {
                    pairs.push(AnnotationPair {
                        base: std::mem::take(&mut base),
                        ruby: std::mem::take(&mut ruby),
                    });
                    base.push(ch);
                    ruby.push_str(take(groups, &mut cursor));
                }
            } else {
                if !base.is_empty() || !ruby.is_empty() {
                    pairs.push(AnnotationPair {
                        base: std::mem::take(&mut base),
                        ruby: std::mem::take(&mut ruby),
                    });
                }
                base.push(ch);
                ruby.push_str(take(groups, &mut cursor));
            }
        } else {
            if last == CharClass::Logographic {
                pairs.push(AnnotationPair {
                    base: std::mem::take(&mut base),
                    ruby: std::mem::take(&mut ruby),
                });
            }
            // kana and Other characters accumulate in the base only
            base.push(ch);
        }
        last = class;
    }

    pairs.push(AnnotationPair { base, ruby });
    pairs
}

// out of range only if the groups do not belong to this body's pattern;
// degrade to an empty group rather than panic
fn take<'a>(groups: &'a [String], cursor: &mut usize) -> &'a str {
    let group = groups.get(*cursor).map(String::as_str).unwrap_or("");
    *cursor += 1;
    group
}
