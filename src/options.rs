/// Separator characters always recognized, besides whitespace.
const SEPARATORS: [char; 7] = ['.', '。', '・', '|', '｜', '/', '／'];

/// Combinator characters always recognized.
const COMBINATORS: [char; 2] = ['+', '＋'];

/// Canonical marks every accepted separator/combinator is rewritten to
/// before the pattern is applied.
pub const SEPARATOR_MARK: char = '.';
pub const COMBINATOR_MARK: char = '+';

/// Matching configuration. Immutable once built; construct it once and pass
/// it by reference into every `annotate` call.
pub struct MatchOptions {
    /// Bracket pair for renderers whose output format has no native ruby
    /// support. Not consulted by the matching itself.
    pub fallback_parens: (String, String),
    separators: Vec<char>,
    combinators: Vec<char>,
}

impl MatchOptions {
    /// `extra_separators` and `extra_combinators` contribute one set member
    /// per character; duplicates of the built-in marks are harmless.
    pub fn new(
        paren_open: &str,
        paren_close: &str,
        extra_separators: &str,
        extra_combinators: &str,
    ) -> Self {
        let mut separators = SEPARATORS.to_vec();
        separators.extend(extra_separators.chars());
        let mut combinators = COMBINATORS.to_vec();
        combinators.extend(extra_combinators.chars());
        MatchOptions {
            fallback_parens: (paren_open.to_string(), paren_close.to_string()),
            separators,
            combinators,
        }
    }

    /// Rewrite a reading so every accepted separator becomes `'.'` and every
    /// accepted combinator becomes `'+'`. Separators are substituted first,
    /// so a character listed in both sets normalizes as a separator.
    pub fn normalize(&self, reading: &str) -> String {
        let separated: String = reading
            .chars()
            .map(|c| {
                if c.is_whitespace() || self.separators.contains(&c) {
                    SEPARATOR_MARK
                } else {
                    c
                }
            })
            .collect();
        separated
            .chars()
            .map(|c| {
                if self.combinators.contains(&c) {
                    COMBINATOR_MARK
                } else {
                    c
                }
            })
            .collect()
    }
}

impl Default for MatchOptions {
    fn default() -> Self {
        MatchOptions::new("【", "】", "", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_builtin_marks() {
        let opts = MatchOptions::default();
        assert_eq!(opts.normalize("か・わい・い・いぬ"), "か.わい.い.いぬ");
        assert_eq!(opts.normalize("か＋わい｜いぬ"), "か+わい.いぬ");
        assert_eq!(opts.normalize("た/べ／る"), "た.べ.る");
        // whitespace, half- and full-width, counts as a separator
        assert_eq!(opts.normalize("か わい\tいぬ"), "か.わい.いぬ");
        assert_eq!(opts.normalize("か　わい"), "か.わい");
    }

    #[test]
    fn test_normalize_untouched() {
        let opts = MatchOptions::default();
        assert_eq!(opts.normalize("たべる"), "たべる");
        assert_eq!(opts.normalize(""), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        let opts = MatchOptions::default();
        let once = opts.normalize("か。わい・い＋いぬ");
        assert_eq!(opts.normalize(&once), once);
    }

    #[test]
    fn test_extra_marks() {
        let opts = MatchOptions::new("【", "】", "_", "&");
        assert_eq!(opts.normalize("か_わい&いぬ"), "か.わい+いぬ");
        // built-ins still apply alongside extras
        assert_eq!(opts.normalize("か・わい＋いぬ"), "か.わい+いぬ");
    }
}
