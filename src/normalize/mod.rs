//! Normalization ladder: successive rewrites of a mention tried in order.
//!
//! | Rung | Rule | `"  tHe EIFFEL tower "` |
//! |------|------|-------------------------|
//! | 1 | trim, collapse whitespace | `"tHe EIFFEL tower"` |
//! | 2 | rung 1, then title-case each token | `"The Eiffel Tower"` |
//! | 3 | rung 1, then lowercase | `"the eiffel tower"` |
//!
//! The ladder is lazy; the orchestrator stops pulling variants as soon as one
//! resolves. A rung whose text equals an earlier rung is skipped, and a
//! mention that is blank after rung 1 yields no variants at all.


/// Rewrite rule that produced a [`NormalizedVariant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LadderRule {
    Whitespace,
    TitleCase,
    LowerCase,
}

impl LadderRule {
    /// All rules in trial order.
    pub const ORDER: [LadderRule; 3] = [
        LadderRule::Whitespace,
        LadderRule::TitleCase,
        LadderRule::LowerCase,
    ];

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            LadderRule::Whitespace => "whitespace",
            LadderRule::TitleCase => "title_case",
            LadderRule::LowerCase => "lower_case",
        }
    }

    /// Applies this rule to a raw mention.
    pub fn apply(&self, raw: &str) -> String {
        match self {
            LadderRule::Whitespace => collapse_whitespace(raw),
            LadderRule::TitleCase => title_case(raw),
            LadderRule::LowerCase => collapse_whitespace(raw).to_lowercase(),
        }
    }
}

impl std::fmt::Display for LadderRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rewritten form of a mention, tagged with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedVariant {
    pub rule: LadderRule,
    pub text: String,
}

impl NormalizedVariant {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Lazy iterator over the variants of one mention.
#[derive(Debug, Clone)]
pub struct NormalizationLadder<'a> {
    raw: &'a str,
    next_rung: usize,
    tried: Vec<String>,
}

impl<'a> NormalizationLadder<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            next_rung: 0,
            tried: Vec::with_capacity(LadderRule::ORDER.len()),
        }
    }
}

impl Iterator for NormalizationLadder<'_> {
    type Item = NormalizedVariant;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(rule) = LadderRule::ORDER.get(self.next_rung).copied() {
            self.next_rung += 1;

            let text = rule.apply(self.raw);
            if text.is_empty() {
                // Every rung preserves emptiness.
                self.next_rung = LadderRule::ORDER.len();
                return None;
            }
            if self.tried.iter().any(|t| *t == text) {
                continue;
            }

            self.tried.push(text.clone());
            return Some(NormalizedVariant { rule, text });
        }
        None
    }
}

/// Trims the ends and collapses every internal whitespace run to one space.
pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whitespace-normalizes, then uppercases the first character of every token
/// and lowercases the rest of it.
pub fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.as_str().to_lowercase().chars())
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
