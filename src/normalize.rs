// WHY: deterministic text cleanup shared by the stitcher and the field extractor
// Rules are applied in a fixed order; later rules see the output of earlier ones

/// Quotation-mark variants stripped from every OCR line, including curly quotes
const QUOTE_CHARS: &[char] = &['"', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}'];

/// One literal substring correction
#[derive(Debug, Clone, Copy)]
pub struct NormalizationRule {
    pub wrong: &'static str,
    pub correct: &'static str,
    /// Leave occurrences that directly follow an ASCII digit untouched
    pub skip_after_digit: bool,
}

const fn rule(wrong: &'static str, correct: &'static str) -> NormalizationRule {
    NormalizationRule {
        wrong,
        correct,
        skip_after_digit: false,
    }
}

/// Ordered OCR corrections.
/// The period rule must stay last: earlier patterns are matched before periods disappear.
pub const NORMALIZATION_RULES: &[NormalizationRule] = &[
    rule("\u{00A2}", "c"),
    rule("Unt- versity", "University"),
    rule("Uni- versity", "University"),
    // "11th" already contains "1th"; the digit guard keeps the rule from growing it again
    NormalizationRule {
        wrong: "1th",
        correct: "11th",
        skip_after_digit: true,
    },
    rule("av n:", "av n"),
    rule("- ", ""),
    rule(".", ""),
];

impl NormalizationRule {
    /// Apply this rule to `text`, left to right over non-overlapping occurrences
    pub fn apply(&self, text: &str) -> String {
        if !self.skip_after_digit {
            return text.replace(self.wrong, self.correct);
        }

        let mut result = String::with_capacity(text.len() + self.correct.len());
        let mut last = 0;
        for (idx, matched) in text.match_indices(self.wrong) {
            let after_digit = text[..idx]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_ascii_digit());
            result.push_str(&text[last..idx]);
            result.push_str(if after_digit { matched } else { self.correct });
            last = idx + matched.len();
        }
        result.push_str(&text[last..]);
        result
    }
}

/// Remove quotation marks anywhere in the line and trim surrounding whitespace
pub fn clean_line(line: &str) -> String {
    line.chars()
        .filter(|c| !QUOTE_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

fn apply_rules_once(text: &str) -> String {
    let mut result = text.to_string();
    for rule in NORMALIZATION_RULES {
        if result.contains(rule.wrong) {
            result = rule.apply(&result);
        }
    }
    result.trim().to_string()
}

/// Repeat the ordered pass over `NORMALIZATION_RULES` until the text stops changing.
///
/// Hyphen and period removal can expose a new "1th" or "av n:", so a single
/// pass is not idempotent. The loop ends because no rule re-creates a match
/// for its own pattern once the ordinal digit guard is in place.
pub fn normalize_text(text: &str) -> String {
    let mut current = apply_rules_once(text);
    loop {
        let next = apply_rules_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}
