// WHY: OCR wraps one directory entry across several physical lines; the only
// resynchronization signal is a line that opens with a "Firstname Lastname" shape

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::normalize::clean_line;

static ENTRY_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^["‘“]?[A-Z][a-z]+\s+[A-Z]"#).unwrap());

/// One putative directory entry recombined from one or more raw lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StitchedFragment {
    pub page_number: u32,
    pub text: String,
}

/// Heuristic classifier: does this cleaned line begin a new directory entry?
///
/// Continuation lines that happen to open with two capitalized words are
/// misread as new entries, and entries that open in lower case are merged
/// into the previous one. Both failure modes are part of the heuristic.
pub fn starts_new_entry(line: &str) -> bool {
    ENTRY_START_RE.is_match(line)
}

/// Merge raw page lines into logical entry fragments.
///
/// Blank lines are dropped; every other line is cleaned with [`clean_line`]
/// and either opens a new fragment or is appended to the current one with a
/// single space.
pub fn stitch_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stitched = Vec::new();
    let mut buffer = String::new();

    for raw in lines {
        let raw = raw.as_ref();
        if raw.trim().is_empty() {
            continue;
        }
        let line = clean_line(raw);

        if starts_new_entry(&line) {
            flush(&mut buffer, &mut stitched);
            buffer.push_str(&line);
        } else {
            buffer.push(' ');
            buffer.push_str(&line);
        }
    }
    flush(&mut buffer, &mut stitched);

    debug!("Stitched {} fragments", stitched.len());
    stitched
}

/// Stitch one page's lines and tag each fragment with its page number
pub fn stitch_page<I, S>(lines: I, page_number: u32) -> Vec<StitchedFragment>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    stitch_lines(lines)
        .into_iter()
        .map(|text| StitchedFragment { page_number, text })
        .collect()
}

fn flush(buffer: &mut String, stitched: &mut Vec<String>) {
    let fragment = buffer.trim();
    if !fragment.is_empty() {
        stitched.push(fragment.to_string());
    }
    buffer.clear();
}
