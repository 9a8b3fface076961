// Field heuristics for one stitched directory entry. Each step is independent:
// a pattern that does not match leaves its field(s) as None.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::ad_filter::looks_like_ad;
use crate::normalize::{clean_line, normalize_text};
use crate::record::{HomeAddress, ResidentRecord};
use crate::stitcher::StitchedFragment;

static SPOUSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(wid(?:ow)?\.?\s+([A-Z][a-z]+)").unwrap());

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z][a-zA-Z]+)\s+([A-Z][\w\-\.]*)").unwrap());

/// Comma, lower-case occupation, optional "Company Name," block, then a residence indicator
static OCCUPATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r",\s*([a-zA-Z ]+?)(?:,?\s+[A-Z][a-zA-Z&]+.*?,|,)?\s+(r|b|rms)\b").unwrap()
});

static DIGIT_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{3,5}").unwrap());

static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(r|b|rms)\.?,?\s+(\d{3,5})\s+([^.,\n]+)").unwrap()
});

/// Start of trailing junk OCR glued onto a street name: a new capitalized word
/// followed by a delimiter, or an all-caps run
static STREET_TAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s[A-Z][a-z]+[\s:,]| [A-Z]{2,}").unwrap());

/// Directory cross-reference marker that is never an occupation
const CROSS_REFERENCE: &str = "see also";

/// Turns stitched fragments into resident records for one directory volume
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    directory_name: String,
}

impl FieldExtractor {
    pub fn new(directory_name: impl Into<String>) -> Self {
        Self {
            directory_name: directory_name.into(),
        }
    }

    /// Parse one entry; `None` means the fragment was rejected as an advertisement
    /// (or carried no name at all) and nothing past the name step was extracted.
    pub fn parse_entry(&self, raw_text: &str, page_number: u32) -> Option<ResidentRecord> {
        let text = normalize_text(&clean_line(raw_text));
        let mut record = ResidentRecord::new(self.directory_name.as_str(), page_number);

        record.spouse = extract_spouse(&text);

        if let Some((first_name, last_name)) = extract_name(&text) {
            record.first_name = Some(first_name);
            record.last_name = Some(last_name);
        }

        if looks_like_ad(&record) {
            debug!(page_number, fragment = %text, "Rejected fragment as advertisement");
            return None;
        }

        let (occupation, company_name) = extract_occupation_and_company(&text);
        record.occupation = occupation;
        record.company_name = company_name;

        if let Some(home_address) = extract_home_address(&text) {
            record.home_address = home_address;
        }

        Some(record)
    }

    pub fn parse_fragment(&self, fragment: &StitchedFragment) -> Option<ResidentRecord> {
        self.parse_entry(&fragment.text, fragment.page_number)
    }
}

/// First name of the late husband from "(wid Rasmus)" / "(widow Rasmus)"
pub fn extract_spouse(text: &str) -> Option<String> {
    SPOUSE_RE
        .captures(text)
        .map(|caps| caps[1].to_string())
}

/// Leading "First Last" pair
pub fn extract_name(text: &str) -> Option<(String, String)> {
    NAME_RE
        .captures(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
}

/// Occupation and, when it follows the occupation, the employer name.
///
/// The company search is anchored on the literal occupation text, even when
/// that text was rejected as a cross-reference.
pub fn extract_occupation_and_company(text: &str) -> (Option<String>, Option<String>) {
    let Some(caps) = OCCUPATION_RE.captures(text) else {
        return (None, None);
    };
    let anchor = caps[1].trim();
    if anchor.is_empty() {
        return (None, None);
    }

    let occupation = if anchor.to_lowercase().contains(CROSS_REFERENCE) {
        debug!(occupation = anchor, "Dropped cross-reference as occupation");
        None
    } else {
        Some(anchor.to_string())
    };

    (occupation, extract_company(text, anchor))
}

fn extract_company(text: &str, occupation: &str) -> Option<String> {
    let pattern = format!(r"{},\s+(.+?),\s+(r|b|rms)", regex::escape(occupation));
    let company_re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            debug!("Skipping company search for {:?}: {}", occupation, e);
            return None;
        }
    };

    let caps = company_re.captures(text)?;
    let company = caps[1].trim();
    // a 3-5 digit run means a street number was captured instead of an employer
    if DIGIT_RUN_RE.is_match(company) {
        return None;
    }
    Some(company.to_string())
}

/// Residence indicator, street number and cleaned street name
pub fn extract_home_address(text: &str) -> Option<HomeAddress> {
    let caps = ADDRESS_RE.captures(text)?;
    let street_name = normalize_text(&caps[3]);

    Some(HomeAddress {
        street_number: Some(caps[2].to_string()),
        street_name: Some(truncate_street_name(&street_name).to_string()),
        apartment_or_unit: None,
        residence_indicator: Some(caps[1].to_string()),
    })
}

/// Cut a street name where a merged name or abbreviation block begins
pub fn truncate_street_name(street_name: &str) -> &str {
    let end = STREET_TAIL_RE
        .find(street_name)
        .map_or(street_name.len(), |m| m.start());
    street_name[..end].trim()
}
