// Advertisements share the directory's visual formatting; a business noun in
// the last-name slot marks a fragment that is not a resident listing

use crate::record::ResidentRecord;

/// Lower-case last names that mark a fragment as an advertisement
pub const AD_LAST_NAMES: &[&str] = &["store", "goods", "co", "line", "creamery"];

/// True when the record must be discarded: missing last name or a business noun
pub fn looks_like_ad(record: &ResidentRecord) -> bool {
    match record.last_name.as_deref() {
        None => true,
        Some(last_name) if last_name.is_empty() => true,
        Some(last_name) => AD_LAST_NAMES
            .iter()
            .any(|noun| noun.eq_ignore_ascii_case(last_name)),
    }
}
