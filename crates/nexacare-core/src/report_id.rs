//! Report identifier convention.
//!
//! Report ids are human-traceable, not globally unique: the assessment id
//! keeps them greppable, the millisecond timestamp orders them, and the
//! random suffix separates submissions landing in the same millisecond.

use jiff::Timestamp;
use uuid::Uuid;

const SUFFIX_LEN: usize = 9;

/// Build a report id of the form `{assessment_id}_{unix_millis}_{suffix}`
/// where the suffix is the first nine hex characters of a fresh UUID v4.
pub fn generate(assessment_id: &str, generated_at: Timestamp) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!(
        "{assessment_id}_{}_{}",
        generated_at.as_millisecond(),
        &hex[..SUFFIX_LEN]
    )
}
