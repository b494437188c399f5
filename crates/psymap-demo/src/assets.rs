//! Embedded fixture payloads, shaped like the assessment API responses.

/// A dynamic profile: traits, connections, inconsistencies.
pub fn dynamic_profile() -> &'static str {
    include_str!("../data/dynamic_profile.json")
}

/// A completed letter-system test result with its description
/// dictionary.
pub fn letter_result() -> &'static str {
    include_str!("../data/letter_result.json")
}

/// A completed attachment-style result with rule-based scoring.
pub fn attachment_result() -> &'static str {
    include_str!("../data/attachment_result.json")
}

/// A short result history for the trend chart.
pub fn history() -> &'static str {
    include_str!("../data/history.json")
}
