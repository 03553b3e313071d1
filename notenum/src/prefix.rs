//! Folder prefixes and sibling sequence numbers.
//!
//! A vault folder such as `3.2-intro/4-basics` carries a hierarchical prefix
//! (`3.2.4`) built from the leading numeric label of each path segment. Notes
//! inside that folder are named `<prefix>.<NN>-<slug>`, and this module knows
//! how to derive the prefix, recognize existing sequence numbers, and pick the
//! next one.

use std::sync::LazyLock;

use log::trace;
use regex::Regex;

/// Leading dotted numeric label of a single path segment (`3`, `3.2`, `10.4.1`).
/// ASCII digits only; `\d` would also accept other scripts' digits.
static SEGMENT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+(?:\.[0-9]+)*)").expect("segment label regex is valid"));

/// Derive the dot-joined prefix base from a `/`-separated folder path.
///
/// Segments without a leading numeric label contribute nothing, so a folder
/// path with no numbered segments yields an empty string.
pub fn prefix_base(folder_path: &str) -> String {
    let mut labels = Vec::new();
    for segment in folder_path.split('/') {
        let label = SEGMENT_LABEL.captures(segment).and_then(|caps| caps.get(1));
        trace!("folder segment '{segment}' -> label {:?}", label.map(|m| m.as_str()));
        if let Some(label) = label {
            labels.push(label.as_str());
        }
    }
    labels.join(".")
}

/// Build the pattern matching sibling names of the form `<prefix>.<NN>-...`.
///
/// Exactly two digits are captured; the prefix is escaped so its dots only
/// match literal dots.
pub fn sequence_pattern(prefix_base: &str) -> Regex {
    let source = format!(r"^{}\.([0-9]{{2}})-", regex::escape(prefix_base));
    // escaped input cannot produce an invalid pattern
    Regex::new(&source).expect("escaped sequence pattern is valid")
}

/// Extract the two-digit sequence number from a sibling file name, if it has one.
pub fn sequence_number(pattern: &Regex, name: &str) -> Option<u32> {
    pattern
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// One more than the highest existing number (or `01` when there are none), zero-padded to two digits.
///
/// Gaps are never filled and values past 99 simply grow a third digit.
pub fn next_number(numbers: &[u32]) -> String {
    let highest = numbers.iter().copied().max().unwrap_or(0);
    format!("{:02}", highest + 1)
}
