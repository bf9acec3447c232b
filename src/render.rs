/// Text rendering of lookup results.
///
/// Pure string assembly, no I/O: the binary prints whatever these functions
/// return. Grouped rendering takes the ordered output of
/// `analysis::groupings` and emits one heading per syllable group.

use std::collections::BTreeMap;

use crate::analysis::groupings::GroupKey;
use crate::model::WordEntry;
use crate::saved::SavedWordList;

// ---------------------------------------------------------------------------
// Headings
// ---------------------------------------------------------------------------

/// Heading for one syllable group, e.g. "1 syllable" / "3 syllables".
pub fn syllable_heading(key: &GroupKey) -> String {
    match key {
        GroupKey::Number(1) => "1 syllable".to_string(),
        GroupKey::Number(n) => format!("{} syllables", n),
        GroupKey::Text(s) => s.clone(),
        GroupKey::Missing => "unknown syllable count".to_string(),
    }
}

// ---------------------------------------------------------------------------
// List rendering
// ---------------------------------------------------------------------------

/// Renders entries grouped by syllable count, ascending, one indented word
/// per line under each heading.
pub fn render_grouped(groups: &BTreeMap<GroupKey, Vec<WordEntry>>) -> String {
    let mut out = String::new();
    for (key, entries) in groups {
        out.push_str(&syllable_heading(key));
        out.push_str(":\n");
        for entry in entries {
            out.push_str("  ");
            out.push_str(&entry.word);
            out.push('\n');
        }
    }
    out
}

/// Renders entries as a flat numbered list in the order given (the API
/// returns best match first).
pub fn render_flat(entries: &[WordEntry]) -> String {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format!("{:3}. {}\n", i + 1, entry.word));
    }
    out
}

/// Renders the saved-words list with the lookup each word came from.
pub fn render_saved(list: &SavedWordList) -> String {
    if list.is_empty() {
        return "No saved words.\n".to_string();
    }
    let mut out = String::new();
    for entry in list.iter() {
        out.push_str(&format!(
            "  {} (from {} \"{}\")\n",
            entry.word, entry.relation_code, entry.source_term
        ));
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
