/// Offline pipeline tests: wire JSON → parse → group → render.
///
/// These run against captured API bodies so they need no network. Live-API
/// coverage lives in `datamuse_integration.rs` and
/// `relation_verification.rs`, both ignored by default.

use std::collections::BTreeMap;

use serde_json::Value;

use wordlook_service::analysis::groupings::{group, group_by, GroupKey, KeyRule};
use wordlook_service::dev_mode::{DevMode, SAMPLE_RHYMES_JSON};
use wordlook_service::ingest::datamuse;
use wordlook_service::model::{WordEntry, REL_RHYME};
use wordlook_service::render;

// ---------------------------------------------------------------------------
// Wire body → typed entries → grouped rendering
// ---------------------------------------------------------------------------

#[test]
fn test_rhyme_body_groups_by_syllables_and_renders() {
    let entries = datamuse::parse_words_response(SAMPLE_RHYMES_JSON)
        .expect("captured body should parse");

    let groups: BTreeMap<GroupKey, Vec<WordEntry>> =
        group_by(&entries, |e| GroupKey::from_count(e.num_syllables));

    // Every entry lands in exactly one bucket.
    let total: usize = groups.values().map(|v| v.len()).sum();
    assert_eq!(total, entries.len());

    // The captured body has 2-, 3-, and 4-syllable rhymes.
    let keys: Vec<_> = groups.keys().cloned().collect();
    assert_eq!(
        keys,
        vec![GroupKey::Number(2), GroupKey::Number(3), GroupKey::Number(4)]
    );

    // API order survives within each bucket.
    let two: Vec<_> = groups[&GroupKey::Number(2)]
        .iter()
        .map(|e| e.word.as_str())
        .collect();
    assert_eq!(two, vec!["fretful", "netful", "threatful", "debtful"]);

    let text = render::render_grouped(&groups);
    assert!(text.starts_with("2 syllables:\n  fretful\n"));
    assert!(text.contains("3 syllables:\n  regretful\n"));
}

#[test]
fn test_wire_body_groups_as_opaque_records_by_field_rule() {
    // The grouper accepts the raw wire records without the typed layer:
    // the body is just a sequence of field→value mappings.
    let records: Vec<Value> =
        serde_json::from_str(SAMPLE_RHYMES_JSON).expect("captured body is valid JSON");

    let result = group(&records, &KeyRule::Field("numSyllables"))
        .expect("field rule should not fail");

    assert_eq!(result.record_count(), records.len());
    let keys: Vec<_> = result.keys().cloned().collect();
    assert_eq!(
        keys,
        vec![GroupKey::Number(2), GroupKey::Number(3), GroupKey::Number(4)]
    );

    // Field-rule grouping of the wire body agrees with typed grouping of
    // the parsed entries.
    let entries = datamuse::parse_words_response(SAMPLE_RHYMES_JSON).unwrap();
    let typed = group_by(&entries, |e| GroupKey::from_count(e.num_syllables));
    for (key, members) in result.iter() {
        let typed_words: Vec<_> = typed[key].iter().map(|e| e.word.as_str()).collect();
        let value_words: Vec<_> = members
            .iter()
            .map(|r| r["word"].as_str().unwrap())
            .collect();
        assert_eq!(typed_words, value_words);
    }
}

#[test]
fn test_dev_mode_feeds_the_same_pipeline() {
    let dev = DevMode::new(100);
    let entries = dev
        .fetch_simulated_associations(REL_RHYME)
        .expect("canned fixture should parse");

    let groups = group_by(&entries, |e| GroupKey::from_count(e.num_syllables));
    let text = render::render_grouped(&groups);
    assert!(text.contains("regretful"));
    assert!(!text.is_empty());
}

// ---------------------------------------------------------------------------
// Degraded metadata
// ---------------------------------------------------------------------------

#[test]
fn test_entries_without_syllable_metadata_render_under_unknown() {
    let body = r#"[
        {"word":"known","score":10,"numSyllables":1},
        {"word":"mystery","score":5}
    ]"#;
    let entries = datamuse::parse_words_response(body).unwrap();
    let groups = group_by(&entries, |e| GroupKey::from_count(e.num_syllables));

    let text = render::render_grouped(&groups);
    let known = text.find("1 syllable:").expect("known bucket");
    let unknown = text.find("unknown syllable count:").expect("unknown bucket");
    assert!(known < unknown, "unknown bucket renders last");
    assert!(text.contains("  mystery\n"));
}
