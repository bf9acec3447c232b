/// Integration tests against the live Datamuse API.
///
/// These tests verify:
/// 1. The `/words` endpoint returns data for each primary relation
/// 2. Syllable metadata arrives when requested (`md=s`)
/// 3. Full pipeline: API → parse → group → render
///
/// They are marked #[ignore] so normal CI builds don't depend on external
/// API availability. Run manually with:
///   cargo test --test datamuse_integration -- --ignored
///
/// Note: these make real API calls and may fail if the API is down,
/// rate-limiting, or unreachable from the test environment.

use std::time::Duration;

use wordlook_service::analysis::groupings::{group_by, GroupKey};
use wordlook_service::ingest::datamuse::{self, DATAMUSE_BASE_URL};
use wordlook_service::model::{REL_MEANS_LIKE, REL_RHYME};
use wordlook_service::relations::RELATION_REGISTRY;
use wordlook_service::render;

fn test_client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
}

#[test]
#[ignore] // Don't run in CI - depends on external API
fn live_rhyme_lookup_returns_syllable_tagged_words() {
    let client = test_client();

    let entries =
        datamuse::fetch_associations(&client, DATAMUSE_BASE_URL, REL_RHYME, "forgetful", 50)
            .expect("Datamuse request failed - check network connectivity");

    println!("✓ rel_rhy returned {} words for 'forgetful'", entries.len());
    assert!(!entries.is_empty(), "should receive at least one rhyme");

    for entry in &entries {
        assert!(!entry.word.is_empty());
    }

    // md=s is always requested; most rhymes should carry a syllable count.
    let with_syllables = entries.iter().filter(|e| e.num_syllables.is_some()).count();
    println!("  {} of {} entries have syllable counts", with_syllables, entries.len());
    assert!(
        with_syllables > 0,
        "syllable metadata missing entirely - did the API drop md=s?"
    );
}

#[test]
#[ignore] // Don't run in CI - depends on external API
fn live_similar_meaning_lookup_returns_scored_words() {
    let client = test_client();

    let entries =
        datamuse::fetch_associations(&client, DATAMUSE_BASE_URL, REL_MEANS_LIKE, "happy", 50)
            .expect("Datamuse request failed");

    println!("✓ ml returned {} words for 'happy'", entries.len());
    assert!(!entries.is_empty());

    // ml results come back best match first; scores should be non-increasing
    // wherever present.
    let scores: Vec<i64> = entries.iter().filter_map(|e| e.score).collect();
    for pair in scores.windows(2) {
        assert!(
            pair[0] >= pair[1],
            "API order should be best match first, got {:?} before {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
#[ignore] // Don't run in CI - depends on external API
fn live_lookup_pipeline_groups_and_renders() {
    let client = test_client();

    let entries =
        datamuse::fetch_associations(&client, DATAMUSE_BASE_URL, REL_RHYME, "cat", 100)
            .expect("Datamuse request failed");

    let groups = group_by(&entries, |e| GroupKey::from_count(e.num_syllables));
    let total: usize = groups.values().map(|v| v.len()).sum();
    assert_eq!(total, entries.len(), "grouping must not lose records");

    let text = render::render_grouped(&groups);
    println!("{}", text);
    assert!(!text.is_empty());
}

#[test]
#[ignore] // Don't run in CI - depends on external API
fn live_every_registered_relation_is_queryable() {
    let client = test_client();
    let mut failures = Vec::new();

    for relation in RELATION_REGISTRY {
        println!("\n🔍 Checking {} ({})...", relation.command, relation.code);

        match datamuse::fetch_associations(
            &client,
            DATAMUSE_BASE_URL,
            relation.code,
            relation.probe_term,
            20,
        ) {
            Ok(entries) => {
                println!("   ✓ {} words for probe '{}'", entries.len(), relation.probe_term);
            }
            Err(e) => {
                failures.push(format!("{} ({}): {}", relation.command, relation.code, e));
            }
        }
    }

    if !failures.is_empty() {
        println!("\n❌ FAILURES ({}):", failures.len());
        for failure in &failures {
            println!("   - {}", failure);
        }
        panic!("Relation probes failed for {} relation(s)", failures.len());
    }
}

#[test]
#[ignore] // Don't run in CI - depends on external API
fn live_gibberish_term_returns_no_results() {
    let client = test_client();

    let result = datamuse::fetch_associations(
        &client,
        DATAMUSE_BASE_URL,
        REL_RHYME,
        "xqzvwjkllpmt",
        20,
    );

    match result {
        Err(wordlook_service::model::LookupError::NoResults(term)) => {
            assert_eq!(term, "xqzvwjkllpmt");
        }
        other => panic!("gibberish term should yield NoResults, got {:?}", other),
    }
}
