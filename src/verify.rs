//! Relation Verification Module
//!
//! Framework for testing the relation registry against the live API to
//! determine which configured relations are accessible and returning data.
//!
//! Use this before adding new relations to validate their query codes.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::time::Duration;

use crate::config::ServiceConfig;
use crate::ingest::datamuse;
use crate::relations::{Relation, RELATION_REGISTRY};

// ============================================================================
// Verification Results
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    pub timestamp: String,
    pub base_url: String,
    pub relation_results: Vec<RelationVerification>,
    pub summary: VerificationSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    pub relations_total: usize,
    pub relations_working: usize,
    pub relations_failed: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationVerification {
    pub code: String,
    pub command: String,
    pub probe_term: String,
    pub status: VerificationStatus,
    pub api_responsive: bool,
    pub sample_word_count: usize,
    /// Whether at least one returned entry carried a syllable count.
    /// Grouped rendering degrades to a single "unknown" bucket without it.
    pub syllable_metadata_available: bool,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum VerificationStatus {
    Success,
    PartialSuccess,
    Failed,
}

// ============================================================================
// Relation Verification
// ============================================================================

pub fn verify_relation(
    client: &reqwest::blocking::Client,
    base_url: &str,
    relation: &Relation,
) -> RelationVerification {
    let mut result = RelationVerification {
        code: relation.code.to_string(),
        command: relation.command.to_string(),
        probe_term: relation.probe_term.to_string(),
        status: VerificationStatus::Failed,
        api_responsive: false,
        sample_word_count: 0,
        syllable_metadata_available: false,
        error_message: None,
    };

    match datamuse::fetch_associations(client, base_url, relation.code, relation.probe_term, 20) {
        Ok(entries) => {
            result.api_responsive = true;
            result.sample_word_count = entries.len();
            result.syllable_metadata_available =
                entries.iter().any(|e| e.num_syllables.is_some());

            result.status = if relation.group_by_syllables && !result.syllable_metadata_available {
                VerificationStatus::PartialSuccess
            } else {
                VerificationStatus::Success
            };
        }
        Err(e) => {
            // A reachable API that merely knows nothing about the probe term
            // still counts as responsive.
            if matches!(e, crate::model::LookupError::NoResults(_)) {
                result.api_responsive = true;
                result.status = VerificationStatus::PartialSuccess;
            }
            result.error_message = Some(e.to_string());
        }
    }

    result
}

// ============================================================================
// Full Verification Runner
// ============================================================================

pub fn run_full_verification(config: &ServiceConfig) -> Result<VerificationReport, Box<dyn Error>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.api.timeout_secs))
        .build()?;

    let mut report = VerificationReport {
        timestamp: Utc::now().to_rfc3339(),
        base_url: config.api.base_url.clone(),
        relation_results: Vec::new(),
        summary: VerificationSummary {
            relations_total: RELATION_REGISTRY.len(),
            relations_working: 0,
            relations_failed: 0,
        },
    };

    println!("Verifying {} relations against {} ...", RELATION_REGISTRY.len(), config.api.base_url);

    for relation in RELATION_REGISTRY {
        print!("  {} ({}) ... ", relation.command, relation.code);
        let result = verify_relation(&client, &config.api.base_url, relation);

        match result.status {
            VerificationStatus::Success => {
                println!("✓ OK ({} words)", result.sample_word_count);
                report.summary.relations_working += 1;
            }
            VerificationStatus::PartialSuccess => {
                println!(
                    "⚠ Partial ({} words, syllables: {})",
                    result.sample_word_count, result.syllable_metadata_available
                );
                report.summary.relations_working += 1;
            }
            VerificationStatus::Failed => {
                println!(
                    "✗ FAILED: {}",
                    result.error_message.as_deref().unwrap_or("Unknown")
                );
                report.summary.relations_failed += 1;
            }
        }

        report.relation_results.push(result);
    }

    Ok(report)
}

pub fn print_summary(report: &VerificationReport) {
    println!("\n═══════════════════════════════════════════════════════════");
    println!("VERIFICATION SUMMARY");
    println!("═══════════════════════════════════════════════════════════");
    println!();
    println!(
        "Relations: {}/{} working  ({} failed)",
        report.summary.relations_working,
        report.summary.relations_total,
        report.summary.relations_failed
    );
    println!();

    let success_rate = if report.summary.relations_total > 0 {
        (report.summary.relations_working as f64 / report.summary.relations_total as f64) * 100.0
    } else {
        0.0
    };

    println!(
        "Overall Success Rate: {:.1}% ({}/{})",
        success_rate, report.summary.relations_working, report.summary.relations_total
    );
    println!("═══════════════════════════════════════════════════════════");
}
