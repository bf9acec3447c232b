/// Relation registry for the word lookup service.
///
/// Defines the canonical list of Datamuse word relations this service
/// supports, along with their CLI verbs and rendering behavior. This is the
/// single source of truth for relation codes — all other modules should
/// reference relations from here rather than hardcoding query parameters.

pub use crate::model::{REL_MEANS_LIKE, REL_RHYME};

// ---------------------------------------------------------------------------
// Relation metadata
// ---------------------------------------------------------------------------

/// Metadata for a single supported word relation.
pub struct Relation {
    /// Datamuse `/words` query parameter, e.g. "rel_rhy".
    pub code: &'static str,
    /// Verb accepted on the command line, e.g. "rhyme".
    pub command: &'static str,
    /// Human-readable label used in output headings.
    pub label: &'static str,
    /// Description of what the relation returns.
    pub description: &'static str,
    /// Whether results render grouped by syllable count. Relations where
    /// sound matters (rhymes, near rhymes, sounds-like) group well by
    /// syllables; meaning-based relations read better flat, best match
    /// first.
    pub group_by_syllables: bool,
    /// A term known to return results, used by the verification harness.
    pub probe_term: &'static str,
}

/// All word relations exposed by this service, primary lookups first.
///
/// Sources:
///   - Query parameters: Datamuse API reference (www.datamuse.com/api)
pub static RELATION_REGISTRY: &[Relation] = &[
    Relation {
        code: REL_RHYME,
        command: "rhyme",
        label: "rhymes with",
        description: "Perfect rhymes, e.g. forgetful -> regretful.",
        group_by_syllables: true,
        probe_term: "forgetful",
    },
    Relation {
        code: REL_MEANS_LIKE,
        command: "similar",
        label: "has a meaning like",
        description: "Words with a similar meaning, e.g. happy -> content.",
        group_by_syllables: false,
        probe_term: "happy",
    },
    Relation {
        code: "rel_nry",
        command: "near-rhyme",
        label: "nearly rhymes with",
        description: "Approximate rhymes, e.g. forgetful -> special.",
        group_by_syllables: true,
        probe_term: "forgetful",
    },
    Relation {
        code: "sl",
        command: "sounds-like",
        label: "sounds like",
        description: "Phonetically close words, e.g. jirraf -> giraffe.",
        group_by_syllables: true,
        probe_term: "elefant",
    },
    Relation {
        code: "rel_ant",
        command: "antonym",
        label: "is an antonym of",
        description: "Words with the opposite meaning, e.g. late -> early.",
        group_by_syllables: false,
        probe_term: "late",
    },
];

/// Returns the query codes for all supported relations as a `Vec<&str>`.
pub fn all_codes() -> Vec<&'static str> {
    RELATION_REGISTRY.iter().map(|r| r.code).collect()
}

/// Looks up a relation by its CLI verb. Returns `None` if not found.
pub fn find_by_command(command: &str) -> Option<&'static Relation> {
    RELATION_REGISTRY.iter().find(|r| r.command == command)
}

/// Looks up a relation by its Datamuse query code. Returns `None` if not found.
pub fn find_by_code(code: &str) -> Option<&'static Relation> {
    RELATION_REGISTRY.iter().find(|r| r.code == code)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_codes_are_valid_datamuse_parameters() {
        // Datamuse query parameters are short lowercase ASCII, optionally
        // with one underscore ("rel_rhy", "ml"). A malformed code would make
        // the API ignore the constraint and return unrelated words.
        for relation in RELATION_REGISTRY {
            assert!(
                !relation.code.is_empty() && relation.code.len() <= 8,
                "code for '{}' should be 1-8 chars, got '{}'",
                relation.command,
                relation.code
            );
            assert!(
                relation
                    .code
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c == '_'),
                "code for '{}' should be lowercase ascii, got '{}'",
                relation.command,
                relation.code
            );
        }
    }

    #[test]
    fn test_no_duplicate_codes_or_commands() {
        let mut codes = std::collections::HashSet::new();
        let mut commands = std::collections::HashSet::new();
        for relation in RELATION_REGISTRY {
            assert!(
                codes.insert(relation.code),
                "duplicate code '{}' found in RELATION_REGISTRY",
                relation.code
            );
            assert!(
                commands.insert(relation.command),
                "duplicate command '{}' found in RELATION_REGISTRY",
                relation.command
            );
        }
    }

    #[test]
    fn test_registry_contains_primary_relations() {
        // The two relations the service was built around must always be
        // present; everything else is optional enrichment.
        let codes = all_codes();
        assert!(codes.contains(&REL_RHYME), "registry missing perfect rhymes");
        assert!(
            codes.contains(&REL_MEANS_LIKE),
            "registry missing similar-meaning lookup"
        );
    }

    #[test]
    fn test_find_by_command_returns_correct_entry() {
        let relation = find_by_command("rhyme").expect("rhyme verb should be registered");
        assert_eq!(relation.code, REL_RHYME);
        assert!(relation.group_by_syllables);
    }

    #[test]
    fn test_find_by_command_returns_none_for_unknown_verb() {
        assert!(find_by_command("anagram").is_none());
    }

    #[test]
    fn test_find_by_code_round_trips_registry() {
        for relation in RELATION_REGISTRY {
            let found = find_by_code(relation.code).expect("code should round-trip");
            assert_eq!(found.command, relation.command);
        }
    }

    #[test]
    fn test_all_relations_have_probe_terms() {
        for relation in RELATION_REGISTRY {
            assert!(
                !relation.probe_term.is_empty(),
                "relation '{}' must have a probe term for verification",
                relation.command
            );
            assert!(
                !relation.probe_term.contains(' '),
                "probe term for '{}' should be a single word",
                relation.command
            );
        }
    }

    #[test]
    fn test_meaning_relations_render_flat() {
        assert!(!find_by_code(REL_MEANS_LIKE).unwrap().group_by_syllables);
        assert!(!find_by_code("rel_ant").unwrap().group_by_syllables);
    }

    #[test]
    fn test_all_codes_helper_matches_registry_length() {
        assert_eq!(all_codes().len(), RELATION_REGISTRY.len());
    }
}
