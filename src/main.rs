/// Word lookup service binary.
///
/// Usage:
///   wordlook_service <verb> <term>     one lookup (verbs: rhyme, similar, ...)
///   wordlook_service verify            probe every registered relation
///   wordlook_service interactive       session with saved-words commands

use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use wordlook_service::analysis::groupings::{group_by, GroupKey};
use wordlook_service::config::ServiceConfig;
use wordlook_service::ingest::datamuse;
use wordlook_service::logging::{self, DataSource, LogLevel};
use wordlook_service::model::{LookupError, WordEntry};
use wordlook_service::relations::{self, Relation, RELATION_REGISTRY};
use wordlook_service::render;
use wordlook_service::saved::SavedWordList;
use wordlook_service::verify;

const DEFAULT_CONFIG_PATH: &str = "wordlook.toml";

fn main() {
    if let Err(e) = run() {
        logging::error(DataSource::System, None, &e.to_string());
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    let config_path =
        env::var("WORDLOOK_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = ServiceConfig::load_or_default(&config_path)?;

    logging::init_logger(
        LogLevel::from_config(&config.logging.level),
        config.logging.file.as_deref(),
        config.logging.console_timestamps,
    );

    let args: Vec<String> = env::args().skip(1).collect();
    match args.split_first() {
        None => {
            print_usage();
            std::process::exit(2);
        }
        Some((verb, _)) if verb == "verify" => {
            let report = verify::run_full_verification(&config)?;
            verify::print_summary(&report);
            if report.summary.relations_working == 0 {
                return Err("no relations are working".into());
            }
            Ok(())
        }
        Some((verb, _)) if verb == "interactive" => run_interactive(&config),
        Some((verb, rest)) => {
            if rest.is_empty() {
                print_usage();
                return Err(format!("verb '{}' needs a term", verb).into());
            }
            let term = rest.join(" ");
            let relation = relations::find_by_command(verb)
                .ok_or_else(|| LookupError::UnknownRelation(verb.to_string()))?;
            let client = build_client(&config)?;
            let entries = lookup(&client, &config, relation, &term)?;
            print!("{}", render_lookup(relation, &term, &entries));
            Ok(())
        }
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  wordlook_service <verb> <term>");
    eprintln!("  wordlook_service verify");
    eprintln!("  wordlook_service interactive");
    eprintln!();
    eprintln!("Verbs:");
    for relation in RELATION_REGISTRY {
        eprintln!("  {:12} {}", relation.command, relation.description);
    }
}

fn build_client(config: &ServiceConfig) -> Result<reqwest::blocking::Client, Box<dyn Error>> {
    Ok(reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.api.timeout_secs))
        .build()?)
}

/// One lookup against the configured API, with structured failure logging.
fn lookup(
    client: &reqwest::blocking::Client,
    config: &ServiceConfig,
    relation: &Relation,
    term: &str,
) -> Result<Vec<WordEntry>, LookupError> {
    logging::debug(
        DataSource::Datamuse,
        Some(term),
        &format!("lookup {} ({})", relation.command, relation.code),
    );

    match datamuse::fetch_associations(
        client,
        &config.api.base_url,
        relation.code,
        term,
        config.api.max_results,
    ) {
        Ok(entries) => {
            logging::info(
                DataSource::Datamuse,
                Some(term),
                &format!("{} results for '{}'", entries.len(), term),
            );
            Ok(entries)
        }
        Err(e) => {
            logging::log_datamuse_failure(term, relation.command, &e);
            Err(e)
        }
    }
}

/// Renders one lookup's results: grouped by syllable count for sound-based
/// relations, flat best-first otherwise.
fn render_lookup(relation: &Relation, term: &str, entries: &[WordEntry]) -> String {
    let mut out = format!(
        "{} words where each {} \"{}\":\n\n",
        entries.len(),
        relation.label,
        term
    );
    if relation.group_by_syllables {
        let groups = group_by(entries, |e| GroupKey::from_count(e.num_syllables));
        out.push_str(&render::render_grouped(&groups));
    } else {
        out.push_str(&render::render_flat(entries));
    }
    out
}

// ---------------------------------------------------------------------------
// Interactive session
// ---------------------------------------------------------------------------

fn run_interactive(config: &ServiceConfig) -> Result<(), Box<dyn Error>> {
    let client = build_client(config)?;
    let mut saved = SavedWordList::new();
    let mut last_results: Vec<WordEntry> = Vec::new();
    let mut last_lookup: Option<(&'static Relation, String)> = None;
    let mut lookups_total = 0usize;
    let mut lookups_failed = 0usize;

    println!("wordlook interactive session. Type 'help' for commands.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, arg) = match line.split_once(' ') {
            Some((c, a)) => (c, a.trim()),
            None => (line, ""),
        };

        match command {
            "quit" | "exit" => break,
            "help" => {
                println!("Commands:");
                for relation in RELATION_REGISTRY {
                    println!("  {} <term>", relation.command);
                }
                println!("  save <n>       save the n-th word of the last lookup");
                println!("  unsave <word>  drop a word from the saved list");
                println!("  saved          show the saved list");
                println!("  quit");
            }
            "saved" => print!("{}", render::render_saved(&saved)),
            "save" => match (arg.parse::<usize>(), last_lookup.as_ref()) {
                (Ok(n), Some((relation, term))) if n >= 1 && n <= last_results.len() => {
                    let word = &last_results[n - 1].word;
                    if saved.add(word, relation.code, term) {
                        println!("Saved '{}'.", word);
                    } else {
                        println!("'{}' is already saved.", word);
                    }
                }
                _ => println!(
                    "save needs a number between 1 and {} (run a lookup first)",
                    last_results.len()
                ),
            },
            "unsave" => {
                if saved.remove(arg) {
                    println!("Removed '{}'.", arg);
                } else {
                    println!("'{}' is not in the saved list.", arg);
                }
            }
            verb => match relations::find_by_command(verb) {
                Some(relation) if !arg.is_empty() => {
                    lookups_total += 1;
                    match lookup(&client, config, relation, arg) {
                        Ok(entries) => {
                            let (text, display_order) = render_numbered(relation, arg, &entries);
                            print!("{}", text);
                            // save <n> resolves against the numbers just
                            // printed, so keep results in display order.
                            last_results = display_order;
                            last_lookup = Some((relation, arg.to_string()));
                        }
                        Err(e) => {
                            lookups_failed += 1;
                            println!("Lookup failed: {}", e);
                        }
                    }
                }
                Some(_) => println!("{} needs a term", verb),
                None => println!("Unknown command '{}'. Type 'help'.", verb),
            },
        }
    }

    logging::log_lookup_summary(lookups_total, lookups_total - lookups_failed, lookups_failed);
    Ok(())
}

/// Interactive results are always numbered so `save <n>` can reference
/// them; grouped relations keep their syllable headings above the numbers.
///
/// Returns the rendered text plus the entries in the order they were
/// numbered, which for grouped relations differs from API order.
fn render_numbered(
    relation: &Relation,
    term: &str,
    entries: &[WordEntry],
) -> (String, Vec<WordEntry>) {
    let mut out = format!(
        "{} words where each {} \"{}\":\n",
        entries.len(),
        relation.label,
        term
    );
    if relation.group_by_syllables {
        let groups = group_by(entries, |e| GroupKey::from_count(e.num_syllables));
        let mut ordered = Vec::with_capacity(entries.len());
        for (key, members) in &groups {
            out.push_str(&render::syllable_heading(key));
            out.push_str(":\n");
            for member in members {
                ordered.push(member.clone());
                out.push_str(&format!("{:3}. {}\n", ordered.len(), member.word));
            }
        }
        (out, ordered)
    } else {
        out.push_str(&render::render_flat(entries));
        (out, entries.to_vec())
    }
}
