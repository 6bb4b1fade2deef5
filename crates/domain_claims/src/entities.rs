//! Heuristic person-name recognizer
//!
//! Finds runs of two or more capitalized words (`Jane Smith`,
//! `Carlos Rivera`) that are not calendar words, policy names or common
//! sentence openers, and labels them `PER`. The token pattern is compiled on
//! first use; if compilation fails the recognizer stays disabled for the rest
//! of the process instead of failing the run.

use once_cell::sync::OnceCell;
use regex::Regex;
use tracing::warn;

use core_kernel::{CollaboratorStatus, Entity, EntityRecognizer, PortError};

/// Default word pattern
pub const DEFAULT_TOKEN_PATTERN: &str = r"\p{L}[\p{L}'\-]*";

const STOP_WORDS: &[&str] = &[
    // sentence openers and function words
    "A", "An", "And", "After", "As", "At", "Before", "But", "By", "During", "For", "From",
    "He", "Her", "His", "I", "In", "It", "My", "No", "On", "Our", "She", "The", "Their",
    "They", "This", "To", "We", "When", "While", "With",
    // claim vocabulary
    "Claim", "Claims", "Insurance", "Policy", "Health", "Auto", "Property", "Estimated",
    // calendar
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December", "Monday", "Tuesday", "Wednesday", "Thursday",
    "Friday", "Saturday", "Sunday",
];

/// Capitalized-name heuristic implementing [`EntityRecognizer`]
#[derive(Debug)]
pub struct PatternRecognizer {
    token_pattern: String,
    tokens: OnceCell<Option<Regex>>,
}

impl Default for PatternRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternRecognizer {
    pub fn new() -> Self {
        Self::with_token_pattern(DEFAULT_TOKEN_PATTERN)
    }

    /// Uses a custom word pattern; an invalid pattern leaves the recognizer
    /// disabled
    pub fn with_token_pattern(pattern: impl Into<String>) -> Self {
        Self {
            token_pattern: pattern.into(),
            tokens: OnceCell::new(),
        }
    }

    fn tokens(&self) -> Option<&Regex> {
        self.tokens
            .get_or_init(|| match Regex::new(&self.token_pattern) {
                Ok(regex) => Some(regex),
                Err(e) => {
                    warn!(error = %e, "Could not initialize entity recognizer; continuing without it");
                    None
                }
            })
            .as_ref()
    }
}

impl EntityRecognizer for PatternRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, PortError> {
        let tokens = self
            .tokens()
            .ok_or_else(|| PortError::disabled("entity recognizer failed to initialize"))?;

        let mut entities = Vec::new();
        let mut run: Vec<&str> = Vec::new();
        let mut last_end = 0;

        for token in tokens.find_iter(text) {
            let adjacent = text[last_end..token.start()]
                .chars()
                .all(|c| c == ' ' || c == '\t');
            if !adjacent {
                flush_run(&mut run, &mut entities);
            }

            let word = token.as_str();
            let word = word.strip_suffix("'s").unwrap_or(word);
            if is_name_word(word) {
                run.push(word);
            } else {
                flush_run(&mut run, &mut entities);
            }
            last_end = token.end();
        }
        flush_run(&mut run, &mut entities);

        Ok(entities)
    }

    fn status(&self) -> CollaboratorStatus {
        match self.tokens() {
            Some(_) => CollaboratorStatus::Enabled,
            None => CollaboratorStatus::disabled("entity recognizer failed to initialize"),
        }
    }
}

fn is_name_word(word: &str) -> bool {
    let mut chars = word.chars();
    let starts_upper = chars.next().is_some_and(char::is_uppercase);
    starts_upper && chars.any(char::is_lowercase) && !STOP_WORDS.contains(&word)
}

fn flush_run(run: &mut Vec<&str>, entities: &mut Vec<Entity>) {
    if run.len() >= 2 {
        entities.push(Entity::person(run.join(" ")));
    }
    run.clear();
}
