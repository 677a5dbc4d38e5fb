//! Category tagging with three fallbacks:
//!
//! 1. the word after a preposition ("na farmácia", "de salário")
//! 2. the first known category keyword contained in the text
//! 3. the last word that is not a preposition, amount unit, verb or date word

use regex::Regex;
use tracing::debug;

use crate::error::Result;
use crate::lexicon::{alternation, is_stopword, CATEGORY_KEYWORDS, PREPOSITIONS, WORD_CHARS};

#[derive(Debug, Clone)]
pub struct CategoryTagger {
    prepositional_re: Regex,
    word_re: Regex,
}

impl CategoryTagger {
    pub fn new() -> Result<Self> {
        // Prepositions are not anchored on a word boundary, and the capture is
        // lazy so it stops at the first whitespace, digit or "r$".
        let prepositional_re = Regex::new(&format!(
            r"(?:{})\s+(?P<label>[{}\s]+?)(?:\s|$|\d|r\$)",
            alternation(PREPOSITIONS),
            WORD_CHARS
        ))?;
        let word_re = Regex::new(&format!(r"\b[{}]+\b", WORD_CHARS))?;
        Ok(Self {
            prepositional_re,
            word_re,
        })
    }

    /// Tag lowercased `text`. A preposition followed only by whitespace
    /// yields `Some("")`; `None` only when no tier finds anything.
    pub fn tag(&self, text: &str) -> Option<String> {
        self.after_preposition(text)
            .or_else(|| keyword(text))
            .or_else(|| self.last_relevant_word(text))
    }

    fn after_preposition(&self, text: &str) -> Option<String> {
        let caps = self.prepositional_re.captures(text)?;
        // A whitespace-only capture still settles the category, as "".
        let label = caps["label"].trim();
        debug!(label, "category from prepositional phrase");
        Some(label.to_string())
    }

    fn last_relevant_word(&self, text: &str) -> Option<String> {
        let word = self
            .word_re
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|w| !is_stopword(w))
            .last()?;
        debug!(word, "category from last relevant word");
        Some(word.to_string())
    }
}

fn keyword(text: &str) -> Option<String> {
    let hit = CATEGORY_KEYWORDS.iter().find(|k| text.contains(*k))?;
    debug!(keyword = *hit, "category from keyword list");
    Some(hit.to_string())
}
