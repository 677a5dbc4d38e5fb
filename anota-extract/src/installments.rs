//! Installment ("parcelas") detection: "em 3x", "2 parcelas", "parcelado em 4",
//! "em duas vezes".

use regex::Regex;
use tracing::debug;

use crate::error::Result;
use crate::lexicon::{number_word, NUMBER_WORDS};

const MAX_INSTALLMENTS: u64 = 100;

#[derive(Debug, Clone)]
pub struct InstallmentDetector {
    patterns: Vec<Regex>,
}

impl InstallmentDetector {
    pub fn new() -> Result<Self> {
        let words = NUMBER_WORDS
            .iter()
            .map(|(w, _)| *w)
            .collect::<Vec<_>>()
            .join("|");

        // Tried in order; the first pattern yielding a usable count wins.
        let sources = [
            r"(?:em\s+)?(?P<n>\d+)\s*(?:x|vezes|parcelas?)".to_string(),
            r"parcelad[oa]\s+(?:em\s+)?(?P<n>\d+)".to_string(),
            r"dividid[oa]\s+(?:em\s+)?(?P<n>\d+)".to_string(),
            r"(?P<n>\d+)\s*(?:x|vezes)\s+(?:de|sem\s+juros)".to_string(),
            format!(r"em\s+(?P<n>{words})\s+vezes"),
            format!(r"(?P<n>{words})\s+vezes"),
            r"(?P<n>\d+)\s*(?:vez|vezes)(?:\s+de)?".to_string(),
            r"em\s+(?P<n>\d+)\s*(?:parte|partes)".to_string(),
        ];

        let patterns = sources
            .iter()
            .map(|s| Regex::new(s))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Number of installments in lowercased `text`, if it is between 2 and 100.
    pub fn detect(&self, text: &str) -> Option<u32> {
        for re in &self.patterns {
            let Some(caps) = re.captures(text) else {
                continue;
            };
            let raw = &caps["n"];
            let count = raw
                .parse::<u64>()
                .ok()
                .or_else(|| number_word(raw).map(u64::from));

            if let Some(n) = count.filter(|n| (2..=MAX_INSTALLMENTS).contains(n)) {
                debug!(raw, n, "installments");
                return u32::try_from(n).ok();
            }
        }
        None
    }
}
