//! Monetary amount parsing: "R$ 100", "100 reais", "45,90", "12.5".

use regex::Regex;
use tracing::debug;

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct AmountParser {
    amount_re: Regex,
}

impl AmountParser {
    pub fn new() -> Result<Self> {
        let amount_re = Regex::new(concat!(
            r"(?P<currency>r\$\s*)?",
            r"(?P<value>[0-9]{1,5}(?:[.,][0-9]{1,2})?)",
            r"\s*(?P<unit>reais|r\$)?"
        ))?;
        Ok(Self { amount_re })
    }

    /// First number in lowercased `text`, with a comma decimal separator
    /// accepted. Digits that belong to a date are not told apart.
    pub fn parse(&self, text: &str) -> Option<f64> {
        let caps = self.amount_re.captures(text)?;
        let raw = &caps["value"];
        let amount = raw.replace(',', ".").parse().ok();
        debug!(raw, ?amount, "amount token");
        amount
    }
}
