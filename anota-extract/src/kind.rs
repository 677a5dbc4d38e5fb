//! Income/expense classification by keyword.

use anota_core::TransactionKind;
use regex::Regex;
use tracing::debug;

use crate::error::Result;
use crate::lexicon::{alternation, EXPENSE_KEYWORDS, INCOME_FALLBACK, INCOME_KEYWORDS};

#[derive(Debug, Clone)]
pub struct KindClassifier {
    income_re: Regex,
    expense_re: Regex,
}

impl KindClassifier {
    pub fn new() -> Result<Self> {
        Ok(Self {
            income_re: Regex::new(&format!(r"\b({})\b", alternation(INCOME_KEYWORDS)))?,
            expense_re: Regex::new(&format!(r"\b({})\b", alternation(EXPENSE_KEYWORDS)))?,
        })
    }

    /// Classify lowercased `text`. Income words win over expense words.
    pub fn classify(&self, text: &str) -> TransactionKind {
        if let Some(m) = self.income_re.find(text) {
            debug!(keyword = m.as_str(), "income keyword");
            return TransactionKind::Income;
        }
        if let Some(m) = self.expense_re.find(text) {
            debug!(keyword = m.as_str(), "expense keyword");
            return TransactionKind::Expense;
        }

        // Neither list matched on word boundaries; retry the core income
        // verbs as plain substrings ("recebia", "recebimentos").
        if INCOME_FALLBACK.iter().any(|w| text.contains(w)) {
            debug!("income by substring fallback");
            TransactionKind::Income
        } else {
            debug!("no keyword, defaulting to expense");
            TransactionKind::Expense
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> TransactionKind {
        KindClassifier::new().unwrap().classify(text)
    }

    #[test]
    fn test_income_keywords() {
        assert_eq!(classify("recebi 150 reais de salário hoje"), TransactionKind::Income);
        assert_eq!(classify("entrou o bonus"), TransactionKind::Income);
        assert_eq!(classify("fiz uma transferência"), TransactionKind::Income);
    }

    #[test]
    fn test_expense_keywords() {
        assert_eq!(classify("paguei 45,90 na farmácia ontem"), TransactionKind::Expense);
        assert_eq!(classify("boleto da luz"), TransactionKind::Expense);
        assert_eq!(classify("saída de 30 no cartão"), TransactionKind::Expense);
    }

    #[test]
    fn test_income_wins_over_expense() {
        assert_eq!(classify("paguei a conta e recebi o troco"), TransactionKind::Income);
    }

    #[test]
    fn test_pix_counts_as_income() {
        assert_eq!(classify("mandei um pix de 20"), TransactionKind::Income);
    }

    #[test]
    fn test_whole_words_only() {
        // "compras" is not "compra", "pagos" is not "pago"
        assert_eq!(classify("compras pagos"), TransactionKind::Expense);
        assert_eq!(classify("recebimentos"), TransactionKind::Income);
    }

    #[test]
    fn test_substring_fallback() {
        assert_eq!(classify("eu recebia 10"), TransactionKind::Income);
        assert_eq!(classify("pizza"), TransactionKind::Expense);
        assert_eq!(classify(""), TransactionKind::Expense);
    }
}
