//! Transaction record emitted for one input sentence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of the money flow
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expense")]
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

/// One extracted transaction.
///
/// Field order is the JSON key order: `type`, `amount`, `category`, `date`,
/// `description`. `installments` is only written when present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Absent when no numeric token was found
    pub amount: Option<f64>,
    pub category: Option<String>,
    /// Serialized as YYYY-MM-DD
    pub date: NaiveDate,
    /// The lowercased input, verbatim
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installments: Option<u32>,
}

impl TransactionRecord {
    pub fn new(
        kind: TransactionKind,
        amount: Option<f64>,
        category: Option<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            amount,
            category,
            date,
            description: description.into(),
            installments: None,
        }
    }

    pub fn with_installments(mut self, installments: Option<u32>) -> Self {
        self.installments = installments;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TransactionRecord {
        TransactionRecord::new(
            TransactionKind::Expense,
            Some(45.9),
            Some("farmácia".to_string()),
            NaiveDate::from_ymd_opt(2025, 6, 9).unwrap(),
            "paguei 45,90 na farmácia ontem",
        )
    }

    #[test]
    fn test_json_key_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"type":"expense","amount":45.9,"category":"farmácia","date":"2025-06-09","description":"paguei 45,90 na farmácia ontem"}"#
        );
    }

    #[test]
    fn test_absent_fields_are_null() {
        let mut record = sample();
        record.amount = None;
        record.category = None;
        let value: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert!(value["amount"].is_null());
        assert!(value["category"].is_null());
        assert_eq!(value.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_installments_written_when_present() {
        let record = sample().with_installments(Some(3));
        let value: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["installments"], 3);
        assert_eq!(value.as_object().unwrap().len(), 6);
    }

    #[test]
    fn test_whole_amount_keeps_decimal_point() {
        let mut record = sample();
        record.amount = Some(150.0);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""amount":150.0"#));
    }

    #[test]
    fn test_kind_names_match_json() {
        for kind in [TransactionKind::Income, TransactionKind::Expense] {
            assert_eq!(serde_json::to_value(kind).unwrap(), kind.as_str());
        }
    }
}
