//! One-pass extraction of a [`TransactionRecord`] from a sentence.

use anota_core::{TransactionKind, TransactionRecord};
use chrono::NaiveDate;
use tracing::debug;

use crate::amount::AmountParser;
use crate::category::CategoryTagger;
use crate::date::DateResolver;
use crate::error::Result;
use crate::installments::InstallmentDetector;
use crate::kind::KindClassifier;

/// Optional extraction passes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Fill `installments` from phrases like "em 3x"
    pub installments: bool,
}

/// Holds every compiled pattern; build once and reuse.
#[derive(Debug, Clone)]
pub struct Extractor {
    kind: KindClassifier,
    amount: AmountParser,
    category: CategoryTagger,
    date: DateResolver,
    installments: InstallmentDetector,
    options: ExtractOptions,
}

/// Lowercase the input. All matching runs on this form.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

impl Extractor {
    pub fn new() -> Result<Self> {
        Self::with_options(ExtractOptions::default())
    }

    pub fn with_options(options: ExtractOptions) -> Result<Self> {
        Ok(Self {
            kind: KindClassifier::new()?,
            amount: AmountParser::new()?,
            category: CategoryTagger::new()?,
            date: DateResolver::new()?,
            installments: InstallmentDetector::new()?,
            options,
        })
    }

    /// Extract every field of `text`. `today` anchors relative and partial
    /// dates and is the fallback date. Never fails.
    pub fn extract(&self, text: &str, today: NaiveDate) -> TransactionRecord {
        let text = normalize(text);

        let kind = self.kind.classify(&text);
        let amount = self.amount.parse(&text);
        let category = self.category.tag(&text);
        let date = self.date.resolve(&text, today);
        let installments = if self.options.installments {
            self.installments.detect(&text)
        } else {
            None
        };

        debug!(
            kind = kind.as_str(),
            ?amount,
            ?category,
            %date,
            ?installments,
            "extracted"
        );

        TransactionRecord::new(kind, amount, category, date, text).with_installments(installments)
    }

    pub fn classify_kind(&self, text: &str) -> TransactionKind {
        self.kind.classify(&normalize(text))
    }

    pub fn parse_amount(&self, text: &str) -> Option<f64> {
        self.amount.parse(&normalize(text))
    }

    pub fn tag_category(&self, text: &str) -> Option<String> {
        self.category.tag(&normalize(text))
    }

    pub fn resolve_date(&self, text: &str, today: NaiveDate) -> NaiveDate {
        self.date.resolve(&normalize(text), today)
    }

    /// Runs regardless of [`ExtractOptions::installments`].
    pub fn detect_installments(&self, text: &str) -> Option<u32> {
        self.installments.detect(&normalize(text))
    }
}
