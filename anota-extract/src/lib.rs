//! anota-extract: heuristic extraction of income/expense records from
//! Portuguese sentences ("paguei 45,90 na farmácia ontem").
//!
//! Every field has its own extractor; [`Extractor`] runs them all over the
//! lowercased text. Pure: the reference date is passed in.

pub mod amount;
pub mod category;
pub mod date;
pub mod error;
pub mod extractor;
pub mod installments;
pub mod kind;
pub mod lexicon;

pub use error::{ExtractError, Result};
pub use extractor::{normalize, ExtractOptions, Extractor};
