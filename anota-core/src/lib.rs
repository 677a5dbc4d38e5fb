//! anota-core: record types and calendar helpers shared by the extractor and the CLI

pub mod record;
pub mod time;

pub use record::{TransactionKind, TransactionRecord};
pub use time::{checked_ymd, shift_days};
