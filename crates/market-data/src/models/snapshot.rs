use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::quote::QuoteRecord;

/// The aggregate result of one complete, successful update run.
///
/// `items` preserves roster order exactly. A snapshot is only ever assembled
/// after every ticker fetched successfully; there is no partial variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Assembly time of the snapshot, not per-record fetch time
    pub updated: DateTime<Utc>,

    /// One record per roster ticker, in roster order
    pub items: Vec<QuoteRecord>,
}

impl Snapshot {
    /// Assemble a snapshot from a full set of records, stamping it with the
    /// current time.
    pub fn new(items: Vec<QuoteRecord>) -> Self {
        Self {
            updated: Utc::now(),
            items,
        }
    }
}
