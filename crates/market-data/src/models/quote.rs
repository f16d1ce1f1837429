use serde::{Deserialize, Serialize};

use super::ticker::TickerSpec;

/// Normalized result of one successful per-ticker fetch.
///
/// The serde renames produce the wire keys the dashboard consumes (`nameJP`,
/// `changePct`, `marketCapB`). The two numeric fields are structurally
/// nullable: a source value that is absent or not a number becomes `None`
/// and serializes as JSON `null`, never as zero or a string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Exchange ticker symbol
    pub symbol: String,

    /// Japanese display name
    #[serde(rename = "nameJP")]
    pub name_jp: String,

    /// Company name
    pub company: String,

    /// Sector label
    pub sector: String,

    /// Percentage change on the day, when the quote endpoint provided one
    #[serde(rename = "changePct")]
    pub change_pct: Option<f64>,

    /// Market capitalization in billions, as provided by the profile endpoint
    #[serde(rename = "marketCapB")]
    pub market_cap_b: Option<f64>,
}

impl QuoteRecord {
    /// Assemble a record from a roster entry plus the two extracted fields.
    pub fn new(
        ticker: &TickerSpec,
        change_pct: Option<f64>,
        market_cap_b: Option<f64>,
    ) -> Self {
        Self {
            symbol: ticker.symbol.to_string(),
            name_jp: ticker.name_jp.to_string(),
            company: ticker.company.to_string(),
            sector: ticker.sector.to_string(),
            change_pct,
            market_cap_b,
        }
    }
}
