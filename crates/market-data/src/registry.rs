//! Static roster of tracked tickers.
//!
//! The ten mega-cap names the dashboard follows, with their Japanese display
//! names and sector labels. The order here is the order of `items` in every
//! persisted snapshot; consumers iterating the roster observe the same order
//! every time.

use crate::models::TickerSpec;

/// The fixed, ordered mega-cap roster.
pub const TICKERS: &[TickerSpec] = &[
    TickerSpec {
        symbol: "NVDA",
        name_jp: "エヌビディア",
        company: "NVIDIA",
        sector: "半導体・電子テクノロジー",
    },
    TickerSpec {
        symbol: "MSFT",
        name_jp: "マイクロソフト",
        company: "Microsoft",
        sector: "テクノロジーサービス",
    },
    TickerSpec {
        symbol: "AMZN",
        name_jp: "アマゾン・ドット・コム",
        company: "Amazon.com",
        sector: "小売・インターネット",
    },
    TickerSpec {
        symbol: "GOOGL",
        name_jp: "アルファベット（クラスA）",
        company: "Alphabet Class A",
        sector: "テクノロジーサービス",
    },
    TickerSpec {
        symbol: "AVGO",
        name_jp: "ブロードコム",
        company: "Broadcom",
        sector: "半導体・電子テクノロジー",
    },
    TickerSpec {
        symbol: "META",
        name_jp: "メタ・プラットフォームズ",
        company: "Meta Platforms",
        sector: "コミュニケーションサービス",
    },
    TickerSpec {
        symbol: "TSLA",
        name_jp: "テスラ",
        company: "Tesla",
        sector: "自動車・耐久消費財",
    },
    TickerSpec {
        symbol: "LLY",
        name_jp: "イーライリリー",
        company: "Eli Lilly and Co.",
        sector: "ヘルスケア",
    },
    TickerSpec {
        symbol: "V",
        name_jp: "ビザ",
        company: "Visa",
        sector: "金融",
    },
    TickerSpec {
        symbol: "MA",
        name_jp: "マスターカード",
        company: "Mastercard",
        sector: "金融",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_roster_has_ten_tickers() {
        assert_eq!(TICKERS.len(), 10);
    }

    #[test]
    fn test_roster_order_is_stable() {
        let symbols: Vec<&str> = TICKERS.iter().map(|t| t.symbol).collect();
        assert_eq!(
            symbols,
            ["NVDA", "MSFT", "AMZN", "GOOGL", "AVGO", "META", "TSLA", "LLY", "V", "MA"]
        );
    }

    #[test]
    fn test_roster_symbols_are_unique() {
        let symbols: HashSet<&str> = TICKERS.iter().map(|t| t.symbol).collect();
        assert_eq!(symbols.len(), TICKERS.len());
    }

    #[test]
    fn test_roster_metadata_is_populated() {
        for ticker in TICKERS {
            assert!(!ticker.symbol.is_empty());
            assert!(!ticker.name_jp.is_empty());
            assert!(!ticker.company.is_empty());
            assert!(!ticker.sector.is_empty());
        }
    }
}
