//! Domain Models
//!
//! Attribute records for tracked cryptocurrencies.
//! Sustainability scores are stored as exact decimals in `[0, 1]`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of recent price movement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Rising,
    Stable,
    Falling,
}

/// Three-step categorical level used for market cap, energy use and volatility
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

/// Market sentiment towards an asset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

impl std::fmt::Display for PriceTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceTrend::Rising => write!(f, "rising"),
            PriceTrend::Stable => write!(f, "stable"),
            PriceTrend::Falling => write!(f, "falling"),
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Low => write!(f, "low"),
            Level::Medium => write!(f, "medium"),
            Level::High => write!(f, "high"),
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
            Sentiment::Positive => write!(f, "positive"),
        }
    }
}

/// Attributes of one tracked asset
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Recent price direction
    pub price_trend: PriceTrend,

    /// Market capitalization bucket
    pub market_cap: Level,

    /// Energy consumption bucket
    pub energy_use: Level,

    /// Sustainability as a fraction in `[0, 1]`
    #[serde(with = "rust_decimal::serde::float")]
    pub sustainability_score: Decimal,

    /// Price volatility bucket
    pub volatility: Level,

    /// Market sentiment
    pub sentiment: Sentiment,

    /// Short feature blurbs, in display order
    pub key_features: Vec<String>,

    /// Date the record was last reviewed
    pub last_updated: NaiveDate,
}

impl AssetRecord {
    /// Sustainability on a 0-10 scale, one decimal place (e.g. `3.0`)
    pub fn sustainability_out_of_ten(&self) -> String {
        format!("{:.1}", self.sustainability_score * Decimal::TEN)
    }

    pub fn is_rising(&self) -> bool {
        self.price_trend == PriceTrend::Rising
    }

    /// Whether the score lies within `[0, 1]`
    pub fn has_valid_score(&self) -> bool {
        self.sustainability_score >= Decimal::ZERO && self.sustainability_score <= Decimal::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(score: Decimal) -> AssetRecord {
        AssetRecord {
            price_trend: PriceTrend::Stable,
            market_cap: Level::High,
            energy_use: Level::Medium,
            sustainability_score: score,
            volatility: Level::Medium,
            sentiment: Sentiment::Neutral,
            key_features: vec!["Smart contracts".into()],
            last_updated: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        }
    }

    #[test]
    fn test_score_scaling() {
        assert_eq!(record(dec!(0.3)).sustainability_out_of_ten(), "3.0");
        assert_eq!(record(dec!(0.85)).sustainability_out_of_ten(), "8.5");
        assert_eq!(record(dec!(1)).sustainability_out_of_ten(), "10.0");
    }

    #[test]
    fn test_score_bounds() {
        assert!(record(dec!(0)).has_valid_score());
        assert!(record(dec!(1)).has_valid_score());
        assert!(!record(dec!(1.2)).has_valid_score());
        assert!(!record(dec!(-0.1)).has_valid_score());
    }

    #[test]
    fn test_enums_serialize_lowercase() {
        let json = serde_json::to_value(record(dec!(0.6))).unwrap();
        assert_eq!(json["price_trend"], "stable");
        assert_eq!(json["market_cap"], "high");
        assert_eq!(json["sentiment"], "neutral");
        assert_eq!(json["last_updated"], "2025-01-15");
        assert_eq!(json["sustainability_score"], 0.6);
    }
}
