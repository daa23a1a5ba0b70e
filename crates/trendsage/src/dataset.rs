//! Asset Dataset
//!
//! Read-only reference data: an insertion-ordered mapping from asset
//! identifier to [`AssetRecord`]. Built once at startup and shared behind an
//! `Arc`; nothing mutates it afterwards.

use std::fmt;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{AdvisorError, Result};
use crate::model::{AssetRecord, Level, PriceTrend, Sentiment};

/// Ordered, immutable collection of tracked assets
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    entries: Vec<(String, AssetRecord)>,
}

impl Dataset {
    /// Validate and build a dataset, keeping the given order.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, AssetRecord)>) -> Result<Self> {
        let mut collected: Vec<(String, AssetRecord)> = Vec::new();

        for (name, record) in entries {
            if collected.iter().any(|(existing, _)| *existing == name) {
                return Err(AdvisorError::DuplicateAsset(name));
            }
            if !record.has_valid_score() {
                return Err(AdvisorError::ScoreOutOfRange {
                    asset: name,
                    score: record.sustainability_score,
                });
            }
            collected.push((name, record));
        }

        if collected.is_empty() {
            return Err(AdvisorError::EmptyDataset);
        }

        Ok(Self { entries: collected })
    }

    /// Parse a JSON object of `{ "<asset>": { ...record } }`, preserving key order
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: OrderedEntries = serde_json::from_str(json)?;
        Self::from_entries(raw.0)
    }

    /// Load from a JSON file on disk
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let dataset = Self::from_json_str(&contents)?;
        tracing::info!(
            "Loaded {} assets from {}",
            dataset.len(),
            path.as_ref().display()
        );
        Ok(dataset)
    }

    /// The three-asset reference dataset
    pub fn builtin() -> Self {
        let updated = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap_or_default();

        let entries = vec![
            (
                "Bitcoin".to_string(),
                AssetRecord {
                    price_trend: PriceTrend::Rising,
                    market_cap: Level::High,
                    energy_use: Level::High,
                    sustainability_score: dec!(0.3),
                    volatility: Level::Medium,
                    sentiment: Sentiment::Positive,
                    key_features: features(&["Store of value", "Decentralized", "Limited supply"]),
                    last_updated: updated,
                },
            ),
            (
                "Ethereum".to_string(),
                AssetRecord {
                    price_trend: PriceTrend::Stable,
                    market_cap: Level::High,
                    energy_use: Level::Medium,
                    sustainability_score: dec!(0.6),
                    volatility: Level::Medium,
                    sentiment: Sentiment::Positive,
                    key_features: features(&["Smart contracts", "DeFi ecosystem", "Proof of Stake"]),
                    last_updated: updated,
                },
            ),
            (
                "Cardano".to_string(),
                AssetRecord {
                    price_trend: PriceTrend::Rising,
                    market_cap: Level::Medium,
                    energy_use: Level::Low,
                    sustainability_score: dec!(0.8),
                    volatility: Level::High,
                    sentiment: Sentiment::Neutral,
                    key_features: features(&[
                        "Peer-reviewed research",
                        "Energy efficient",
                        "Proof of Stake",
                    ]),
                    last_updated: updated,
                },
            ),
        ];

        Self { entries }
    }

    /// Iterate `(name, record)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AssetRecord)> {
        self.entries.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Names of assets whose record satisfies `predicate`, in insertion order
    pub fn names_where(&self, predicate: impl Fn(&AssetRecord) -> bool) -> Vec<&str> {
        self.iter()
            .filter(|&(_, record)| predicate(record))
            .map(|(name, _)| name)
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&AssetRecord> {
        self.iter().find(|(n, _)| *n == name).map(|(_, record)| record)
    }

    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|(name, _)| name).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::builtin()
    }
}

fn features(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, record) in &self.entries {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}

/// Unvalidated entries in document order
struct OrderedEntries(Vec<(String, AssetRecord)>);

impl<'de> Deserialize<'de> for OrderedEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = OrderedEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of asset name to asset record")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, record)) = access.next_entry::<String, AssetRecord>()? {
                    entries.push((name, record));
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}
