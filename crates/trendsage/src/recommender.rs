//! Recommender
//!
//! Picks exactly one canned response for a [`QueryAnalysis`].
//!
//! ```text
//! sustainability ─▶ trending ─▶ growth ─▶ risk ─▶ features ─▶ compare ─▶ fallback
//! ```
//!
//! [`RULES`] is walked top to bottom and the first raised intent renders the
//! reply. Filtered lists keep dataset order; an empty filter still renders its
//! sentence with an empty list.

use crate::classifier::{Intent, QueryAnalysis};
use crate::dataset::Dataset;
use crate::model::{AssetRecord, Level};

/// Reply when no intent is raised
pub const FALLBACK_RESPONSE: &str =
    "I'm not sure about that. Try asking about sustainability, trends, or features.";

/// One priority slot: the intent it answers and how to render it
#[derive(Clone, Copy)]
pub struct Rule {
    pub intent: Intent,
    pub render: fn(&Dataset) -> String,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("intent", &self.intent).finish_non_exhaustive()
    }
}

/// Response rules, highest priority first
pub static RULES: [Rule; 6] = [
    Rule { intent: Intent::Sustainability, render: render_sustainability },
    Rule { intent: Intent::Trending, render: render_trending },
    Rule { intent: Intent::Growth, render: render_growth },
    Rule { intent: Intent::Risk, render: render_risk },
    Rule { intent: Intent::Features, render: render_features },
    Rule { intent: Intent::Compare, render: render_comparison },
];

/// The rule that answers `analysis`, or `None` for the fallback
pub fn select_rule(analysis: &QueryAnalysis) -> Option<&'static Rule> {
    RULES.iter().find(|rule| analysis.is_set(rule.intent))
}

/// Render the response for `analysis`
pub fn recommend(analysis: &QueryAnalysis, dataset: &Dataset) -> String {
    match select_rule(analysis) {
        Some(rule) => {
            tracing::debug!(intent = %rule.intent, "Rendering response");
            (rule.render)(dataset)
        }
        None => {
            tracing::debug!("No intent matched, using fallback");
            FALLBACK_RESPONSE.to_string()
        }
    }
}

fn render_sustainability(dataset: &Dataset) -> String {
    // Strict comparison keeps the first asset on ties
    let mut best: Option<(&str, &AssetRecord)> = None;
    for (name, record) in dataset.iter() {
        if best.is_none_or(|(_, top)| record.sustainability_score > top.sustainability_score) {
            best = Some((name, record));
        }
    }

    match best {
        Some((name, _)) => {
            format!("Invest in {name}! It's eco-friendly and has long-term potential!")
        }
        None => FALLBACK_RESPONSE.to_string(),
    }
}

fn render_trending(dataset: &Dataset) -> String {
    let names = dataset.names_where(AssetRecord::is_rising);
    format!("These cryptos are trending up: {}", names.join(", "))
}

fn render_growth(dataset: &Dataset) -> String {
    let names = dataset.names_where(|r| r.is_rising() && r.market_cap == Level::High);
    format!("These cryptos look promising for long-term growth: {}", names.join(", "))
}

fn render_risk(dataset: &Dataset) -> String {
    let names = dataset.names_where(|r| r.volatility == Level::Low && r.market_cap == Level::High);
    format!("These cryptos are the safer picks right now: {}", names.join(", "))
}

fn render_features(dataset: &Dataset) -> String {
    dataset
        .iter()
        .map(|(name, record)| format!("{name}: {}", record.key_features.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Side-by-side comparison of every asset, one block per asset
pub(crate) fn render_comparison(dataset: &Dataset) -> String {
    dataset
        .iter()
        .map(|(name, record)| {
            format!(
                "{name}:\n- Sustainability: {}/10\n- Market Cap: {}\n- Volatility: {}\n- Sentiment: {}",
                record.sustainability_out_of_ten(),
                record.market_cap,
                record.volatility,
                record.sentiment,
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::analyze;
    use rust_decimal_macros::dec;

    fn reply(query: &str) -> String {
        recommend(&analyze(query), &Dataset::builtin())
    }

    #[test]
    fn test_rule_order() {
        let order: Vec<Intent> = RULES.iter().map(|r| r.intent).collect();
        assert_eq!(order, Intent::ALL.to_vec());
    }

    #[test]
    fn test_sustainability() {
        assert_eq!(
            reply("is cardano sustainable?"),
            "Invest in Cardano! It's eco-friendly and has long-term potential!"
        );
    }

    #[test]
    fn test_sustainability_tie_keeps_first() {
        let base = Dataset::builtin();
        let mut btc = base.get("Bitcoin").unwrap().clone();
        let mut eth = base.get("Ethereum").unwrap().clone();
        btc.sustainability_score = dec!(0.9);
        eth.sustainability_score = dec!(0.9);
        let dataset = Dataset::from_entries(vec![
            ("Bitcoin".to_string(), btc),
            ("Ethereum".to_string(), eth),
        ])
        .unwrap();

        assert_eq!(
            recommend(&analyze("eco"), &dataset),
            "Invest in Bitcoin! It's eco-friendly and has long-term potential!"
        );
    }

    #[test]
    fn test_trending() {
        assert_eq!(reply("what's trending"), "These cryptos are trending up: Bitcoin, Cardano");
    }

    #[test]
    fn test_growth() {
        assert_eq!(
            reply("best growth coin"),
            "These cryptos look promising for long-term growth: Bitcoin"
        );
    }

    #[test]
    fn test_risk_renders_empty_list() {
        assert_eq!(reply("safe risk option"), "These cryptos are the safer picks right now: ");
    }

    #[test]
    fn test_features() {
        assert_eq!(
            reply("what can these do?"),
            "Bitcoin: Store of value, Decentralized, Limited supply\n\
             Ethereum: Smart contracts, DeFi ecosystem, Proof of Stake\n\
             Cardano: Peer-reviewed research, Energy efficient, Proof of Stake"
        );
    }

    #[test]
    fn test_fallback() {
        assert_eq!(reply("goodbye"), FALLBACK_RESPONSE);
        assert_eq!(reply(""), FALLBACK_RESPONSE);
    }

    #[test]
    fn test_priority_first_match_wins() {
        assert_eq!(
            reply("sustainable and trending"),
            "Invest in Cardano! It's eco-friendly and has long-term potential!"
        );
        assert!(reply("rising growth").starts_with("These cryptos are trending up"));
        assert!(reply("compare features").starts_with("Bitcoin: Store of value"));
        assert!(reply("risk difference").starts_with("These cryptos are the safer picks"));
    }

    #[test]
    fn test_comparison_blocks() {
        let text = reply("compare them");
        assert_eq!(text, render_comparison(&Dataset::builtin()));

        let blocks: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(blocks.len(), 3);
        assert_eq!(
            blocks[0],
            "Bitcoin:\n- Sustainability: 3.0/10\n- Market Cap: high\n- Volatility: medium\n- Sentiment: positive"
        );
        assert!(blocks[1].starts_with("Ethereum:\n- Sustainability: 6.0/10"));
        assert!(blocks[2].starts_with("Cardano:\n- Sustainability: 8.0/10"));
        for block in blocks {
            assert_eq!(block.lines().filter(|l| l.starts_with("- ")).count(), 4);
        }
    }
}
