//! Query Classifier
//!
//! Case-insensitive substring matching against fixed keyword sets.
//! Every intent is tested independently, so one query may raise several flags.

use serde::Serialize;

/// Intent categories, declared in response priority order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    Sustainability,
    Trending,
    Growth,
    Risk,
    Features,
    Compare,
}

impl Intent {
    /// All intents, highest priority first
    pub const ALL: [Intent; 6] = [
        Intent::Sustainability,
        Intent::Trending,
        Intent::Growth,
        Intent::Risk,
        Intent::Features,
        Intent::Compare,
    ];

    /// Lowercase trigger substrings; any one of them raises the flag
    pub fn triggers(self) -> &'static [&'static str] {
        match self {
            Intent::Sustainability => &["sustainable", "eco"],
            Intent::Trending => &["trending", "rising"],
            Intent::Growth => &["best", "growth"],
            Intent::Risk => &["risk", "safe"],
            Intent::Features => &["feature", "what can"],
            Intent::Compare => &["compare", "difference"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Sustainability => "sustainability",
            Intent::Trending => "trending",
            Intent::Growth => "growth",
            Intent::Risk => "risk",
            Intent::Features => "features",
            Intent::Compare => "compare",
        }
    }

    fn matches(self, normalized: &str) -> bool {
        self.triggers().iter().any(|t| normalized.contains(t))
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-intent flags for one query. Serializes as `{"sustainability": bool, ...}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct QueryAnalysis {
    pub sustainability: bool,
    pub trending: bool,
    pub growth: bool,
    pub risk: bool,
    pub features: bool,
    pub compare: bool,
}

impl QueryAnalysis {
    pub fn is_set(&self, intent: Intent) -> bool {
        match intent {
            Intent::Sustainability => self.sustainability,
            Intent::Trending => self.trending,
            Intent::Growth => self.growth,
            Intent::Risk => self.risk,
            Intent::Features => self.features,
            Intent::Compare => self.compare,
        }
    }

    pub fn set(&mut self, intent: Intent, value: bool) {
        let flag = match intent {
            Intent::Sustainability => &mut self.sustainability,
            Intent::Trending => &mut self.trending,
            Intent::Growth => &mut self.growth,
            Intent::Risk => &mut self.risk,
            Intent::Features => &mut self.features,
            Intent::Compare => &mut self.compare,
        };
        *flag = value;
    }

    /// Raised intents, in priority order
    pub fn intents(&self) -> Vec<Intent> {
        Intent::ALL.into_iter().filter(|i| self.is_set(*i)).collect()
    }

    pub fn is_empty(&self) -> bool {
        !Intent::ALL.iter().any(|i| self.is_set(*i))
    }
}

/// Classify free text into intent flags
pub fn analyze(text: &str) -> QueryAnalysis {
    let normalized = text.to_lowercase();
    let mut analysis = QueryAnalysis::default();

    for intent in Intent::ALL {
        analysis.set(intent, intent.matches(&normalized));
    }

    tracing::debug!(intents = ?analysis.intents(), "Classified query");
    analysis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_trigger_raises_only_its_intent() {
        for intent in Intent::ALL {
            for trigger in intent.triggers() {
                let analysis = analyze(trigger);
                assert!(analysis.is_set(intent), "{trigger} should raise {intent}");
                assert_eq!(analysis.intents(), vec![intent], "{trigger} raised extra intents");
            }
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert!(analyze("Is Cardano SUSTAINABLE?").sustainability);
        assert!(analyze("What Can it do").features);
        assert!(analyze("DIFFERENCE between them").compare);
    }

    #[test]
    fn test_substring_matching() {
        // "eco" inside "economy", "safe" inside "unsafe"
        assert!(analyze("the economy").sustainability);
        assert!(analyze("unsafe bet").risk);
        assert!(analyze("features please").features);
    }

    #[test]
    fn test_multiple_intents() {
        let analysis = analyze("is the best sustainable coin trending?");
        assert!(analysis.sustainability);
        assert!(analysis.trending);
        assert!(analysis.growth);
        assert!(!analysis.risk);
        assert_eq!(
            analysis.intents(),
            vec![Intent::Sustainability, Intent::Trending, Intent::Growth]
        );
    }

    #[test]
    fn test_no_match() {
        assert!(analyze("goodbye").is_empty());
        assert!(analyze("").is_empty());
        // "what" alone is not "what can"
        assert!(!analyze("what is bitcoin").features);
    }

    #[test]
    fn test_serializes_as_flag_map() {
        let json = serde_json::to_value(analyze("what's trending")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sustainability": false,
                "trending": true,
                "growth": false,
                "risk": false,
                "features": false,
                "compare": false,
            })
        );
    }
}
