use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Classified user-query category; drives which downstream tool runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Real-estate listing questions (rent, lease, deposits).
    ListingSearch,
    /// Nearby-place questions (gyms, cafes, stations).
    PlaceSearch,
    /// PT-shop membership, pricing, trainer questions.
    Membership,
    Greeting,
    /// Fallback when nothing scores confidently.
    Smalltalk,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::ListingSearch => "listing_search",
            Intent::PlaceSearch => "place_search",
            Intent::Membership => "membership",
            Intent::Greeting => "greeting",
            Intent::Smalltalk => "smalltalk",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scored category: its keywords and their weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentRule {
    pub intent: Intent,
    pub keywords: Vec<String>,
    pub weight: f64,
}

/// Tool binding: primary tool plus fallbacks for an intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolBinding {
    pub primary: String,
    pub fallback: Vec<String>,
}

/// Full classification config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentConfig {
    pub rules: Vec<IntentRule>,
    pub tools: HashMap<Intent, ToolBinding>,
    pub confidence_steepness: f64,
    pub confidence_threshold: f64,
}

/// Classification result.
#[derive(Debug, Clone)]
pub struct ClassifiedIntent {
    pub intent: Intent,
    pub score: f64,
    pub confidence: f64,
    pub signals: Vec<String>,
}
