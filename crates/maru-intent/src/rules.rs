//! Weighted keyword classifier.

use crate::types::{ClassifiedIntent, Intent, IntentConfig};

struct IntentScore {
    intent: Intent,
    score: f64,
    signal: Option<String>,
}

fn score_rule(text: &str, keywords: &[String], intent: Intent, weight: f64) -> IntentScore {
    let matches: Vec<&String> = keywords
        .iter()
        .filter(|kw| text.contains(kw.to_lowercase().as_str()))
        .collect();
    if matches.is_empty() {
        return IntentScore {
            intent,
            score: 0.0,
            signal: None,
        };
    }
    let top: Vec<_> = matches.iter().take(3).map(|s| s.as_str()).collect();
    IntentScore {
        intent,
        score: weight * matches.len() as f64,
        signal: Some(format!("{} ({})", intent, top.join(", "))),
    }
}

fn sigmoid(distance: f64, steepness: f64) -> f64 {
    1.0 / (1.0 + (-steepness * distance).exp())
}

/// Classify a query by weighted keyword scoring.
///
/// The winning category's margin over the runner-up sets the
/// confidence; below the threshold the result falls back to smalltalk.
pub fn classify(query: &str, config: &IntentConfig) -> ClassifiedIntent {
    let text = query.trim().to_lowercase();
    if text.is_empty() {
        return ClassifiedIntent {
            intent: Intent::Smalltalk,
            score: 0.0,
            confidence: 1.0,
            signals: Vec::new(),
        };
    }

    let mut scores: Vec<IntentScore> = config
        .rules
        .iter()
        .map(|rule| score_rule(&text, &rule.keywords, rule.intent, rule.weight))
        .collect();
    scores.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    let signals: Vec<String> = scores.iter().filter_map(|s| s.signal.clone()).collect();
    let Some(best) = scores.first() else {
        return ClassifiedIntent {
            intent: Intent::Smalltalk,
            score: 0.0,
            confidence: 1.0,
            signals,
        };
    };
    if best.score == 0.0 {
        return ClassifiedIntent {
            intent: Intent::Smalltalk,
            score: 0.0,
            confidence: 1.0,
            signals,
        };
    }

    let runner_up = scores.get(1).map_or(0.0, |s| s.score);
    let margin = best.score - runner_up;
    let confidence = sigmoid(margin, config.confidence_steepness);
    if confidence < config.confidence_threshold {
        tracing::debug!(query, best = %best.intent, confidence, "ambiguous query, falling back");
        return ClassifiedIntent {
            intent: Intent::Smalltalk,
            score: best.score,
            confidence,
            signals,
        };
    }

    ClassifiedIntent {
        intent: best.intent,
        score: best.score,
        confidence,
        signals,
    }
}
