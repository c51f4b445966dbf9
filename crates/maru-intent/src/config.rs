//! Default classification config with bilingual keyword tables.

use crate::types::{Intent, IntentConfig, IntentRule, ToolBinding};
use std::collections::HashMap;

fn s(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn tool_map(bindings: &[(Intent, &str, &[&str])]) -> HashMap<Intent, ToolBinding> {
    bindings
        .iter()
        .map(|(intent, primary, fallback)| {
            (
                *intent,
                ToolBinding {
                    primary: primary.to_string(),
                    fallback: fallback.iter().map(|s| s.to_string()).collect(),
                },
            )
        })
        .collect()
}

/// Default classification configuration.
pub fn default_intent_config() -> IntentConfig {
    IntentConfig {
        rules: vec![
            IntentRule {
                intent: Intent::ListingSearch,
                keywords: s(&[
                    "아파트", "오피스텔", "원룸", "투룸", "빌라", "전세", "월세", "매매",
                    "매물", "보증금", "평수", "입주", "중개",
                    "apartment", "listing", "lease", "deposit", "studio", "villa",
                    "move in", "for rent", "for sale",
                ]),
                weight: 1.0,
            },
            IntentRule {
                intent: Intent::PlaceSearch,
                keywords: s(&[
                    "근처", "주변", "가까운", "헬스장", "카페", "맛집", "식당", "지하철",
                    "역", "약국", "병원", "편의점", "마트", "은행", "학교",
                    "nearby", "around here", "closest", "gym", "cafe", "restaurant",
                    "station", "pharmacy", "hospital",
                ]),
                weight: 1.0,
            },
            IntentRule {
                intent: Intent::Membership,
                keywords: s(&[
                    "회원권", "피티", "등록", "수강", "가격", "비용", "얼마", "상담",
                    "트레이너", "수업", "기간", "환불",
                    "membership", "personal training", "trainer", "price", "cost",
                    "sign up", "refund", "lesson",
                ]),
                weight: 1.0,
            },
            IntentRule {
                intent: Intent::Greeting,
                keywords: s(&[
                    "안녕", "반갑", "하이", "처음",
                    "hello", "hi ", "hey", "good morning", "good evening",
                ]),
                weight: 0.8,
            },
        ],
        tools: tool_map(&[
            (Intent::ListingSearch, "listing_lookup", &["local_search"]),
            (Intent::PlaceSearch, "local_search", &[]),
            (Intent::Membership, "membership_faq", &[]),
            (Intent::Greeting, "canned_reply", &[]),
            (Intent::Smalltalk, "canned_reply", &[]),
        ]),
        confidence_steepness: 4.0,
        confidence_threshold: 0.6,
    }
}

/// The default config instance.
pub static INTENT_CONFIG: std::sync::LazyLock<IntentConfig> =
    std::sync::LazyLock::new(default_intent_config);
