use crate::config::default_intent_config;
use crate::rules::classify;
use crate::selector::{fallback_chain, select_tool};
use crate::types::Intent;

// ========== Classification ==========

#[test]
fn test_classify_listing_ko() {
    let config = default_intent_config();
    let result = classify("강남역 근처 원룸 전세 매물 있나요?", &config);
    assert_eq!(result.intent, Intent::ListingSearch);
    assert!(result.confidence >= config.confidence_threshold);
    assert!(!result.signals.is_empty());
}

#[test]
fn test_classify_listing_en() {
    let config = default_intent_config();
    let result = classify("Any studio apartment listing with a small deposit?", &config);
    assert_eq!(result.intent, Intent::ListingSearch);
}

#[test]
fn test_classify_place_search() {
    let config = default_intent_config();
    let result = classify("주변에 괜찮은 카페랑 약국 있어?", &config);
    assert_eq!(result.intent, Intent::PlaceSearch);
}

#[test]
fn test_classify_membership() {
    let config = default_intent_config();
    let result = classify("피티 등록 가격 상담 받고 싶어요", &config);
    assert_eq!(result.intent, Intent::Membership);
}

#[test]
fn test_classify_greeting() {
    let config = default_intent_config();
    assert_eq!(classify("안녕하세요!", &config).intent, Intent::Greeting);
    assert_eq!(classify("hello there", &config).intent, Intent::Greeting);
}

#[test]
fn test_classify_no_match_falls_back() {
    let config = default_intent_config();
    let result = classify("오늘 날씨 어때?", &config);
    assert_eq!(result.intent, Intent::Smalltalk);
    assert_eq!(result.score, 0.0);
}

#[test]
fn test_classify_empty_input() {
    let config = default_intent_config();
    let result = classify("   ", &config);
    assert_eq!(result.intent, Intent::Smalltalk);
    assert_eq!(result.score, 0.0);
    assert!(result.signals.is_empty());
}

#[test]
fn test_classify_deterministic() {
    let config = default_intent_config();
    let a = classify("근처 헬스장 어디가 좋아요?", &config);
    let b = classify("근처 헬스장 어디가 좋아요?", &config);
    assert_eq!(a.intent, b.intent);
    assert_eq!(a.score, b.score);
}

#[test]
fn test_classify_margin_drives_confidence() {
    let config = default_intent_config();
    // Many listing keywords, nothing else: wide margin, high confidence
    let strong = classify("아파트 전세 월세 매매 보증금", &config);
    assert_eq!(strong.intent, Intent::ListingSearch);
    assert!(strong.confidence > 0.9);
}

#[test]
fn test_classify_case_insensitive() {
    let config = default_intent_config();
    assert_eq!(
        classify("HELLO, any GYM nearby?", &config).intent,
        Intent::PlaceSearch
    );
}

// ========== Tool Selection ==========

#[test]
fn test_select_tool() {
    let config = default_intent_config();
    assert_eq!(select_tool(Intent::PlaceSearch, &config).primary, "local_search");
    assert_eq!(select_tool(Intent::Membership, &config).primary, "membership_faq");
}

#[test]
fn test_fallback_chain() {
    let config = default_intent_config();
    let chain = fallback_chain(Intent::ListingSearch, &config);
    assert_eq!(chain, vec!["listing_lookup".to_string(), "local_search".to_string()]);
}

#[test]
fn test_select_tool_unbound_intent() {
    let mut config = default_intent_config();
    config.tools.remove(&Intent::Greeting);
    assert_eq!(select_tool(Intent::Greeting, &config).primary, "canned_reply");
}

// ========== Wire Names ==========

#[test]
fn test_intent_as_str() {
    assert_eq!(Intent::ListingSearch.as_str(), "listing_search");
    assert_eq!(Intent::Smalltalk.as_str(), "smalltalk");
}

#[test]
fn test_intent_serializes_to_string() {
    let json = serde_json::to_string(&Intent::PlaceSearch).unwrap();
    assert_eq!(json, r#""place_search""#);
}
