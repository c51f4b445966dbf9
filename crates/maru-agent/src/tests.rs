use crate::dispatcher::{AgentDispatcher, PlaceFinder};
use async_trait::async_trait;
use maru_core::{Envelope, Place};
use maru_intent::{default_intent_config, Intent};
use maru_local::PlaceCategory;
use std::sync::Arc;
use std::sync::Mutex;

struct StubFinder {
    places: Vec<Place>,
    calls: Mutex<Vec<(String, Option<PlaceCategory>)>>,
}

impl StubFinder {
    fn new(places: Vec<Place>) -> Self {
        Self {
            places,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl PlaceFinder for StubFinder {
    async fn find(&self, query: &str, category: Option<PlaceCategory>, _size: usize) -> Vec<Place> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), category));
        self.places.clone()
    }
}

fn place(name: &str) -> Place {
    Place {
        name: name.into(),
        address: "서울 강남구".into(),
        road_address: None,
        category: "부동산 > 중개업소".into(),
        phone: None,
        x: 127.0,
        y: 37.5,
        distance_m: Some(200),
    }
}

fn dispatcher(finder: StubFinder) -> (AgentDispatcher, Arc<StubFinder>) {
    let finder = Arc::new(finder);
    (
        AgentDispatcher::new(finder.clone(), default_intent_config(), 5),
        finder,
    )
}

// ========== Intent Routing ==========

#[tokio::test]
async fn test_dispatch_listing_uses_agency_category() {
    let (dispatcher, finder) = dispatcher(StubFinder::new(vec![place("마루 공인중개사")]));
    let reply = dispatcher.dispatch("강남 원룸 전세 매물 있어요?").await;
    assert_eq!(reply.intent, Intent::ListingSearch);
    assert_eq!(reply.places.len(), 1);
    assert!(reply.content.contains("마루 공인중개사"));

    let calls = finder.calls.lock().unwrap();
    assert_eq!(calls[0].1, Some(PlaceCategory::RealEstateAgency));
}

#[tokio::test]
async fn test_dispatch_place_search_detects_category() {
    let (dispatcher, finder) = dispatcher(StubFinder::new(vec![place("마루 약국")]));
    let reply = dispatcher.dispatch("근처 약국 어디 있어?").await;
    assert_eq!(reply.intent, Intent::PlaceSearch);

    let calls = finder.calls.lock().unwrap();
    assert_eq!(calls[0].1, Some(PlaceCategory::Pharmacy));
}

#[tokio::test]
async fn test_dispatch_place_search_unfiltered() {
    let (dispatcher, finder) = dispatcher(StubFinder::empty());
    dispatcher.dispatch("주변에 갈만한 곳 있어?").await;
    let calls = finder.calls.lock().unwrap();
    assert_eq!(calls[0].1, None);
}

#[tokio::test]
async fn test_dispatch_membership_no_finder_call() {
    let (dispatcher, finder) = dispatcher(StubFinder::empty());
    let reply = dispatcher.dispatch("피티 등록 가격 상담 받고 싶어요").await;
    assert_eq!(reply.intent, Intent::Membership);
    assert!(reply.places.is_empty());
    assert!(finder.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_dispatch_greeting() {
    let (dispatcher, _) = dispatcher(StubFinder::empty());
    let reply = dispatcher.dispatch("안녕하세요").await;
    assert_eq!(reply.intent, Intent::Greeting);
}

#[tokio::test]
async fn test_dispatch_smalltalk_fallback() {
    let (dispatcher, finder) = dispatcher(StubFinder::empty());
    let reply = dispatcher.dispatch("오늘 기분이 어때?").await;
    assert_eq!(reply.intent, Intent::Smalltalk);
    assert!(finder.calls.lock().unwrap().is_empty());
}

// ========== Degradation ==========

#[tokio::test]
async fn test_dispatch_empty_results_degrade() {
    let (dispatcher, _) = dispatcher(StubFinder::empty());
    let reply = dispatcher.dispatch("근처 카페 추천해줘").await;
    assert_eq!(reply.intent, Intent::PlaceSearch);
    assert!(reply.places.is_empty());
    assert!(reply.content.contains("찾지 못했어요"));
}

// ========== Wire Conversion ==========

#[tokio::test]
async fn test_reply_into_envelope() {
    let (dispatcher, _) = dispatcher(StubFinder::new(vec![place("마루 카페")]));
    let reply = dispatcher.dispatch("근처 카페 알려줘").await;
    match reply.into_envelope() {
        Envelope::Reply { intent, places, .. } => {
            assert_eq!(intent, "place_search");
            assert_eq!(places.len(), 1);
        }
        other => panic!("unexpected envelope: {other:?}"),
    }
}
