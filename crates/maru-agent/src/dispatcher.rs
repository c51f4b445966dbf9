use async_trait::async_trait;
use maru_core::{Envelope, Place};
use maru_intent::{classify, select_tool, Intent, IntentConfig};
use maru_local::{LocalSearchClient, PlaceCategory};
use std::sync::Arc;

/// Seam over the place-search backend so dispatch is testable without
/// the network.
#[async_trait]
pub trait PlaceFinder: Send + Sync {
    async fn find(&self, query: &str, category: Option<PlaceCategory>, size: usize) -> Vec<Place>;
}

#[async_trait]
impl PlaceFinder for LocalSearchClient {
    async fn find(&self, query: &str, category: Option<PlaceCategory>, size: usize) -> Vec<Place> {
        self.search_keyword(query, category, size).await
    }
}

/// One answered utterance.
#[derive(Debug, Clone)]
pub struct AgentReply {
    pub intent: Intent,
    pub content: String,
    pub places: Vec<Place>,
}

impl AgentReply {
    pub fn into_envelope(self) -> Envelope {
        Envelope::Reply {
            intent: self.intent.as_str().to_string(),
            content: self.content,
            places: self.places,
        }
    }
}

/// Classify → select tool → execute.
pub struct AgentDispatcher {
    finder: Arc<dyn PlaceFinder>,
    config: IntentConfig,
    page_size: usize,
}

impl AgentDispatcher {
    pub fn new(finder: Arc<dyn PlaceFinder>, config: IntentConfig, page_size: usize) -> Self {
        Self {
            finder,
            config,
            page_size,
        }
    }

    pub async fn dispatch(&self, query: &str) -> AgentReply {
        let classified = classify(query, &self.config);
        let tool = select_tool(classified.intent, &self.config);
        tracing::debug!(
            intent = %classified.intent,
            confidence = classified.confidence,
            tool = %tool.primary,
            "dispatching query"
        );

        match classified.intent {
            Intent::ListingSearch => {
                let places = self
                    .finder
                    .find(query, Some(PlaceCategory::RealEstateAgency), self.page_size)
                    .await;
                self.place_reply(
                    Intent::ListingSearch,
                    places,
                    "주변 중개업소를 찾았어요. 매물 상담은 아래 연락처로 문의해 주세요.",
                    "조건에 맞는 매물 정보를 찾지 못했어요. 지역이나 조건을 조금 바꿔볼까요?",
                )
            }
            Intent::PlaceSearch => {
                let category = PlaceCategory::from_query(query);
                let places = self.finder.find(query, category, self.page_size).await;
                self.place_reply(
                    Intent::PlaceSearch,
                    places,
                    "근처에서 이런 곳들을 찾았어요.",
                    "근처에서 맞는 곳을 찾지 못했어요. 다른 키워드로 검색해 볼까요?",
                )
            }
            Intent::Membership => AgentReply {
                intent: Intent::Membership,
                content: "회원권과 PT 등록은 상담 후 진행돼요. 원하시는 수업 종류와 기간을 알려주시면 안내해 드릴게요.".into(),
                places: Vec::new(),
            },
            Intent::Greeting => AgentReply {
                intent: Intent::Greeting,
                content: "안녕하세요! 매물 검색, 주변 장소 찾기, 회원권 상담을 도와드릴 수 있어요.".into(),
                places: Vec::new(),
            },
            Intent::Smalltalk => AgentReply {
                intent: Intent::Smalltalk,
                content: "잘 이해하지 못했어요. 매물, 주변 장소, 회원권에 대해 물어봐 주세요.".into(),
                places: Vec::new(),
            },
        }
    }

    fn place_reply(
        &self,
        intent: Intent,
        places: Vec<Place>,
        found: &str,
        empty: &str,
    ) -> AgentReply {
        let content = if places.is_empty() {
            empty.to_string()
        } else {
            let names: Vec<&str> = places.iter().take(3).map(|p| p.name.as_str()).collect();
            format!("{found} ({})", names.join(", "))
        };
        AgentReply {
            intent,
            content,
            places,
        }
    }
}
