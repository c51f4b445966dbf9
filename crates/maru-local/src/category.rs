use serde::{Deserialize, Serialize};
use std::fmt;

/// Category group codes of the local-search API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    RealEstateAgency,
    Cafe,
    Restaurant,
    SubwayStation,
    Pharmacy,
    Hospital,
    ConvenienceStore,
    Mart,
    School,
    Bank,
    CultureFacility,
}

impl PlaceCategory {
    /// Wire code sent as `category_group_code`.
    pub fn code(&self) -> &'static str {
        match self {
            PlaceCategory::RealEstateAgency => "AG2",
            PlaceCategory::Cafe => "CE7",
            PlaceCategory::Restaurant => "FD6",
            PlaceCategory::SubwayStation => "SW8",
            PlaceCategory::Pharmacy => "PM9",
            PlaceCategory::Hospital => "HP8",
            PlaceCategory::ConvenienceStore => "CS2",
            PlaceCategory::Mart => "MT1",
            PlaceCategory::School => "SC4",
            PlaceCategory::Bank => "BK9",
            PlaceCategory::CultureFacility => "CT1",
        }
    }

    /// Detect a category from query keywords. None means the search
    /// runs unfiltered.
    pub fn from_query(query: &str) -> Option<Self> {
        let q = query.to_lowercase();
        let table: &[(&[&str], PlaceCategory)] = &[
            (&["부동산", "중개", "공인중개", "real estate", "realtor"], PlaceCategory::RealEstateAgency),
            (&["카페", "커피", "cafe", "coffee"], PlaceCategory::Cafe),
            (&["맛집", "식당", "음식점", "restaurant", "food"], PlaceCategory::Restaurant),
            (&["지하철", "전철역", "subway", "station"], PlaceCategory::SubwayStation),
            (&["약국", "pharmacy"], PlaceCategory::Pharmacy),
            (&["병원", "의원", "hospital", "clinic"], PlaceCategory::Hospital),
            (&["편의점", "convenience"], PlaceCategory::ConvenienceStore),
            (&["마트", "mart", "grocery"], PlaceCategory::Mart),
            (&["학교", "school"], PlaceCategory::School),
            (&["은행", "bank"], PlaceCategory::Bank),
            (&["문화센터", "도서관", "library", "culture"], PlaceCategory::CultureFacility),
        ];
        table
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|kw| q.contains(kw)))
            .map(|(_, category)| *category)
    }
}

impl fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
