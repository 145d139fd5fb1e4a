use serde::Serialize;

// Ranks are 1-based and skip sponsored entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub rank: u32,
    pub name: String,
    pub category: String,
    pub review_count: u32,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResult {
    pub my_rank: Option<u32>,
    pub competitors: Vec<Listing>,
}
