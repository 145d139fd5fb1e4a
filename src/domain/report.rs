use serde::Serialize;

use crate::domain::{
    inference::KeywordSuggestion,
    place::RankingResult,
    search_volume::{RelatedKeyword, VolumeSummary},
};

// Sections degrade independently: a failed metrics call or crawl leaves
// its section in a placeholder state instead of failing the report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub success: bool,
    pub search_volume: VolumeSummary,
    pub related_keywords: Vec<RelatedKeyword>,
    pub ranking: RankingResult,
    pub keywords: Vec<KeywordSuggestion>,
}

#[cfg(test)]
mod tests {
    use super::AnalysisReport;
    use crate::domain::{
        inference::KeywordSuggestion,
        place::{Listing, RankingResult},
        search_volume::VolumeSummary,
    };

    #[test]
    fn serializes_to_the_wire_shape() {
        let report = AnalysisReport {
            success: true,
            search_volume: VolumeSummary {
                monthly_avg: 1100,
                avg_ctr: 0.8,
                competition: "낮음".to_string(),
                recommendation: "적극 추천".to_string(),
            },
            related_keywords: vec![],
            ranking: RankingResult {
                my_rank: None,
                competitors: vec![Listing {
                    rank: 1,
                    name: "스마트영어학원".to_string(),
                    category: "영어학원".to_string(),
                    review_count: 132,
                    url: "https://m.place.naver.com/place/111".to_string(),
                }],
            },
            keywords: vec![KeywordSuggestion {
                business_name: "스마트영어학원".to_string(),
                keywords: vec!["영어학원".to_string()],
            }],
        };

        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["searchVolume"]["monthlyAvg"], 1100);
        assert_eq!(value["searchVolume"]["competition"], "낮음");
        assert_eq!(value["ranking"]["myRank"], serde_json::Value::Null);
        assert_eq!(value["ranking"]["competitors"][0]["reviewCount"], 132);
        assert_eq!(value["keywords"][0]["businessName"], "스마트영어학원");
    }
}
