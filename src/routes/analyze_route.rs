use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;

use crate::{
    domain::{
        inference::suggest_keywords, keyword::core_keyword, place::RankingResult,
        report::AnalysisReport,
    },
    services::{
        place_crawler::{PlaceCrawler, PlaceSearchOutcome},
        search_ad::{SearchAdClient, SearchVolumeResult},
        volume_analyzer::{related_keywords, summarize_volume},
    },
};

const RELATED_KEYWORD_LIMIT: usize = 10;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub keyword: String,
    #[serde(default, rename = "placeUrl", alias = "targetUrl")]
    pub place_url: Option<String>,
}

#[post("/analyze")]
pub async fn analyze_keyword(
    body: web::Json<AnalyzeRequest>,
    search_ad: web::Data<SearchAdClient>,
    crawler: web::Data<PlaceCrawler>,
) -> HttpResponse {
    let keyword = body.keyword.trim();
    if keyword.is_empty() {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "detail": "keyword must not be empty" }));
    }

    // The metrics tool indexes the bare business keyword; the organic
    // results are crawled with the region qualifier intact.
    let core = core_keyword(keyword);
    log::info!("Analyzing keyword: {} (core: {})", keyword, core);

    let (volume, place) = tokio::join!(
        search_ad.fetch_keyword_stats(&core),
        crawler.crawl_ranking(keyword, body.place_url.as_deref()),
    );

    let search_volume = summarize_volume(&volume, &core);
    let related = related_keywords(&volume, RELATED_KEYWORD_LIMIT);

    let ranking = match place {
        PlaceSearchOutcome::Ranked(ranking) => ranking,
        PlaceSearchOutcome::Failed { detail } => {
            log::error!("Ranking section degraded: {}", detail);
            RankingResult::default()
        }
    };
    let keywords = suggest_keywords(&ranking.competitors);

    HttpResponse::Ok().json(AnalysisReport {
        success: true,
        search_volume,
        related_keywords: related,
        ranking,
        keywords,
    })
}

// Credential and connectivity check; echoes the raw keyword tool records.
#[get("/test-api")]
pub async fn test_search_ad(search_ad: web::Data<SearchAdClient>) -> HttpResponse {
    match search_ad.fetch_keyword_stats("영어학원").await {
        SearchVolumeResult::Records(records) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "data": { "keywordList": records },
        })),
        SearchVolumeResult::Failed { detail } => HttpResponse::Ok().json(serde_json::json!({
            "success": false,
            "error": detail,
        })),
    }
}
