use std::time::Duration;

use fake_user_agent::get_chrome_rua;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::domain::place::{Listing, RankingResult};

const DESKTOP_SEARCH_URL: &str = "https://search.naver.com/search.naver";
const MOBILE_SEARCH_URL: &str = "https://m.search.naver.com/search.naver";
const PLACE_HOST: &str = "https://m.place.naver.com";

const CRAWL_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_COMPETITORS: usize = 10;
const MAX_CANDIDATES: usize = 20;

// Layout variants in priority order; the first selector with any match
// decides the layout for the whole page.
const LISTING_STRATEGIES: [&str; 5] = [
    "li.Bx",
    "li._item",
    "li.UhI72",
    "ul._list li",
    "div.place_list_wrap li",
];

pub enum PlaceSearchOutcome {
    Ranked(RankingResult),
    Failed { detail: String },
}

pub struct PlaceCrawler {
    client: reqwest::Client,
}

impl Default for PlaceCrawler {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceCrawler {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(CRAWL_TIMEOUT)
            .build()
            .expect("Failed to build the crawler HTTP client");

        PlaceCrawler { client }
    }

    pub async fn crawl_ranking(
        &self,
        keyword: &str,
        target_url: Option<&str>,
    ) -> PlaceSearchOutcome {
        let html = match self.fetch_results_page(keyword).await {
            Ok(html) => html,
            Err(e) => {
                log::error!("Place crawl failed for {}: {:?}", keyword, e);
                return PlaceSearchOutcome::Failed {
                    detail: e.to_string(),
                };
            }
        };

        PlaceSearchOutcome::Ranked(extract_ranking(&html, target_url))
    }

    async fn fetch_results_page(&self, keyword: &str) -> anyhow::Result<String> {
        let desktop_query = [
            ("where", "nexearch"),
            ("sm", "top_hty"),
            ("fbm", "0"),
            ("ie", "utf8"),
            ("query", keyword),
        ];
        let html = self.fetch(DESKTOP_SEARCH_URL, &desktop_query).await?;

        let has_place_section = {
            let document = Html::parse_document(&html);
            let place_section = Selector::parse("div.place_section").unwrap();
            document.select(&place_section).next().is_some()
        };
        if has_place_section {
            return Ok(html);
        }

        log::info!("No place section on the desktop page, trying the mobile layout");
        self.fetch(MOBILE_SEARCH_URL, &[("query", keyword)]).await
    }

    async fn fetch(&self, url: &str, query: &[(&str, &str)]) -> anyhow::Result<String> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", get_chrome_rua())
            .header(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            )
            .header("Accept-Language", "ko-KR,ko;q=0.9,en-US;q=0.8,en;q=0.7")
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Search page returned {}", status);
        }

        Ok(response.text().await?)
    }
}

// Sponsored entries never consume a rank; at most 20 candidates are
// scanned and at most 10 listings returned.
pub fn extract_ranking(html: &str, target_url: Option<&str>) -> RankingResult {
    let document = Html::parse_document(html);

    let candidates = find_candidates(&document);
    if candidates.is_empty() {
        log::info!("No listing strategy matched, returning an empty ranking");
        return RankingResult::default();
    }

    let ad_selector = Selector::parse(r#".ad_marker, .ad, [class*="ad"]"#).unwrap();
    let name_selector =
        Selector::parse(".place_bluelink, .YwYLL, span.place_name, strong.name, .tit").unwrap();
    let category_selector = Selector::parse(".category, .cate, .type, .KCMnt").unwrap();
    let review_selector = Selector::parse(".review_count, .cnt, em.num, .NSTUp").unwrap();
    let place_link_selector = Selector::parse(
        r#"a[href*="place.naver.com"], a[href*="/place/"], a.place_bluelink"#,
    )
    .unwrap();

    let mut competitors: Vec<Listing> = vec![];
    let mut my_rank: Option<u32> = None;
    let mut rank: u32 = 0;

    for candidate in candidates.into_iter().take(MAX_CANDIDATES) {
        if candidate.select(&ad_selector).next().is_some() {
            log::info!("Skipping sponsored entry");
            continue;
        }

        rank += 1;

        let name =
            select_text(&candidate, &name_selector).unwrap_or_else(|| format!("업체 {}", rank));
        let category =
            select_text(&candidate, &category_selector).unwrap_or_else(|| "일반".to_string());
        let review_count = select_text(&candidate, &review_selector)
            .map(|text| parse_review_count(&text))
            .unwrap_or(0);
        let url = candidate
            .select(&place_link_selector)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(resolve_place_url)
            .unwrap_or_default();

        if my_rank.is_none() && !url.is_empty() {
            if let Some(target) = target_url {
                if target.contains(&url) || url.contains(target) {
                    my_rank = Some(rank);
                }
            }
        }

        competitors.push(Listing {
            rank,
            name,
            category,
            review_count,
            url,
        });

        if competitors.len() == MAX_COMPETITORS {
            break;
        }
    }

    log::info!("Extracted {} listings", competitors.len());

    RankingResult {
        my_rank,
        competitors,
    }
}

fn find_candidates<'a>(document: &'a Html) -> Vec<ElementRef<'a>> {
    for strategy in LISTING_STRATEGIES {
        let selector = Selector::parse(strategy).unwrap();
        let matches: Vec<ElementRef> = document.select(&selector).collect();
        if !matches.is_empty() {
            log::info!(
                "Listing strategy {} matched {} candidates",
                strategy,
                matches.len()
            );
            return matches;
        }
    }

    vec![]
}

fn select_text(element: &ElementRef, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(|found| found.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

fn parse_review_count(text: &str) -> u32 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

fn resolve_place_url(href: &str) -> String {
    let absolute = if href.starts_with("http") {
        href.to_string()
    } else if href.starts_with('/') {
        format!("{}{}", PLACE_HOST, href)
    } else {
        format!("{}/{}", PLACE_HOST, href)
    };

    match Url::parse(&absolute) {
        Ok(parsed) => parsed.to_string(),
        Err(_) => String::new(),
    }
}
