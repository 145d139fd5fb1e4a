use itertools::Itertools;
use serde::Serialize;

use crate::domain::place::Listing;

const MAX_LISTINGS: usize = 5;
const MAX_KEYWORDS_PER_LISTING: usize = 8;

// Used when no rule fires for a listing.
const GENERIC_KEYWORDS: [&str; 3] = ["학원", "교육", "학습"];

// Only the first region found in a business name contributes "{region}학원".
const NAME_REGIONS: [&str; 7] = ["인천", "서구", "청라", "검단", "경서", "가정", "석남"];

struct InferenceRule {
    triggers: &'static [&'static str],
    keywords: &'static [&'static str],
}

const INFERENCE_RULES: [InferenceRule; 12] = [
    InferenceRule {
        triggers: &["영어", "English"],
        keywords: &["영어학원", "영어교육", "영어회화", "토익", "토플"],
    },
    InferenceRule {
        triggers: &["수학"],
        keywords: &["수학학원", "수학교육", "수학전문", "수능수학"],
    },
    InferenceRule {
        triggers: &["국어", "논술"],
        keywords: &["국어학원", "논술학원", "독서논술"],
    },
    InferenceRule {
        triggers: &["과학"],
        keywords: &["과학학원", "과학교육"],
    },
    InferenceRule {
        triggers: &["학원"],
        keywords: &["종합학원"],
    },
    InferenceRule {
        triggers: &["교습소", "교실"],
        keywords: &["교습소"],
    },
    InferenceRule {
        triggers: &["아카데미", "Academy"],
        keywords: &["아카데미"],
    },
    InferenceRule {
        triggers: &["초등", "유아", "어린이"],
        keywords: &["초등학원"],
    },
    InferenceRule {
        triggers: &["중등", "중학"],
        keywords: &["중등학원"],
    },
    InferenceRule {
        triggers: &["고등", "입시"],
        keywords: &["고등학원"],
    },
    InferenceRule {
        triggers: &["원어민", "화상", "스피킹"],
        keywords: &["원어민영어"],
    },
    InferenceRule {
        triggers: &["방과후"],
        keywords: &["방과후학원"],
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSuggestion {
    pub business_name: String,
    pub keywords: Vec<String>,
}

pub fn suggest_keywords(listings: &[Listing]) -> Vec<KeywordSuggestion> {
    listings
        .iter()
        .take(MAX_LISTINGS)
        .map(|listing| KeywordSuggestion {
            business_name: listing.name.clone(),
            keywords: keywords_for(listing),
        })
        .collect()
}

fn keywords_for(listing: &Listing) -> Vec<String> {
    let text = format!("{} {}", listing.name, listing.category);

    let mut keywords: Vec<String> = INFERENCE_RULES
        .iter()
        .filter(|rule| rule.triggers.iter().any(|trigger| text.contains(trigger)))
        .flat_map(|rule| rule.keywords.iter().map(|keyword| keyword.to_string()))
        .collect();

    if let Some(region) = NAME_REGIONS
        .iter()
        .find(|region| listing.name.contains(*region))
    {
        keywords.push(format!("{}학원", region));
    }

    let keywords: Vec<String> = keywords
        .into_iter()
        .unique()
        .take(MAX_KEYWORDS_PER_LISTING)
        .collect();

    match keywords.is_empty() {
        true => GENERIC_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        false => keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::suggest_keywords;
    use crate::domain::place::Listing;

    fn listing(rank: u32, name: &str, category: &str) -> Listing {
        Listing {
            rank,
            name: name.to_string(),
            category: category.to_string(),
            review_count: 0,
            url: String::new(),
        }
    }

    #[test]
    fn english_academy_triggers_subject_keywords() {
        let suggestions = suggest_keywords(&[listing(1, "청라영어학원", "학원")]);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].business_name, "청라영어학원");
        assert!(suggestions[0].keywords.contains(&"영어학원".to_string()));
        assert!(suggestions[0].keywords.contains(&"토익".to_string()));
        assert!(suggestions[0].keywords.contains(&"청라학원".to_string()));
    }

    #[test]
    fn category_text_also_triggers() {
        let suggestions = suggest_keywords(&[listing(1, "브라이트", "영어교습소")]);

        assert!(suggestions[0].keywords.contains(&"영어회화".to_string()));
        assert!(suggestions[0].keywords.contains(&"교습소".to_string()));
    }

    #[test]
    fn unmatched_listing_gets_generic_keywords() {
        let suggestions = suggest_keywords(&[listing(1, "커피맛집", "카페")]);

        assert_eq!(suggestions[0].keywords, vec!["학원", "교육", "학습"]);
    }

    #[test]
    fn keywords_are_deduplicated_and_capped() {
        // Fires the English, math, Korean, comprehensive and grade rules at
        // once: well over eight raw candidates.
        let suggestions = suggest_keywords(&[listing(1, "인천 초등 영어수학국어학원", "학원")]);

        let keywords = &suggestions[0].keywords;
        assert_eq!(keywords.len(), 8);
        let mut deduped = keywords.clone();
        deduped.dedup();
        assert_eq!(&deduped, keywords);
    }

    #[test]
    fn only_top_five_listings_are_analyzed() {
        let listings: Vec<Listing> = (1..=7)
            .map(|rank| listing(rank, &format!("업체 {}", rank), "일반"))
            .collect();

        let suggestions = suggest_keywords(&listings);

        assert_eq!(suggestions.len(), 5);
    }

    #[test]
    fn region_rule_uses_first_match_only() {
        let suggestions = suggest_keywords(&[listing(1, "인천 서구 태권도", "체육관")]);

        let keywords = &suggestions[0].keywords;
        assert!(keywords.contains(&"인천학원".to_string()));
        assert!(!keywords.contains(&"서구학원".to_string()));
    }
}
