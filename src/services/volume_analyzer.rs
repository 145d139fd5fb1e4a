use crate::{
    domain::search_volume::{
        Competition, MetricRecord, Recommendation, RelatedKeyword, VolumeSummary,
    },
    services::search_ad::SearchVolumeResult,
};

const UNKNOWN_COMPETITION: &str = "알 수 없음";
const PENDING_RECOMMENDATION: &str = "분석중";
const NO_DATA_RECOMMENDATION: &str = "데이터 없음";

pub fn summarize_volume(result: &SearchVolumeResult, core_keyword: &str) -> VolumeSummary {
    let records = match result {
        SearchVolumeResult::Failed { .. } => {
            return VolumeSummary {
                monthly_avg: 0,
                avg_ctr: 0.0,
                competition: UNKNOWN_COMPETITION.to_string(),
                recommendation: PENDING_RECOMMENDATION.to_string(),
            }
        }
        SearchVolumeResult::Records(records) => records,
    };

    match pick_record(records, core_keyword) {
        Some(record) => {
            let competition = Competition::from_code(&record.comp_idx);
            let monthly_avg = record.monthly_total();
            VolumeSummary {
                monthly_avg,
                avg_ctr: weighted_ctr(record),
                competition: competition.label().to_string(),
                recommendation: Recommendation::classify(monthly_avg, competition)
                    .label()
                    .to_string(),
            }
        }
        None => VolumeSummary {
            monthly_avg: 0,
            avg_ctr: 0.0,
            competition: Competition::Low.label().to_string(),
            recommendation: NO_DATA_RECOMMENDATION.to_string(),
        },
    }
}

pub fn related_keywords(result: &SearchVolumeResult, limit: usize) -> Vec<RelatedKeyword> {
    let records = match result {
        SearchVolumeResult::Records(records) => records,
        SearchVolumeResult::Failed { .. } => return vec![],
    };

    records
        .iter()
        .take(limit)
        .map(|record| {
            let competition = Competition::from_code(&record.comp_idx);
            let monthly_avg = record.monthly_total();
            RelatedKeyword {
                keyword: record.rel_keyword.clone(),
                monthly_avg,
                avg_ctr: weighted_ctr(record),
                competition: competition.label().to_string(),
                recommendation: Recommendation::classify(monthly_avg, competition)
                    .label()
                    .to_string(),
            }
        })
        .collect()
}

// Exact match, then substring containment in either direction, then the
// first record.
fn pick_record<'a>(records: &'a [MetricRecord], core_keyword: &str) -> Option<&'a MetricRecord> {
    if let Some(record) = records.iter().find(|r| r.rel_keyword == core_keyword) {
        return Some(record);
    }

    if let Some(record) = records
        .iter()
        .find(|r| r.rel_keyword.contains(core_keyword) || core_keyword.contains(&r.rel_keyword))
    {
        return Some(record);
    }

    let first = records.first();
    if let Some(record) = first {
        log::info!(
            "No keyword-tool record matches {}, falling back to {}",
            core_keyword,
            record.rel_keyword
        );
    }
    first
}

fn weighted_ctr(record: &MetricRecord) -> f64 {
    let total = record.monthly_total();
    if total == 0 {
        return 0.0;
    }

    (record.monthly_ave_pc_ctr * record.monthly_pc_qc_cnt as f64
        + record.monthly_ave_mobile_ctr * record.monthly_mobile_qc_cnt as f64)
        / total as f64
}
