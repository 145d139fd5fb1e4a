use serde::{Deserialize, Serialize};

// Naver omits count fields for very low-volume keywords, so every numeric
// field defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRecord {
    pub rel_keyword: String,
    #[serde(default)]
    pub monthly_pc_qc_cnt: u64,
    #[serde(default)]
    pub monthly_mobile_qc_cnt: u64,
    #[serde(default)]
    pub monthly_ave_pc_ctr: f64,
    #[serde(default)]
    pub monthly_ave_mobile_ctr: f64,
    #[serde(default = "default_comp_idx")]
    pub comp_idx: String,
}

fn default_comp_idx() -> String {
    "01".to_string()
}

impl MetricRecord {
    pub fn monthly_total(&self) -> u64 {
        self.monthly_pc_qc_cnt + self.monthly_mobile_qc_cnt
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Competition {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Competition {
    pub fn from_code(code: &str) -> Self {
        match code {
            "01" => Competition::Low,
            "02" => Competition::Medium,
            "03" => Competition::High,
            "04" => Competition::VeryHigh,
            _ => Competition::Medium,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Competition::Low => "낮음",
            Competition::Medium => "보통",
            Competition::High => "높음",
            Competition::VeryHigh => "매우 높음",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Recommendation {
    StronglyRecommended,
    Recommended,
    Moderate,
    LowVolume,
}

impl Recommendation {
    pub fn classify(monthly_total: u64, competition: Competition) -> Self {
        let open_market = matches!(competition, Competition::Low | Competition::Medium);
        match monthly_total {
            v if v >= 1000 && open_market => Recommendation::StronglyRecommended,
            v if v >= 500 => Recommendation::Recommended,
            v if v >= 100 => Recommendation::Moderate,
            _ => Recommendation::LowVolume,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Recommendation::StronglyRecommended => "적극 추천",
            Recommendation::Recommended => "추천",
            Recommendation::Moderate => "보통",
            Recommendation::LowVolume => "낮은 검색량",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeSummary {
    pub monthly_avg: u64,
    pub avg_ctr: f64,
    pub competition: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedKeyword {
    pub keyword: String,
    pub monthly_avg: u64,
    pub avg_ctr: f64,
    pub competition: String,
    pub recommendation: String,
}
