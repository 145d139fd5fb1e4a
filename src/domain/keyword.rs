use itertools::Itertools;

// Region qualifiers stripped before the metrics lookup. No token is a
// substring of another.
const REGION_TOKENS: [&str; 16] = [
    "서울",
    "부산",
    "대구",
    "대전",
    "광주",
    "울산",
    "경기",
    "인천",
    "서구",
    "청라",
    "검단",
    "경서",
    "가정",
    "석남",
    "송도",
    "부평",
];

pub fn strip_region_tokens(raw: &str) -> String {
    let mut stripped = raw.to_string();
    for token in REGION_TOKENS {
        stripped = stripped.replace(token, " ");
    }

    stripped.split_whitespace().join(" ")
}

// A keyword made of region tokens only would strip to nothing; fall back
// to the raw input.
pub fn core_keyword(raw: &str) -> String {
    let stripped = strip_region_tokens(raw);
    match stripped.is_empty() {
        true => raw.trim().to_string(),
        false => stripped,
    }
}

#[cfg(test)]
mod tests {
    use super::{core_keyword, strip_region_tokens};

    #[test]
    fn strips_leading_region() {
        assert_eq!(strip_region_tokens("서울 영어학원"), "영어학원");
    }

    #[test]
    fn strips_attached_region() {
        assert_eq!(strip_region_tokens("인천영어학원"), "영어학원");
    }

    #[test]
    fn strips_multiple_regions() {
        assert_eq!(strip_region_tokens("인천 서구 영어학원"), "영어학원");
        assert_eq!(strip_region_tokens("청라 수학학원 검단"), "수학학원");
    }

    #[test]
    fn keeps_non_region_keyword() {
        assert_eq!(strip_region_tokens("영어학원"), "영어학원");
        assert_eq!(strip_region_tokens("  피아노 학원  "), "피아노 학원");
    }

    #[test]
    fn is_idempotent() {
        let inputs = [
            "서울 영어학원",
            "인천영어학원",
            "영어학원",
            "청라 수학학원 검단",
            "서울",
            "",
        ];
        for input in inputs {
            let once = strip_region_tokens(input);
            assert_eq!(strip_region_tokens(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn core_keyword_falls_back_on_region_only_input() {
        assert_eq!(core_keyword("서울"), "서울");
        assert_eq!(core_keyword(" 인천 서구 "), "인천 서구");
    }

    #[test]
    fn core_keyword_matches_stripped_form() {
        assert_eq!(core_keyword("서울 영어학원"), "영어학원");
    }
}
