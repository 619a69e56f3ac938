//! # 문자열 유틸리티
//!
//! 검색 필터와 카탈로그 이름 정규화에 쓰이는 공통 문자열 함수들입니다.

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  Hello  ")), Some("Hello".to_string()));
/// assert_eq!(clean_optional_string(Some("   ")), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<&str>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 첫 글자만 대문자로 바꾸고 나머지는 그대로 둡니다.
///
/// 앞뒤 공백은 제거합니다. 이름 검색 필터가 저장된 값과 같은 형태가 되도록 할 때 씁니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(capitalize_first("  mcdonald"), "Mcdonald");
/// assert_eq!(capitalize_first("mcDonald"), "McDonald");
/// ```
pub fn capitalize_first(value: &str) -> String {
    let trimmed = value.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 연속된 공백을 하나로 줄이고 앞뒤 공백을 제거합니다.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 단어마다 첫 글자를 대문자로 바꿉니다. 단어 사이 공백은 하나로 줄입니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(title_case_words("  air   max 90 "), "Air Max 90");
/// ```
pub fn title_case_words(value: &str) -> String {
    value
        .split_whitespace()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}
