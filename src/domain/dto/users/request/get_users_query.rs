//! # 사용자 목록 조회 쿼리 DTO

use serde::Deserialize;

/// `GET /api/v1/users` 쿼리 파라미터
///
/// 모든 값은 원시 문자열로 받고, 숫자 해석은
/// [`PageRequest::parse`](crate::domain::dto::pagination::PageRequest::parse)가 관대하게 처리합니다.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUsersQuery {
    pub limit: Option<String>,
    pub current_page: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
}
