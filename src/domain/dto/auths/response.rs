use serde::Serialize;
use crate::domain::dto::users::UserResponse;
use crate::domain::models::TokenPair;

/// 가입/로그인 성공 응답
///
/// 사용자 필드와 토큰 필드를 한 객체로 펼쳐서 직렬화합니다.
///
/// ```json
/// {
///   "id": "64b7f0c2a1b2c3d4e5f60718",
///   "email": "user@example.com",
///   "isVerified": false,
///   "roles": ["user"],
///   "accessToken": "...",
///   "refreshToken": "..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    #[serde(flatten)]
    pub tokens: TokenPair,
}
