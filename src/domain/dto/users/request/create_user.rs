//! # 사용자 생성 입력 DTO
//!
//! 인증 유스케이스가 비밀번호를 해시한 뒤 사용자 유스케이스에 넘기는 내부 입력입니다.
//! HTTP 요청 검증은 [`RegisterUserDto`](crate::domain::dto::auths::RegisterUserDto)에서 끝난 상태입니다.

use serde::Deserialize;

/// 사용자 생성 입력
///
/// `password`는 이미 해시된 값이어야 합니다.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserDto {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
}
