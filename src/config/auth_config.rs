//! # Authentication Configuration Module
//!
//! JWT 액세스/리프레시 토큰의 서명 비밀키와 만료 시간을 관리합니다.
//! 두 토큰 종류는 서로 다른 비밀키로 서명되어야 하며, 같은 값이 설정되면
//! [`TokenService`](crate::services::auth::TokenService) 생성이 실패합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export AT_JWT_SECRET="access-token-secret"
//! export RT_JWT_SECRET="refresh-token-secret"
//! export AT_JWT_EXPIRES_IN_SECS="1800"     # 30분
//! export RT_JWT_EXPIRES_IN_SECS="259200"   # 3일
//! ```

use std::env;

/// 액세스 토큰 기본 만료 시간 (30분)
pub const DEFAULT_ACCESS_TOKEN_TTL_SECS: i64 = 60 * 30;

/// 리프레시 토큰 기본 만료 시간 (3일)
pub const DEFAULT_REFRESH_TOKEN_TTL_SECS: i64 = 60 * 60 * 24 * 3;

/// JSON Web Token (JWT) 관련 설정
///
/// - **액세스 토큰**: 짧게 (기본 30분), `AT_JWT_SECRET`으로 서명
/// - **리프레시 토큰**: 길게 (기본 3일), `RT_JWT_SECRET`으로 서명
pub struct JwtConfig;

impl JwtConfig {
    pub fn access_secret() -> String {
        env::var("AT_JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("AT_JWT_SECRET not set, using default (not secure for production!)");
                "at-dev-secret".to_string()
            })
    }

    pub fn refresh_secret() -> String {
        env::var("RT_JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("RT_JWT_SECRET not set, using default (not secure for production!)");
                "rt-dev-secret".to_string()
            })
    }

    pub fn access_expires_in_secs() -> i64 {
        Self::positive_secs("AT_JWT_EXPIRES_IN_SECS", DEFAULT_ACCESS_TOKEN_TTL_SECS)
    }

    pub fn refresh_expires_in_secs() -> i64 {
        Self::positive_secs("RT_JWT_EXPIRES_IN_SECS", DEFAULT_REFRESH_TOKEN_TTL_SECS)
    }

    fn positive_secs(key: &str, default: i64) -> i64 {
        env::var(key)
            .ok()
            .and_then(|value| value.parse::<i64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(default)
    }
}
