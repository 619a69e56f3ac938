//! JWT 토큰 관리 서비스 구현
//!
//! 액세스 토큰과 리프레시 토큰의 서명과 검증을 담당합니다.
//! 두 토큰은 서로 다른 비밀키로 HMAC-SHA256 서명되므로, 한 종류의 토큰을
//! 다른 종류로 검증하면 서명 불일치로 거부됩니다.

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::{TokenClaims, TokenKind, TokenPair};

/// 토큰 종류별 비밀키와 만료 시간
#[derive(Debug, Clone)]
pub struct TokenSettings {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_ttl_secs: i64,
    pub refresh_ttl_secs: i64,
}

impl TokenSettings {
    /// 환경 변수에서 설정을 읽습니다.
    pub fn from_config() -> Self {
        Self {
            access_secret: JwtConfig::access_secret(),
            refresh_secret: JwtConfig::refresh_secret(),
            access_ttl_secs: JwtConfig::access_expires_in_secs(),
            refresh_ttl_secs: JwtConfig::refresh_expires_in_secs(),
        }
    }

    fn secret(&self, kind: TokenKind) -> &str {
        match kind {
            TokenKind::Access => &self.access_secret,
            TokenKind::Refresh => &self.refresh_secret,
        }
    }

    fn ttl_secs(&self, kind: TokenKind) -> i64 {
        match kind {
            TokenKind::Access => self.access_ttl_secs,
            TokenKind::Refresh => self.refresh_ttl_secs,
        }
    }
}

/// 만료 시각을 계산합니다. `chrono`가 표현할 수 없는 범위면 `None`.
fn expires_at(issued_at: DateTime<Utc>, ttl_secs: i64) -> Option<DateTime<Utc>> {
    TimeDelta::try_seconds(ttl_secs).and_then(|ttl| issued_at.checked_add_signed(ttl))
}

/// JWT 토큰 관리 서비스
pub struct TokenService {
    settings: TokenSettings,
}

impl TokenService {
    /// # Errors
    ///
    /// * `AppError::InternalError` - 비밀키가 비어 있거나 두 비밀키가 같은 경우,
    ///   만료 시간이 양수가 아니거나 표현 가능한 범위를 넘는 경우
    pub fn new(settings: TokenSettings) -> AppResult<Self> {
        if settings.access_secret.is_empty() || settings.refresh_secret.is_empty() {
            return Err(AppError::InternalError("JWT secrets must not be empty".to_string()));
        }
        if settings.access_secret == settings.refresh_secret {
            return Err(AppError::InternalError(
                "AT_JWT_SECRET and RT_JWT_SECRET must differ".to_string(),
            ));
        }
        if settings.access_ttl_secs <= 0 || settings.refresh_ttl_secs <= 0 {
            return Err(AppError::InternalError("JWT expiry must be positive".to_string()));
        }

        let now = Utc::now();
        if expires_at(now, settings.access_ttl_secs).is_none()
            || expires_at(now, settings.refresh_ttl_secs).is_none()
        {
            return Err(AppError::InternalError("JWT expiry is out of range".to_string()));
        }

        Ok(Self { settings })
    }

    pub fn from_config() -> AppResult<Self> {
        Self::new(TokenSettings::from_config())
    }

    /// 토큰 하나를 서명합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 만료 시각 계산 또는 토큰 생성 실패
    pub fn sign(&self, kind: TokenKind, subject: &str, email: &str) -> AppResult<String> {
        let now = Utc::now();
        let expiration = expires_at(now, self.settings.ttl_secs(kind)).ok_or_else(|| {
            AppError::InternalError(format!("{} 토큰 만료 시각 계산 실패", kind.as_str()))
        })?;

        let claims = TokenClaims {
            sub: subject.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.settings.secret(kind).as_bytes());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("{} 토큰 생성 실패: {}", kind.as_str(), e)))
    }

    /// 액세스/리프레시 토큰 쌍을 발급합니다.
    pub fn issue_pair(&self, subject: &str, email: &str) -> AppResult<TokenPair> {
        Ok(TokenPair {
            access_token: self.sign(TokenKind::Access, subject, email)?,
            refresh_token: self.sign(TokenKind::Refresh, subject, email)?,
        })
    }

    /// 토큰을 검증하고 클레임을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 만료, 잘못된 형식, 다른 종류의 비밀키로 서명된 토큰
    pub fn verify(&self, kind: TokenKind, token: &str) -> AppResult<TokenClaims> {
        let decoding_key = DecodingKey::from_secret(self.settings.secret(kind).as_bytes());

        decode::<TokenClaims>(token, &decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("Token has expired".to_string())
                }
                _ => {
                    log::debug!("{} 토큰 검증 실패: {}", kind.as_str(), e);
                    AppError::AuthenticationError("Invalid token".to_string())
                }
            })
    }
}
