//! 인증 및 보안 서비스 모듈
//!
//! 회원 가입과 로그인 유스케이스, 그리고 이들이 쓰는 협력자를 제공합니다.
//!
//! # Features
//!
//! - JWT 액세스/리프레시 토큰 서명과 검증
//! - bcrypt 비밀번호 해싱 (블로킹 스레드 풀)
//! - 자격 증명 확인과 토큰 갱신
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명, 토큰 종류별 비밀키 분리
//! - 솔트가 포함된 단방향 해시
//! - 토큰 만료 시간 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::domain::models::TokenKind;
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::from_config()?;
//! let pair = token_service.issue_pair(&user.id, &user.email)?;
//! let claims = token_service.verify(TokenKind::Refresh, &pair.refresh_token)?;
//! ```

pub mod token_service;
pub mod password_hasher;
pub mod auths_use_cases;

pub use token_service::{TokenService, TokenSettings};
pub use password_hasher::{BcryptPasswordHasher, PasswordHasher};
pub use auths_use_cases::AuthsUseCases;
