//! # 인증 유스케이스
//!
//! 회원 가입, 로그인 자격 증명 확인, 토큰 발급과 갱신을 담당합니다.
//!
//! ```text
//! Anonymous ──(자격 증명 제출)──┬──▶ Authenticated (토큰 발급)
//!                              └──▶ Rejected (Unauthorized / NotFound)
//! ```
//!
//! 중간 상태는 없습니다. 가입 시 사용자 저장은 성공했는데 토큰 서명이 실패하면
//! 사용자 레코드가 남아 있다는 사실을 로그에 남기고 `AppError::InternalError`로 끝냅니다.

use std::sync::Arc;
use crate::core::errors::{AppError, AppResult};
use crate::core::outcome::{FailureKind, Outcome};
use crate::domain::dto::auths::{AuthResponse, LoginDto, RegisterUserDto};
use crate::domain::dto::users::{CreateUserDto, UserResponse, UserView};
use crate::domain::models::{TokenKind, TokenPair};
use crate::services::auth::password_hasher::PasswordHasher;
use crate::services::auth::token_service::TokenService;
use crate::services::users::UsersUseCases;

pub const PASSWORD_MISMATCH: &str = "password and confirm password must be the same";
pub const WRONG_PASSWORD: &str = "Wrong password. Please try again or request for password reset";

/// 인증 유스케이스
pub struct AuthsUseCases {
    users: Arc<UsersUseCases>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<TokenService>,
}

impl AuthsUseCases {
    pub fn new(
        users: Arc<UsersUseCases>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self { users, hasher, tokens }
    }

    /// 회원 가입
    ///
    /// 비밀번호 확인 값을 비교하고, 비밀번호를 해시한 뒤 사용자 생성을 위임합니다.
    /// 성공하면 액세스/리프레시 토큰을 발급합니다.
    ///
    /// # Returns
    ///
    /// * `Outcome` 실패 `Validation` - 비밀번호 확인 불일치 또는 엔티티 검증 실패
    /// * `Outcome` 실패 `Conflict` - 이메일 중복
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 그 밖의 실패. 메시지는 "Something went wrong"
    pub async fn create(&self, dto: RegisterUserDto) -> AppResult<Outcome<AuthResponse>> {
        if dto.password != dto.confirm_password {
            return Ok(Outcome::fail(PASSWORD_MISMATCH, FailureKind::Validation));
        }

        let password = self.hasher.hash_password(&dto.password).await?;

        let created = self
            .users
            .create_user(CreateUserDto {
                email: dto.email,
                password,
                firstname: dto.firstname,
                lastname: dto.lastname,
            })
            .await
            .map_err(|e| {
                log::error!("회원 가입 중 사용자 생성 실패: {}", e);
                AppError::InternalError("Something went wrong".to_string())
            })?;

        let user = match created.into_result() {
            Ok(user) => user,
            Err(failure) => match failure.kind() {
                FailureKind::Validation | FailureKind::Conflict => {
                    return Ok(Outcome::from_failure(failure));
                }
                _ => {
                    log::error!("회원 가입 중 예상하지 못한 실패: {}", failure);
                    return Err(AppError::InternalError("Something went wrong".to_string()));
                }
            },
        };

        let tokens = self.tokens.issue_pair(&user.id, &user.email).map_err(|e| {
            log::error!(
                "사용자 {}({})는 저장되었지만 토큰 발급에 실패했습니다: {}",
                user.id,
                user.email,
                e
            );
            AppError::InternalError("Something went wrong".to_string())
        })?;

        log::info!("회원 가입 완료: {}", user.id);
        Ok(Outcome::ok(AuthResponse { user, tokens }))
    }

    /// 이미 자격 증명이 확인된 사용자에게 토큰을 발급합니다.
    pub fn sign_in(&self, user: &UserResponse) -> AppResult<TokenPair> {
        self.tokens.issue_pair(&user.id, &user.email)
    }

    /// 이메일과 비밀번호를 확인합니다.
    ///
    /// # Returns
    ///
    /// * `Outcome` 성공 - 비밀번호가 빠진 [`UserView`]
    /// * `Outcome` 실패 `NotFound` - 등록되지 않은 이메일
    /// * `Outcome` 실패 `Unauthorized` - 비밀번호 불일치
    pub async fn validate_user(&self, dto: LoginDto) -> AppResult<Outcome<UserView>> {
        let found = self.users.get_one_user_by_email(&dto.email, false).await?;

        let view = match found.into_result() {
            Ok(view) => view,
            Err(failure) => return Ok(Outcome::from_failure(failure)),
        };

        let Some(hash) = view.password.as_deref() else {
            return Err(AppError::InternalError(
                "Stored user has no password hash".to_string(),
            ));
        };

        if !self.hasher.compare_password(&dto.password, hash).await? {
            log::warn!("로그인 실패 - 비밀번호 불일치: {}", dto.email);
            return Ok(Outcome::fail(WRONG_PASSWORD, FailureKind::Unauthorized));
        }

        Ok(Outcome::ok(view.into_safe()))
    }

    /// 리프레시 토큰으로 새 토큰 쌍을 발급합니다.
    ///
    /// 토큰이 유효해도 사용자가 더 이상 없으면 `Unauthorized`입니다.
    pub async fn refresh_tokens(&self, refresh_token: &str) -> AppResult<Outcome<TokenPair>> {
        let claims = match self.tokens.verify(TokenKind::Refresh, refresh_token) {
            Ok(claims) => claims,
            Err(AppError::AuthenticationError(message)) => {
                return Ok(Outcome::fail(message, FailureKind::Unauthorized));
            }
            Err(e) => return Err(e),
        };

        let user = match self.users.get_one_user_by_id(&claims.sub).await?.into_result() {
            Ok(user) => user,
            Err(_) => {
                log::warn!("삭제된 사용자의 토큰 갱신 시도: {}", claims.sub);
                return Ok(Outcome::fail("Invalid token", FailureKind::Unauthorized));
            }
        };

        Ok(Outcome::ok(self.tokens.issue_pair(&user.id, &user.email)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::InMemoryDataServices;
    use crate::services::auth::password_hasher::BcryptPasswordHasher;
    use crate::services::auth::token_service::TokenSettings;

    fn token_service() -> Arc<TokenService> {
        Arc::new(
            TokenService::new(TokenSettings {
                access_secret: "access-secret".to_string(),
                refresh_secret: "refresh-secret".to_string(),
                access_ttl_secs: 1800,
                refresh_ttl_secs: 259_200,
            })
            .unwrap(),
        )
    }

    fn use_cases() -> (AuthsUseCases, Arc<TokenService>) {
        let users = Arc::new(UsersUseCases::new(Arc::new(InMemoryDataServices::new())));
        let tokens = token_service();
        let auths = AuthsUseCases::new(users, Arc::new(BcryptPasswordHasher::new(4)), tokens.clone());
        (auths, tokens)
    }

    fn registration(email: &str) -> RegisterUserDto {
        RegisterUserDto {
            email: email.to_string(),
            password: "SecurePass123".to_string(),
            confirm_password: "SecurePass123".to_string(),
            firstname: Some("Jane".to_string()),
            lastname: None,
        }
    }

    fn login(email: &str, password: &str) -> LoginDto {
        LoginDto {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_register_issues_distinct_tokens_bound_to_user() {
        let (auths, tokens) = use_cases();

        let response = auths
            .create(registration("jane@example.com"))
            .await
            .unwrap()
            .into_value()
            .unwrap();

        assert_ne!(response.tokens.access_token, response.tokens.refresh_token);

        let access = tokens.verify(TokenKind::Access, &response.tokens.access_token).unwrap();
        assert_eq!(access.sub, response.user.id);
        assert_eq!(access.email, "jane@example.com");

        let refresh = tokens.verify(TokenKind::Refresh, &response.tokens.refresh_token).unwrap();
        assert_eq!(refresh.sub, response.user.id);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("accessToken").is_some());
    }

    #[actix_web::test]
    async fn test_register_stores_a_hash_not_the_plain_password() {
        let (auths, _) = use_cases();
        auths.create(registration("jane@example.com")).await.unwrap();

        let stored = auths
            .users
            .get_one_user_by_email("jane@example.com", false)
            .await
            .unwrap()
            .into_value()
            .unwrap();

        let hash = stored.password.unwrap();
        assert_ne!(hash, "SecurePass123");
        assert!(hash.starts_with("$2"));
    }

    #[actix_web::test]
    async fn test_password_confirmation_mismatch_is_validation_failure() {
        let (auths, _) = use_cases();
        let mut dto = registration("jane@example.com");
        dto.confirm_password = "OtherPass123".to_string();

        let outcome = auths.create(dto).await.unwrap();
        let failure = outcome.error().unwrap();

        assert_eq!(failure.kind(), FailureKind::Validation);
        assert_eq!(failure.message(), PASSWORD_MISMATCH);
    }

    #[actix_web::test]
    async fn test_duplicate_registration_is_conflict() {
        let (auths, _) = use_cases();
        auths.create(registration("jane@example.com")).await.unwrap();

        let second = auths.create(registration("jane@example.com")).await.unwrap();

        assert_eq!(second.failure_kind(), Some(FailureKind::Conflict));
    }

    #[actix_web::test]
    async fn test_validate_user_with_wrong_password_is_unauthorized() {
        let (auths, _) = use_cases();
        auths.create(registration("jane@example.com")).await.unwrap();

        let outcome = auths
            .validate_user(login("jane@example.com", "WrongPass123"))
            .await
            .unwrap();
        let failure = outcome.error().unwrap();

        assert_eq!(failure.kind(), FailureKind::Unauthorized);
        assert_eq!(failure.message(), WRONG_PASSWORD);
    }

    #[actix_web::test]
    async fn test_validate_user_with_unknown_email_is_not_found() {
        let (auths, _) = use_cases();

        let outcome = auths
            .validate_user(login("ghost@example.com", "SecurePass123"))
            .await
            .unwrap();

        assert_eq!(outcome.failure_kind(), Some(FailureKind::NotFound));
    }

    #[actix_web::test]
    async fn test_validate_user_strips_the_password() {
        let (auths, _) = use_cases();
        auths.create(registration("jane@example.com")).await.unwrap();

        let view = auths
            .validate_user(login("jane@example.com", "SecurePass123"))
            .await
            .unwrap()
            .into_value()
            .unwrap();

        assert_eq!(view.password, None);
        assert_eq!(view.user.email, "jane@example.com");

        let pair = auths.sign_in(&view.user).unwrap();
        assert_ne!(pair.access_token, pair.refresh_token);
    }

    #[actix_web::test]
    async fn test_refresh_tokens() {
        let (auths, tokens) = use_cases();
        let registered = auths
            .create(registration("jane@example.com"))
            .await
            .unwrap()
            .into_value()
            .unwrap();

        let refreshed = auths
            .refresh_tokens(&registered.tokens.refresh_token)
            .await
            .unwrap()
            .into_value()
            .unwrap();
        let claims = tokens.verify(TokenKind::Access, &refreshed.access_token).unwrap();
        assert_eq!(claims.sub, registered.user.id);

        let rejected = auths
            .refresh_tokens(&registered.tokens.access_token)
            .await
            .unwrap();
        assert_eq!(rejected.failure_kind(), Some(FailureKind::Unauthorized));
    }

    #[actix_web::test]
    async fn test_refresh_for_unknown_subject_is_unauthorized() {
        let (auths, tokens) = use_cases();
        let orphan = tokens
            .sign(TokenKind::Refresh, "64b7f0c2a1b2c3d4e5f60718", "ghost@example.com")
            .unwrap();

        let outcome = auths.refresh_tokens(&orphan).await.unwrap();

        assert_eq!(outcome.failure_kind(), Some(FailureKind::Unauthorized));
    }
}
