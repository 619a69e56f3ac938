//! 인증 핸들러
//!
//! 회원 가입, 로그인, 토큰 갱신 엔드포인트입니다. 모두 인증 없이 접근할 수 있습니다.

use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::domain::dto::auths::{AuthResponse, LoginDto, RefreshTokenDto, RegisterUserDto};
use crate::services::auth::AuthsUseCases;
use crate::services::users::UsersUseCases;

/// 회원 가입
///
/// 이메일이 이미 등록되어 있으면 유스케이스를 호출하기 전에 409로 거절합니다.
/// 동시에 들어온 같은 이메일의 가입은 저장소의 유니크 제약이 막습니다.
#[post("/register")]
pub async fn register(
    payload: web::Json<RegisterUserDto>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let users = ServiceLocator::get::<UsersUseCases>()?;
    let auths = ServiceLocator::get::<AuthsUseCases>()?;

    if users.get_one_user_by_email(&payload.email, true).await?.is_success() {
        return Err(AppError::ConflictError(
            "User with this email already exists".to_string(),
        ));
    }

    let response = auths.create(payload.into_inner()).await?.into_result()?;

    Ok(HttpResponse::Created().json(response))
}

#[post("/login")]
pub async fn login(
    payload: web::Json<LoginDto>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let auths = ServiceLocator::get::<AuthsUseCases>()?;

    let view = auths.validate_user(payload.into_inner()).await?.into_result()?;
    let tokens = auths.sign_in(&view.user)?;

    log::info!("로그인 성공: {}", view.user.id);
    Ok(HttpResponse::Ok().json(AuthResponse { user: view.user, tokens }))
}

#[post("/refresh")]
pub async fn refresh_tokens(
    payload: web::Json<RefreshTokenDto>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let auths = ServiceLocator::get::<AuthsUseCases>()?;
    let tokens = auths.refresh_tokens(&payload.refresh_token).await?.into_result()?;

    Ok(HttpResponse::Ok().json(tokens))
}
