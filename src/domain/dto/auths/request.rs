//! # 인증 요청 DTO
//!
//! 가입, 로그인, 토큰 갱신 요청 본문을 정의합니다.
//!
//! ## 검증 규칙
//!
//! ### 이메일 (`email`)
//! - 이메일 형식 준수
//! - 중복 여부는 가입 핸들러의 사전 확인과 저장소의 유니크 제약이 함께 보장
//!
//! ### 비밀번호 (`password`)
//! - 최소 길이: 8자
//! - 필수 포함: 대문자, 소문자, 숫자
//! - `confirmPassword`와의 일치는 인증 유스케이스가 확인합니다.

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 회원가입 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "email": "user@example.com",
///   "password": "SecurePass123",
///   "confirmPassword": "SecurePass123",
///   "firstname": "Jane",
///   "lastname": "Doe"
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserDto {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "비밀번호는 8-72자 사이여야 합니다"))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    /// 비밀번호 확인 (재입력)
    pub confirm_password: String,

    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub firstname: Option<String>,

    #[validate(length(min = 1, max = 50, message = "성은 1-50자 사이여야 합니다"))]
    pub lastname: Option<String>,
}

/// 로그인 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginDto {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 토큰 갱신 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenDto {
    #[validate(length(min = 1, message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: String,
}

const BCRYPT_MAX_PASSWORD_BYTES: usize = 72;

/// 비밀번호 보안 강도 검증
///
/// 대문자, 소문자, 숫자를 각각 최소 1개 이상 포함해야 합니다.
///
/// # 에러 코드
///
/// - `weak_password`: 셋 중 하나 이상이 누락된 경우
/// - `password_too_long`: UTF-8 기준 72바이트를 넘는 경우 (bcrypt는 그 뒤를 버립니다)
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    if password.len() > BCRYPT_MAX_PASSWORD_BYTES {
        return Err(ValidationError::new("password_too_long")
            .with_message("비밀번호가 너무 깁니다".into()));
    }

    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_uppercase && has_lowercase && has_digit) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 대문자, 소문자, 숫자를 포함해야 합니다".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(email: &str, password: &str) -> RegisterUserDto {
        RegisterUserDto {
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: password.to_string(),
            firstname: None,
            lastname: None,
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(register("jane@example.com", "SecurePass123").validate().is_ok());
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let errors = register("not-an-email", "SecurePass123").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_weak_password_is_rejected() {
        assert!(register("jane@example.com", "password123").validate().is_err());
        assert!(register("jane@example.com", "Pass1").validate().is_err());
    }

    #[test]
    fn test_password_longer_than_bcrypt_input_is_rejected() {
        let at_limit = format!("Aa1{}", "x".repeat(69));
        assert!(register("jane@example.com", &at_limit).validate().is_ok());

        let too_long = format!("{}y", at_limit);
        let errors = register("jane@example.com", &too_long).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));

        let multibyte = format!("Aa1{}", "가".repeat(30));
        assert!(register("jane@example.com", &multibyte).validate().is_err());
    }

    #[test]
    fn test_blank_firstname_is_rejected_when_present() {
        let mut dto = register("jane@example.com", "SecurePass123");
        dto.firstname = Some(String::new());

        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_register_reads_camel_case() {
        let dto: RegisterUserDto = serde_json::from_str(
            r#"{"email":"a@b.co","password":"SecurePass123","confirmPassword":"SecurePass123"}"#,
        )
        .unwrap();

        assert_eq!(dto.confirm_password, "SecurePass123");
        assert_eq!(dto.firstname, None);
    }
}
