use serde::Serialize;
use crate::domain::dto::pagination::PageMeta;
use crate::domain::entities::{Role, UserEntity};

/// 사용자 응답 DTO
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub is_verified: bool,
    pub roles: Vec<Role>,
}

impl From<&UserEntity> for UserResponse {
    fn from(user: &UserEntity) -> Self {
        Self {
            id: user.id().unwrap_or_default().to_string(),
            email: user.email().to_string(),
            firstname: user.firstname().map(str::to_string),
            lastname: user.lastname().map(str::to_string),
            is_verified: user.is_verified(),
            roles: user.roles().to_vec(),
        }
    }
}

/// 이메일 조회 결과
///
/// 안전 조회(`safe = true`)에서는 `password`가 `None`이고 직렬화에서 빠집니다.
/// 비밀번호 검증이 필요한 인증 유스케이스만 해시를 받습니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserView {
    #[serde(flatten)]
    pub user: UserResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserView {
    pub fn safe(user: &UserEntity) -> Self {
        Self {
            user: UserResponse::from(user),
            password: None,
        }
    }

    pub fn with_password(user: &UserEntity) -> Self {
        Self {
            user: UserResponse::from(user),
            password: Some(user.password().to_string()),
        }
    }

    /// 해시를 떼어낸 안전한 형태로 바꿉니다.
    pub fn into_safe(self) -> Self {
        Self {
            password: None,
            ..self
        }
    }
}

/// 사용자 목록 응답
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsersPage {
    pub users: Vec<UserResponse>,
    #[serde(flatten)]
    pub meta: PageMeta,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UserProps;

    fn user() -> UserEntity {
        UserEntity::restore(
            "64b7f0c2a1b2c3d4e5f60718",
            UserProps::new_member("jane@example.com", "$2b$04$hash", None, None),
        )
        .into_value()
        .unwrap()
    }

    #[test]
    fn test_safe_view_has_no_password_field() {
        let json = serde_json::to_value(UserView::safe(&user())).unwrap();

        assert!(json.get("password").is_none());
        assert_eq!(json["id"], "64b7f0c2a1b2c3d4e5f60718");
        assert_eq!(json["isVerified"], false);
        assert_eq!(json["roles"], serde_json::json!(["user"]));
    }

    #[test]
    fn test_unsafe_view_carries_hash() {
        let view = UserView::with_password(&user());
        assert_eq!(view.password.as_deref(), Some("$2b$04$hash"));

        assert_eq!(view.into_safe().password, None);
    }
}
