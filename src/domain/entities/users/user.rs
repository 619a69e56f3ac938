//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 이메일/패스워드 기반 계정과 역할 목록을 가지며, 비밀번호는 항상 해시된 값으로만 보관합니다.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::core::outcome::Outcome;
use crate::domain::entities::{require_non_empty, Entity, EntityProps};

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// 대소문자와 앞뒤 공백을 무시하고 역할 이름을 해석합니다.
impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 사용자 엔티티 속성
///
/// - `email`: 앞뒤 공백 제거, `@` 포함 필수 (대소문자는 그대로 보존)
/// - `password`: 생성 유스케이스가 이미 해시한 값. 엔티티는 내용을 해석하지 않습니다.
/// - `firstname`, `lastname`: 선택. 값이 있으면 공백 제거 후 비어 있으면 안 됩니다.
/// - `roles`: 비어 있지 않고 중복 없는 순서 있는 집합
#[derive(Debug, Clone, PartialEq)]
pub struct UserProps {
    pub email: String,
    pub password: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub is_verified: bool,
    pub roles: Vec<Role>,
}

impl UserProps {
    /// 신규 가입 사용자의 기본 속성 (`is_verified = false`, `roles = [user]`)
    pub fn new_member(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        firstname: Option<String>,
        lastname: Option<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password_hash.into(),
            firstname,
            lastname,
            is_verified: false,
            roles: vec![Role::User],
        }
    }
}

impl EntityProps for UserProps {
    const ENTITY_NAME: &'static str = "User";

    fn normalize(self) -> Self {
        Self {
            email: self.email.trim().to_string(),
            firstname: self.firstname.map(|name| name.trim().to_string()),
            lastname: self.lastname.map(|name| name.trim().to_string()),
            ..self
        }
    }

    fn validate(&self) -> Result<(), String> {
        require_non_empty(&self.email, Self::ENTITY_NAME, "email")?;
        if !self.email.contains('@') {
            return Err(format!("User email is not valid: {}", self.email));
        }

        require_non_empty(&self.password, Self::ENTITY_NAME, "password")?;

        if let Some(firstname) = &self.firstname {
            require_non_empty(firstname, Self::ENTITY_NAME, "firstname")?;
        }
        if let Some(lastname) = &self.lastname {
            require_non_empty(lastname, Self::ENTITY_NAME, "lastname")?;
        }

        if self.roles.is_empty() {
            return Err("User must have at least one role".to_string());
        }
        for (index, role) in self.roles.iter().enumerate() {
            if self.roles[..index].contains(role) {
                return Err(format!("User role is duplicated: {}", role));
            }
        }

        Ok(())
    }
}

/// 사용자 엔티티
pub type UserEntity = Entity<UserProps>;

impl Entity<UserProps> {
    pub fn email(&self) -> &str {
        &self.props().email
    }

    /// 해시된 비밀번호
    pub fn password(&self) -> &str {
        &self.props().password
    }

    pub fn firstname(&self) -> Option<&str> {
        self.props().firstname.as_deref()
    }

    pub fn lastname(&self) -> Option<&str> {
        self.props().lastname.as_deref()
    }

    pub fn is_verified(&self) -> bool {
        self.props().is_verified
    }

    pub fn roles(&self) -> &[Role] {
        &self.props().roles
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.props().roles.contains(&role)
    }

    pub fn with_verified(self, is_verified: bool) -> Outcome<Self> {
        self.update(|props| props.is_verified = is_verified)
    }

    pub fn with_roles(self, roles: Vec<Role>) -> Outcome<Self> {
        self.update(|props| props.roles = roles)
    }

    pub fn with_password(self, password_hash: impl Into<String>) -> Outcome<Self> {
        let password_hash = password_hash.into();
        self.update(|props| props.password = password_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::outcome::FailureKind;

    fn member() -> UserProps {
        UserProps::new_member("  jane@example.com ", "$2b$04$hash", Some(" Jane ".to_string()), None)
    }

    #[test]
    fn test_new_member_defaults() {
        let user = UserEntity::create(member()).into_value().unwrap();

        assert_eq!(user.email(), "jane@example.com");
        assert_eq!(user.firstname(), Some("Jane"));
        assert_eq!(user.lastname(), None);
        assert!(!user.is_verified());
        assert_eq!(user.roles(), &[Role::User]);
        assert_eq!(user.id(), None);
    }

    #[test]
    fn test_email_is_not_lowercased() {
        let props = UserProps::new_member("Jane@Example.com", "hash", None, None);
        let user = UserEntity::create(props).into_value().unwrap();

        assert_eq!(user.email(), "Jane@Example.com");
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let props = UserProps::new_member("not-an-email", "hash", None, None);
        let outcome = UserEntity::create(props);

        assert_eq!(outcome.failure_kind(), Some(FailureKind::Validation));
    }

    #[test]
    fn test_blank_optional_name_is_rejected() {
        let props = UserProps::new_member("a@b.c", "hash", None, Some("   ".to_string()));

        assert!(UserEntity::create(props).is_failure());
    }

    #[test]
    fn test_roles_must_be_non_empty_and_unique() {
        let user = UserEntity::create(member()).into_value().unwrap();

        assert!(user.clone().with_roles(vec![]).is_failure());
        assert!(user.clone().with_roles(vec![Role::Admin, Role::Admin]).is_failure());

        let admin = user.with_roles(vec![Role::User, Role::Admin]).into_value().unwrap();
        assert!(admin.has_role(Role::Admin));
    }

    #[test]
    fn test_with_methods_return_new_entity() {
        let user = UserEntity::restore("64b7f0c2a1b2c3d4e5f60718", member())
            .into_value()
            .unwrap();

        let verified = user.clone().with_verified(true).into_value().unwrap();
        assert!(verified.is_verified());
        assert!(!user.is_verified());
        assert_eq!(verified.id(), user.id());

        assert!(user.with_password("").is_failure());
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!(" Admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("user".parse::<Role>(), Ok(Role::User));
        assert!("root".parse::<Role>().is_err());
        assert_eq!(Role::Admin.to_string(), "admin");
    }
}
