//! # 사용자 유스케이스
//!
//! 사용자 생성, 목록 조회(페이지네이션), 단건 조회를 담당합니다.
//!
//! ```text
//! CreateUserDto ──▶ UserEntity::create ──▶ UserMapper ──▶ users().create
//!                        │ Validation              │ Conflict
//!                        ▼                         ▼
//!                  Outcome 실패              Outcome 실패
//! ```
//!
//! 이메일 중복은 가입 핸들러에서 먼저 확인하지만, 동시에 들어온 같은 이메일의 가입은
//! 저장소의 유니크 제약이 최종적으로 막습니다. 이 경우 `Conflict` 실패로 돌려줍니다.

use std::sync::Arc;
use crate::core::errors::{AppError, AppResult};
use crate::core::outcome::{FailureKind, Outcome};
use crate::domain::abstracts::{filter_of, DataServices, Filter};
use crate::domain::dto::pagination::PageRequest;
use crate::domain::dto::users::{CreateUserDto, GetUsersQuery, UserResponse, UserView, UsersPage};
use crate::domain::entities::{UserEntity, UserProps};
use crate::domain::mappers::{Mapper, UserMapper};
use crate::utils::string_utils::{capitalize_first, clean_optional_string};

pub const NO_SUCH_USER: &str = "No such user exists";
pub const FORMAT_NOT_ACCEPTABLE: &str = "Format is not acceptable";

/// 사용자 유스케이스
pub struct UsersUseCases {
    data_services: Arc<dyn DataServices>,
}

impl UsersUseCases {
    pub fn new(data_services: Arc<dyn DataServices>) -> Self {
        Self { data_services }
    }

    /// 새 사용자를 저장합니다.
    ///
    /// `dto.password`는 이미 해시된 값이어야 합니다. 신규 사용자는
    /// `is_verified = false`, `roles = [user]`로 시작합니다.
    ///
    /// # Returns
    ///
    /// * `Outcome` 성공 - 비밀번호가 빠진 [`UserResponse`]
    /// * `Outcome` 실패 `Validation` - 엔티티 검증 실패
    /// * `Outcome` 실패 `Conflict` - 이메일 중복
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn create_user(&self, dto: CreateUserDto) -> AppResult<Outcome<UserResponse>> {
        let props = UserProps::new_member(dto.email, dto.password, dto.firstname, dto.lastname);

        let user = match UserEntity::create(props).into_result() {
            Ok(user) => user,
            Err(failure) => return Ok(Outcome::from_failure(failure)),
        };

        let model = UserMapper::to_model_data(&user);
        let created = self.data_services.users().create(model).await?;

        match created.into_result() {
            Ok(stored) => {
                log::info!("사용자 생성 완료: {}", stored.id().unwrap_or_default());
                Ok(Outcome::ok(UserResponse::from(&stored)))
            }
            Err(failure) => {
                if failure.kind() == FailureKind::Conflict {
                    log::warn!("이미 등록된 이메일로 가입 시도: {}", user.email());
                }
                Ok(Outcome::from_failure(failure))
            }
        }
    }

    /// 사용자 목록을 페이지 단위로 조회합니다.
    ///
    /// 이름 필터는 앞뒤 공백을 제거하고 첫 글자만 대문자로 바꿉니다.
    /// 이메일 필터는 입력 그대로 비교합니다.
    pub async fn get_users(&self, query: Option<GetUsersQuery>) -> AppResult<Outcome<UsersPage>> {
        let query = query.unwrap_or_default();
        let page_request = PageRequest::parse(query.limit.as_deref(), query.current_page.as_deref());
        let filter = Self::users_filter(&query);

        let users = self.data_services.users();

        let item_count = match users.get_count(filter.clone()).await?.into_result() {
            Ok(count) => count,
            Err(failure) => return Ok(Outcome::from_failure(failure)),
        };

        let window = page_request.window(item_count);

        let found = match users.find_all(filter, None, window.options).await?.into_result() {
            Ok(found) => found,
            Err(failure) => return Ok(Outcome::from_failure(failure)),
        };

        log::debug!(
            "사용자 목록 조회: {}건 중 {}건 (page {})",
            item_count,
            found.len(),
            page_request.page
        );

        Ok(Outcome::ok(UsersPage {
            users: found.iter().map(UserResponse::from).collect(),
            meta: page_request.meta(item_count, window.page_count),
        }))
    }

    /// 식별자로 사용자를 조회합니다.
    ///
    /// 없는 사용자와 ObjectId 형식이 아닌 식별자는 모두 `NotFound` "No such user exists"입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 그 밖의 모든 실패. 원인은 로그에만 남깁니다.
    pub async fn get_one_user_by_id(&self, id: &str) -> AppResult<Outcome<UserResponse>> {
        let found = match self.data_services.users().find_by_id(id).await {
            Ok(found) => found,
            Err(e) => {
                log::error!("사용자 조회 실패 ({}): {}", id, e);
                return Err(AppError::InternalError("Something went wrong".to_string()));
            }
        };

        match found.into_result() {
            Ok(user) => Ok(Outcome::ok(UserResponse::from(&user))),
            Err(failure) => match failure.kind() {
                FailureKind::NotFound | FailureKind::NotAcceptable => {
                    Ok(Outcome::fail(NO_SUCH_USER, FailureKind::NotFound))
                }
                _ => {
                    log::error!("사용자 조회 중 예상하지 못한 실패 ({}): {}", id, failure);
                    Err(AppError::InternalError("Something went wrong".to_string()))
                }
            },
        }
    }

    /// 이메일로 사용자를 조회합니다.
    ///
    /// `safe`가 `false`이면 비밀번호 해시를 포함합니다. 인증 유스케이스만 `false`를 넘깁니다.
    pub async fn get_one_user_by_email(&self, email: &str, safe: bool) -> AppResult<Outcome<UserView>> {
        let found = self
            .data_services
            .users()
            .find_by_values(filter_of("email", email))
            .await?;

        Ok(match found.into_result() {
            Ok(user) if safe => Outcome::ok(UserView::safe(&user)),
            Ok(user) => Outcome::ok(UserView::with_password(&user)),
            Err(failure) => match failure.kind() {
                FailureKind::NotFound => Outcome::fail(NO_SUCH_USER, FailureKind::NotFound),
                FailureKind::NotAcceptable => {
                    Outcome::fail(FORMAT_NOT_ACCEPTABLE, FailureKind::NotAcceptable)
                }
                _ => Outcome::from_failure(failure),
            },
        })
    }

    fn users_filter(query: &GetUsersQuery) -> Filter {
        let mut filter = Filter::new();

        if let Some(firstname) = clean_optional_string(query.firstname.as_deref()) {
            filter.insert("firstname".to_string(), capitalize_first(&firstname).into());
        }
        if let Some(lastname) = clean_optional_string(query.lastname.as_deref()) {
            filter.insert("lastname".to_string(), capitalize_first(&lastname).into());
        }
        if let Some(email) = query.email.as_deref().filter(|email| !email.is_empty()) {
            filter.insert("email".to_string(), email.into());
        }

        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::InMemoryDataServices;

    fn use_cases() -> UsersUseCases {
        UsersUseCases::new(Arc::new(InMemoryDataServices::new()))
    }

    fn member(email: &str, lastname: Option<&str>) -> CreateUserDto {
        CreateUserDto {
            email: email.to_string(),
            password: "$2b$04$hashedvalue".to_string(),
            firstname: None,
            lastname: lastname.map(str::to_string),
        }
    }

    fn page_query(limit: &str, current_page: &str) -> GetUsersQuery {
        GetUsersQuery {
            limit: Some(limit.to_string()),
            current_page: Some(current_page.to_string()),
            ..Default::default()
        }
    }

    async fn seed(use_cases: &UsersUseCases, count: usize) {
        for i in 0..count {
            let created = use_cases
                .create_user(member(&format!("user{}@example.com", i), None))
                .await
                .unwrap();
            assert!(created.is_success());
        }
    }

    #[actix_web::test]
    async fn test_create_user_applies_member_defaults() {
        let use_cases = use_cases();

        let created = use_cases
            .create_user(CreateUserDto {
                email: "a@b.com".to_string(),
                password: "secret1".to_string(),
                firstname: None,
                lastname: None,
            })
            .await
            .unwrap()
            .into_value()
            .unwrap();

        assert!(!created.is_verified);
        assert_eq!(created.roles, vec![crate::domain::entities::Role::User]);

        let json = serde_json::to_value(&created).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["isVerified"], false);
        assert_eq!(json["roles"], serde_json::json!(["user"]));
    }

    #[actix_web::test]
    async fn test_create_user_with_invalid_email_is_validation_failure() {
        let created = use_cases().create_user(member("not-an-email", None)).await.unwrap();

        assert_eq!(created.failure_kind(), Some(FailureKind::Validation));
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_conflict() {
        let use_cases = use_cases();
        use_cases.create_user(member("dup@example.com", None)).await.unwrap();

        let second = use_cases.create_user(member("dup@example.com", None)).await.unwrap();

        assert_eq!(second.failure_kind(), Some(FailureKind::Conflict));
    }

    #[actix_web::test]
    async fn test_get_users_pagination_last_page() {
        let use_cases = use_cases();
        seed(&use_cases, 25).await;

        let page = use_cases
            .get_users(Some(page_query("10", "3")))
            .await
            .unwrap()
            .into_value()
            .unwrap();

        assert_eq!(page.users.len(), 5);
        assert_eq!(page.meta.page_count, Some(3));
        assert_eq!(page.meta.item_count, 25);
        assert!(!page.meta.is_next);
        assert!(page.meta.is_previous);
        assert_eq!(page.meta.previous_page, Some(2));
        assert_eq!(page.meta.next_page, None);
    }

    #[actix_web::test]
    async fn test_get_users_clamps_page_past_the_end() {
        let use_cases = use_cases();
        seed(&use_cases, 25).await;

        let page = use_cases
            .get_users(Some(page_query("10", "99")))
            .await
            .unwrap()
            .into_value()
            .unwrap();

        assert_eq!(page.users.len(), 5);
        assert_eq!(page.users[0].email, "user20@example.com");
        assert_eq!(page.meta.page, 99);
    }

    #[actix_web::test]
    async fn test_get_users_without_limit_returns_everything() {
        let use_cases = use_cases();
        seed(&use_cases, 3).await;

        let page = use_cases.get_users(None).await.unwrap().into_value().unwrap();

        assert_eq!(page.users.len(), 3);
        assert_eq!(page.meta.page_count, None);
        assert_eq!(page.meta.page, 1);
        assert!(!page.meta.is_next);
    }

    #[actix_web::test]
    async fn test_get_users_on_empty_store() {
        let page = use_cases()
            .get_users(Some(page_query("10", "4")))
            .await
            .unwrap()
            .into_value()
            .unwrap();

        assert!(page.users.is_empty());
        assert_eq!(page.meta.page_count, Some(0));
        assert_eq!(page.meta.item_count, 0);
    }

    #[test]
    fn test_name_filter_capitalizes_only_the_first_letter() {
        let filter = UsersUseCases::users_filter(&GetUsersQuery {
            lastname: Some("  mcdonald".to_string()),
            firstname: Some("   ".to_string()),
            ..Default::default()
        });

        assert_eq!(filter.get("lastname"), Some(&serde_json::json!("Mcdonald")));
        assert!(!filter.contains_key("firstname"));
    }

    #[actix_web::test]
    async fn test_get_users_filters_by_lastname() {
        let use_cases = use_cases();
        use_cases
            .create_user(member("ronald@example.com", Some("Mcdonald")))
            .await
            .unwrap();
        use_cases
            .create_user(member("other@example.com", Some("Smith")))
            .await
            .unwrap();

        let page = use_cases
            .get_users(Some(GetUsersQuery {
                lastname: Some("  mcdonald".to_string()),
                ..Default::default()
            }))
            .await
            .unwrap()
            .into_value()
            .unwrap();

        assert_eq!(page.users.len(), 1);
        assert_eq!(page.users[0].email, "ronald@example.com");
    }

    #[actix_web::test]
    async fn test_get_one_user_by_id() {
        let use_cases = use_cases();
        let created = use_cases
            .create_user(member("jane@example.com", None))
            .await
            .unwrap()
            .into_value()
            .unwrap();

        let found = use_cases.get_one_user_by_id(&created.id).await.unwrap();
        assert_eq!(found.into_value().unwrap(), created);
    }

    #[actix_web::test]
    async fn test_unknown_or_malformed_id_is_not_found() {
        let use_cases = use_cases();

        for id in ["64b7f0c2a1b2c3d4e5f60718", "not-an-object-id"] {
            let found = use_cases.get_one_user_by_id(id).await.unwrap();
            let failure = found.error().unwrap();

            assert_eq!(failure.kind(), FailureKind::NotFound);
            assert_eq!(failure.message(), NO_SUCH_USER);
        }
    }

    #[actix_web::test]
    async fn test_get_one_user_by_email_safe_and_unsafe() {
        let use_cases = use_cases();
        use_cases.create_user(member("jane@example.com", None)).await.unwrap();

        let safe = use_cases
            .get_one_user_by_email("jane@example.com", true)
            .await
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(safe.password, None);
        assert!(serde_json::to_value(&safe).unwrap().get("password").is_none());

        let unsafe_view = use_cases
            .get_one_user_by_email("jane@example.com", false)
            .await
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(unsafe_view.password.as_deref(), Some("$2b$04$hashedvalue"));
    }

    #[actix_web::test]
    async fn test_get_one_user_by_unknown_email() {
        let found = use_cases()
            .get_one_user_by_email("ghost@example.com", true)
            .await
            .unwrap();

        assert_eq!(found.error().unwrap().message(), NO_SUCH_USER);
    }
}
