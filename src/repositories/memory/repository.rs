//! # 인메모리 제네릭 리포지토리
//!
//! MongoDB 어댑터와 같은 의미를 프로세스 메모리에서 제공합니다 (개발/테스트용).
//!
//! - 문서는 삽입 순서대로 보관됩니다.
//! - 유니크 필드는 쓰기 잠금 안에서 검사하므로 동시 가입도 하나만 성공합니다.
//! - 필터는 문서를 JSON으로 직렬화한 뒤 최상위 필드 동등 비교로 적용합니다.

use std::marker::PhantomData;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use mongodb::bson::{self, oid::ObjectId};
use crate::core::errors::{AppError, AppResult};
use crate::core::outcome::{FailureKind, Outcome};
use crate::domain::abstracts::{Filter, FindOptions, GenericRepository, Projection};
use crate::domain::mappers::Mapper;
use crate::domain::models::BaseDocument;
use crate::repositories::mongo::repository::duplicate_message;

/// 매퍼 `Mp`가 정의하는 컬렉션의 인메모리 리포지토리
pub struct InMemoryRepository<Mp: Mapper> {
    documents: RwLock<Vec<Mp::Model>>,
    _mapper: PhantomData<fn() -> Mp>,
}

impl<Mp: Mapper> Default for InMemoryRepository<Mp> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Mp: Mapper> InMemoryRepository<Mp> {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
            _mapper: PhantomData,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Mp::Model>> {
        self.documents.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Mp::Model>> {
        self.documents.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn to_json(model: &Mp::Model) -> AppResult<serde_json::Value> {
        serde_json::to_value(model).map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    fn matches(model: &Mp::Model, filter: &Filter) -> AppResult<bool> {
        if filter.is_empty() {
            return Ok(true);
        }

        let json = Self::to_json(model)?;
        Ok(filter
            .iter()
            .all(|(field, expected)| json.get(field) == Some(expected)))
    }

    fn filtered(&self, filter: &Filter) -> AppResult<Vec<Mp::Model>> {
        let documents = self.read();
        let mut matched = Vec::new();
        for model in documents.iter() {
            if Self::matches(model, filter)? {
                matched.push(model.clone());
            }
        }
        Ok(matched)
    }

    /// 포함할 필드만 남깁니다. `_id`는 항상 유지됩니다.
    fn project(model: Mp::Model, projection: &Projection) -> AppResult<Mp::Model> {
        let document: bson::Document = bson::to_document(&model)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .into_iter()
            .filter(|(key, _)| key == "_id" || projection.iter().any(|field| field == key))
            .collect();

        bson::from_document(document).map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    fn conflicts_with(existing: &serde_json::Value, candidate: &serde_json::Value) -> bool {
        <Mp::Model as BaseDocument>::UNIQUE_FIELDS.iter().any(|field| {
            match (existing.get(*field), candidate.get(*field)) {
                (Some(left), Some(right)) => left == right,
                _ => false,
            }
        })
    }
}

#[async_trait]
impl<Mp: Mapper> GenericRepository<Mp::Entity, Mp::Model> for InMemoryRepository<Mp> {
    async fn create(&self, model: Mp::Model) -> AppResult<Outcome<Mp::Entity>> {
        let entity = Mp::to_domain(model.clone())?;
        let candidate = Self::to_json(&model)?;

        let mut documents = self.write();
        for existing in documents.iter() {
            if existing.id() == model.id() || Self::conflicts_with(&Self::to_json(existing)?, &candidate) {
                return Ok(Outcome::fail(
                    duplicate_message::<Mp::Model>(),
                    FailureKind::Conflict,
                ));
            }
        }
        documents.push(model);

        Ok(Outcome::ok(entity))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Outcome<Mp::Entity>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(Outcome::fail(
                format!("Invalid id format: {}", id),
                FailureKind::NotAcceptable,
            ));
        };

        let found = self.read().iter().find(|model| model.id() == object_id).cloned();

        match found {
            Some(model) => Ok(Outcome::ok(Mp::to_domain(model)?)),
            None => Ok(Outcome::fail(
                format!("No {} record with id {}", <Mp::Model as BaseDocument>::COLLECTION, id),
                FailureKind::NotFound,
            )),
        }
    }

    async fn find_by_values(&self, filter: Filter) -> AppResult<Outcome<Mp::Entity>> {
        match self.filtered(&filter)?.into_iter().next() {
            Some(model) => Ok(Outcome::ok(Mp::to_domain(model)?)),
            None => Ok(Outcome::fail(
                format!("No {} record matches the given values", <Mp::Model as BaseDocument>::COLLECTION),
                FailureKind::NotFound,
            )),
        }
    }

    async fn find_all(
        &self,
        filter: Filter,
        projection: Option<Projection>,
        options: FindOptions,
    ) -> AppResult<Outcome<Vec<Mp::Entity>>> {
        let skip = options.skip.map_or(0, |skip| usize::try_from(skip).unwrap_or(usize::MAX));
        let limit = options.limit.map_or(usize::MAX, |limit| usize::try_from(limit).unwrap_or(usize::MAX));

        let mut entities = Vec::new();
        for model in self.filtered(&filter)?.into_iter().skip(skip).take(limit) {
            let model = match &projection {
                Some(projection) => Self::project(model, projection)?,
                None => model,
            };
            entities.push(Mp::to_domain(model)?);
        }

        Ok(Outcome::ok(entities))
    }

    async fn get_count(&self, filter: Filter) -> AppResult<Outcome<u64>> {
        let count = self.filtered(&filter)?.len() as u64;
        Ok(Outcome::ok(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::abstracts::filter_of;
    use crate::domain::entities::{ProductEntity, ProductProps, UserEntity, UserProps};
    use crate::domain::mappers::{ProductMapper, UserMapper};

    fn user_model(email: &str, firstname: Option<&str>) -> crate::domain::models::UserModel {
        let user = UserEntity::create(UserProps::new_member(
            email,
            "$2b$04$hash",
            firstname.map(str::to_string),
            None,
        ))
        .into_value()
        .unwrap();
        UserMapper::to_model_data(&user)
    }

    #[actix_web::test]
    async fn test_create_then_find_by_id() {
        let repo = InMemoryRepository::<UserMapper>::new();
        let model = user_model("jane@example.com", None);
        let id = model.id.to_hex();

        let created = repo.create(model).await.unwrap().into_value().unwrap();
        assert_eq!(created.id(), Some(id.as_str()));

        let found = repo.find_by_id(&id).await.unwrap().into_value().unwrap();
        assert_eq!(found.email(), "jane@example.com");
    }

    #[actix_web::test]
    async fn test_duplicate_unique_field_is_conflict() {
        let repo = InMemoryRepository::<UserMapper>::new();
        repo.create(user_model("jane@example.com", None)).await.unwrap();

        let duplicate = repo.create(user_model("jane@example.com", None)).await.unwrap();

        assert_eq!(duplicate.failure_kind(), Some(FailureKind::Conflict));
        assert_eq!(repo.get_count(Filter::new()).await.unwrap().into_value().unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_find_by_id_classifies_missing_and_malformed() {
        let repo = InMemoryRepository::<UserMapper>::new();

        let malformed = repo.find_by_id("not-an-object-id").await.unwrap();
        assert_eq!(malformed.failure_kind(), Some(FailureKind::NotAcceptable));

        let missing = repo.find_by_id(&ObjectId::new().to_hex()).await.unwrap();
        assert_eq!(missing.failure_kind(), Some(FailureKind::NotFound));
    }

    #[actix_web::test]
    async fn test_find_by_values_and_count_use_equality_filter() {
        let repo = InMemoryRepository::<UserMapper>::new();
        repo.create(user_model("a@example.com", Some("Jane"))).await.unwrap();
        repo.create(user_model("b@example.com", Some("John"))).await.unwrap();
        repo.create(user_model("c@example.com", Some("Jane"))).await.unwrap();

        let janes = repo.get_count(filter_of("firstname", "Jane")).await.unwrap();
        assert_eq!(janes.into_value().unwrap(), 2);

        let found = repo
            .find_by_values(filter_of("email", "b@example.com"))
            .await
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(found.firstname(), Some("John"));

        let none = repo.find_by_values(filter_of("email", "z@example.com")).await.unwrap();
        assert_eq!(none.failure_kind(), Some(FailureKind::NotFound));
    }

    #[actix_web::test]
    async fn test_find_all_keeps_insertion_order_with_skip_and_limit() {
        let repo = InMemoryRepository::<UserMapper>::new();
        for index in 0..5 {
            repo.create(user_model(&format!("user{}@example.com", index), None))
                .await
                .unwrap();
        }

        let page = repo
            .find_all(Filter::new(), None, FindOptions { limit: Some(2), skip: Some(3) })
            .await
            .unwrap()
            .into_value()
            .unwrap();

        let emails: Vec<&str> = page.iter().map(|user| user.email()).collect();
        assert_eq!(emails, vec!["user3@example.com", "user4@example.com"]);
    }

    #[actix_web::test]
    async fn test_projection_drops_excluded_optional_fields() {
        let repo = InMemoryRepository::<ProductMapper>::new();
        let product = ProductEntity::create(ProductProps {
            name: "Air Runner".to_string(),
            description: "Lightweight".to_string(),
            category_id: ObjectId::new().to_hex(),
            brand_image: "brand.png".to_string(),
            price: 100,
            quantity: 2,
            images: vec!["a.png".to_string()],
            sizes: vec![260],
        })
        .into_value()
        .unwrap();
        repo.create(ProductMapper::to_model_data(&product)).await.unwrap();

        let projection: Projection = [
            "name", "description", "categoryId", "brandImage", "price", "quantity", "createdAt", "updatedAt",
        ]
        .iter()
        .map(|field| field.to_string())
        .collect();

        let projected = repo
            .find_all(Filter::new(), Some(projection), FindOptions::default())
            .await
            .unwrap()
            .into_value()
            .unwrap();

        assert_eq!(projected.len(), 1);
        assert_eq!(projected[0].name(), "Air Runner");
        assert!(projected[0].images().is_empty());
        assert!(projected[0].sizes().is_empty());
    }

    #[actix_web::test]
    async fn test_projection_keeps_id_and_listed_fields_only() {
        let repo = InMemoryRepository::<UserMapper>::new();
        let model = user_model("jane@example.com", Some("Jane"));
        let id = model.id.to_hex();
        repo.create(model).await.unwrap();

        let projection: Projection = ["email", "password", "isVerified", "roles", "createdAt", "updatedAt"]
            .iter()
            .map(|field| field.to_string())
            .collect();

        let projected = repo
            .find_all(Filter::new(), Some(projection), FindOptions::default())
            .await
            .unwrap()
            .into_value()
            .unwrap();

        assert_eq!(projected.len(), 1);
        assert_eq!(projected[0].id(), Some(id.as_str()));
        assert_eq!(projected[0].email(), "jane@example.com");
        assert_eq!(projected[0].firstname(), None);
    }
}
