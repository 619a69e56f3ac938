//! # Data Services Port
//!
//! 유스케이스가 의존하는 저장소 추상화입니다. 구체 어댑터
//! ([`MongoDataServices`](crate::repositories::mongo::MongoDataServices),
//! [`InMemoryDataServices`](crate::repositories::memory::InMemoryDataServices))는
//! 애플리케이션 시작 시 `DATA_SERVICE` 설정에 따라 선택됩니다.
//!
//! ## 반환 규칙
//!
//! 모든 연산은 `AppResult<Outcome<T>>`를 반환합니다.
//!
//! - 없음, 중복, 잘못된 식별자 형식: `Outcome` 실패 (`NotFound`, `Conflict`, `NotAcceptable`)
//! - 드라이버/직렬화 실패: `Err(AppError::DatabaseError)`

use std::collections::BTreeMap;
use std::sync::Arc;
use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::core::outcome::Outcome;
use crate::domain::entities::{CategoryEntity, ProductEntity, UserEntity};
use crate::domain::models::{BaseDocument, CategoryModel, ProductModel, UserModel};

/// 필드 이름(직렬화된 camelCase 기준) → 값 동등 비교 조건
pub type Filter = BTreeMap<String, serde_json::Value>;

/// 결과에 포함할 필드 목록 (`_id`는 항상 포함)
pub type Projection = Vec<String>;

/// `find_all` 페이지네이션 옵션
///
/// `limit`과 `skip`은 서로 독립적이며, `None`이면 적용하지 않습니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindOptions {
    pub limit: Option<u64>,
    pub skip: Option<u64>,
}

/// 집합(aggregate)별 저장소 연산
#[async_trait]
pub trait GenericRepository<E, M>: Send + Sync
where
    E: Send + Sync + 'static,
    M: BaseDocument,
{
    /// 문서를 저장하고 저장된 엔티티를 반환합니다. 유니크 제약 위반은 `Conflict`.
    async fn create(&self, model: M) -> AppResult<Outcome<E>>;

    /// 식별자로 조회합니다. 없으면 `NotFound`, ObjectId 형식이 아니면 `NotAcceptable`.
    async fn find_by_id(&self, id: &str) -> AppResult<Outcome<E>>;

    /// 조건에 맞는 첫 문서를 조회합니다. 없으면 `NotFound`.
    async fn find_by_values(&self, filter: Filter) -> AppResult<Outcome<E>>;

    /// 조건에 맞는 문서 목록 (비어 있을 수 있음, 삽입 순서)
    async fn find_all(
        &self,
        filter: Filter,
        projection: Option<Projection>,
        options: FindOptions,
    ) -> AppResult<Outcome<Vec<E>>>;

    async fn get_count(&self, filter: Filter) -> AppResult<Outcome<u64>>;
}

pub type UsersRepository = dyn GenericRepository<UserEntity, UserModel>;
pub type ProductsRepository = dyn GenericRepository<ProductEntity, ProductModel>;
pub type CategoriesRepository = dyn GenericRepository<CategoryEntity, CategoryModel>;

/// 저장소 파사드
///
/// 프로세스당 하나의 인스턴스가 [`ServiceLocator`](crate::core::registry::ServiceLocator)에
/// `Arc<dyn DataServices>`로 등록되어 공유됩니다.
pub trait DataServices: Send + Sync {
    fn users(&self) -> Arc<UsersRepository>;
    fn products(&self) -> Arc<ProductsRepository>;
    fn categories(&self) -> Arc<CategoriesRepository>;
}

/// `{ key: value }` 단일 조건 필터
pub fn filter_of(key: &str, value: impl Into<serde_json::Value>) -> Filter {
    let mut filter = Filter::new();
    filter.insert(key.to_string(), value.into());
    filter
}
