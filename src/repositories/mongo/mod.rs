//! # MongoDB Data Services Adapter
//!
//! [`DataServices`] 포트의 MongoDB 구현입니다.
//! 컬렉션마다 하나의 [`MongoGenericRepository`]를 가지며, 시작 시 [`MongoDataServices::ensure_indexes`]로
//! 유니크 인덱스를 보장합니다. 중복 가입 경쟁은 이 인덱스가 원자적으로 막습니다.
//!
//! ```rust,ignore
//! let database = Database::new().await?;
//! let data_services = MongoDataServices::new(&database);
//! data_services.ensure_indexes().await?;
//! ServiceLocator::set::<Arc<dyn DataServices>>(Arc::new(data_services));
//! ```

use std::sync::Arc;
use crate::core::errors::AppResult;
use crate::db::Database;
use crate::domain::abstracts::{CategoriesRepository, DataServices, ProductsRepository, UsersRepository};
use crate::domain::mappers::{CategoryMapper, ProductMapper, UserMapper};

pub mod repository;

pub use repository::MongoGenericRepository;

/// MongoDB 기반 저장소 파사드
pub struct MongoDataServices {
    users: Arc<MongoGenericRepository<UserMapper>>,
    products: Arc<MongoGenericRepository<ProductMapper>>,
    categories: Arc<MongoGenericRepository<CategoryMapper>>,
}

impl MongoDataServices {
    pub fn new(database: &Database) -> Self {
        let db = database.get_database();

        Self {
            users: Arc::new(MongoGenericRepository::new(&db)),
            products: Arc::new(MongoGenericRepository::new(&db)),
            categories: Arc::new(MongoGenericRepository::new(&db)),
        }
    }

    /// 모든 컬렉션의 유니크 인덱스를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - 인덱스 생성 실패
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        self.users.ensure_indexes().await?;
        self.products.ensure_indexes().await?;
        self.categories.ensure_indexes().await?;
        Ok(())
    }
}

impl DataServices for MongoDataServices {
    fn users(&self) -> Arc<UsersRepository> {
        self.users.clone()
    }

    fn products(&self) -> Arc<ProductsRepository> {
        self.products.clone()
    }

    fn categories(&self) -> Arc<CategoriesRepository> {
        self.categories.clone()
    }
}
