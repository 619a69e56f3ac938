//! # In-Memory Data Services Adapter
//!
//! `DATA_SERVICE=memory`로 선택되는 [`DataServices`] 구현입니다.
//! 프로세스가 종료되면 데이터가 사라지며, 유스케이스 테스트의 기본 저장소로 쓰입니다.

use std::sync::Arc;
use crate::domain::abstracts::{CategoriesRepository, DataServices, ProductsRepository, UsersRepository};
use crate::domain::mappers::{CategoryMapper, ProductMapper, UserMapper};

pub mod repository;

pub use repository::InMemoryRepository;

/// 인메모리 저장소 파사드
#[derive(Default)]
pub struct InMemoryDataServices {
    users: Arc<InMemoryRepository<UserMapper>>,
    products: Arc<InMemoryRepository<ProductMapper>>,
    categories: Arc<InMemoryRepository<CategoryMapper>>,
}

impl InMemoryDataServices {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataServices for InMemoryDataServices {
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
