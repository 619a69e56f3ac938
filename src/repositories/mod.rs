//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`DataServices`](crate::domain::abstracts::DataServices) 포트의 어댑터들을 제공합니다.
//! 어떤 어댑터를 쓸지는 `DATA_SERVICE` 환경 변수로 시작 시점에 결정됩니다.
//!
//! # Features
//!
//! - [`mongo`] - MongoDB 컬렉션 + 유니크 인덱스
//! - [`memory`] - 프로세스 메모리 (개발/테스트)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::memory::InMemoryDataServices;
//!
//! let data_services: Arc<dyn DataServices> = Arc::new(InMemoryDataServices::new());
//! let count = data_services.users().get_count(Filter::new()).await?;
//! ```

pub mod mongo;
pub mod memory;
