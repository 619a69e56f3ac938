//! # Service Registry
//!
//! 프로세스 수명 동안 유지되는 싱글톤(데이터 서비스, 유스케이스)을 보관하는 서비스 로케이터입니다.
//!
//! `main`에서 어댑터를 선택해 조립한 뒤 [`ServiceLocator::set`]으로 등록하고,
//! 핸들러는 [`ServiceLocator::get`]으로 꺼내 씁니다. 등록되지 않은 타입을 요청하면
//! 패닉 대신 `AppError::InternalError`를 반환합니다.
//!
//! ```rust,ignore
//! let data_services: Arc<dyn DataServices> = Arc::new(InMemoryDataServices::new());
//! let users = Arc::new(UsersUseCases::new(data_services.clone()));
//! ServiceLocator::set(users);
//!
//! // 핸들러에서
//! let users = ServiceLocator::get::<UsersUseCases>()?;
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use once_cell::sync::Lazy;
use crate::core::errors::{AppError, AppResult};

/// 타입 기반 싱글톤 저장소
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 인스턴스를 등록합니다. 같은 타입이 이미 있으면 교체됩니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = Self::extract_clean_type_name(std::any::type_name::<T>());
        log::info!("📦 Registering: {}", type_name);

        let mut instances = LOCATOR
            .instances
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 인스턴스를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 해당 타입이 등록되지 않은 경우
    pub fn get<T: 'static + Send + Sync>() -> AppResult<Arc<T>> {
        Self::try_get::<T>().ok_or_else(|| {
            AppError::InternalError(format!(
                "Service not registered: {}",
                Self::extract_clean_type_name(std::any::type_name::<T>())
            ))
        })
    }

    /// 등록된 인스턴스가 있으면 반환합니다.
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR
            .instances
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        instances
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    /// 등록된 인스턴스 수
    pub fn registered_count() -> usize {
        LOCATOR
            .instances
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    fn extract_clean_type_name(type_name: &str) -> &str {
        match type_name.rfind("::") {
            Some(pos) => &type_name[pos + 2..],
            None => type_name,
        }
    }
}
