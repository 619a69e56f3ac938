//! 비밀번호 해싱
//!
//! bcrypt는 CPU를 오래 점유하므로 액터 스레드가 아닌 블로킹 스레드 풀에서 실행합니다.
//! cost는 [`PasswordConfig::bcrypt_cost`]에서 환경별로 결정됩니다.

use async_trait::async_trait;
use actix_web::rt::task::spawn_blocking;
use crate::config::PasswordConfig;
use crate::core::errors::{AppResult, ErrorContext};

/// 비밀번호 해시/비교 협력자
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// 솔트가 포함된 단방향 해시를 생성합니다.
    async fn hash_password(&self, plain: &str) -> AppResult<String>;

    /// 평문이 해시와 일치하는지 확인합니다. bcrypt 비교는 상수 시간입니다.
    async fn compare_password(&self, plain: &str, hash: &str) -> AppResult<bool>;
}

/// bcrypt 구현
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash_password(&self, plain: &str) -> AppResult<String> {
        let plain = plain.to_string();
        let cost = self.cost;

        let hash_start = std::time::Instant::now();
        let hashed = spawn_blocking(move || bcrypt::hash(plain, cost))
            .await
            .context("해싱 작업 실패")?
            .context("비밀번호 해싱 실패")?;

        log::debug!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(hashed)
    }

    async fn compare_password(&self, plain: &str, hash: &str) -> AppResult<bool> {
        let plain = plain.to_string();
        let hash = hash.to_string();

        spawn_blocking(move || bcrypt::verify(plain, &hash))
            .await
            .context("해시 비교 작업 실패")?
            .context("저장된 비밀번호 해시 검증 실패")
    }
}
