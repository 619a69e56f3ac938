//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 단위 구조체의 연관 함수로 제공하며,
//! 값이 없거나 잘못된 경우 개발용 기본값으로 대체합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 데이터 서비스 어댑터, 서버, 환경, 패스워드 해싱 설정
//! - [`auth_config`] - JWT 토큰 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DataServiceBackend, JwtConfig, ServerConfig};
//!
//! let backend = DataServiceBackend::current();
//! let bind_address = ServerConfig::bind_address();
//! let access_ttl = JwtConfig::access_expires_in_secs();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export ENVIRONMENT="production"      # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export DATA_SERVICE="mongo"          # mongo, memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="commerce"
//! export BCRYPT_COST="12"              # 4-15 범위
//! export AT_JWT_SECRET="..."
//! export RT_JWT_SECRET="..."
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
