//! 상품 서비스 모듈
//!
//! 상품은 반드시 존재하는 카테고리에 속해야 합니다.

pub mod products_use_cases;

pub use products_use_cases::ProductsUseCases;
