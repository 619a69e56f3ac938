//! 카테고리 서비스 모듈
//!
//! 카테고리 이름은 단어마다 첫 글자를 대문자로 바꿔 저장하며, 이름은 유일합니다.

pub mod categories_use_cases;

pub use categories_use_cases::CategoriesUseCases;
