//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리, 이름 대문자화, 공백 정규화
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{capitalize_first, title_case_words};
//!
//! assert_eq!(capitalize_first("  mcdonald"), "Mcdonald");
//! assert_eq!(title_case_words("air   max"), "Air Max");
//! ```

pub mod string_utils;
