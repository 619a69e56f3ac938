//! # 페이지네이션
//!
//! 사용자/카테고리/상품 목록 조회가 공유하는 페이지 계산 규칙입니다.
//!
//! 1. `currentPage`는 1 이상의 정수. 없거나 해석할 수 없거나 1 미만이면 1
//! 2. `limit`은 양의 정수. 그 외에는 페이지네이션 없음 (skip도 없음)
//! 3. `pageCount = ceil(itemCount / limit)` (limit이 있을 때만)
//! 4. 요청 페이지가 `pageCount`보다 크면 마지막 페이지의 offset을 사용합니다.
//!    레코드가 하나도 없으면 offset은 0입니다.
//!
//! ```text
//! itemCount=25, limit=10
//!   page=3  → pageCount=3, offset=20
//!   page=99 → pageCount=3, offset=20 (마지막 페이지로 보정)
//! ```

use serde::Serialize;
use crate::domain::abstracts::FindOptions;

/// 쿼리 문자열에서 해석한 페이지 요청
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: Option<u64>,
}

impl PageRequest {
    /// 원시 쿼리 값을 관대하게 해석합니다.
    pub fn parse(limit: Option<&str>, current_page: Option<&str>) -> Self {
        let page = current_page
            .and_then(|value| value.trim().parse::<i64>().ok())
            .filter(|page| *page >= 1)
            .map(|page| page as u64)
            .unwrap_or(1);

        let limit = limit
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|limit| *limit > 0);

        Self { page, limit }
    }

    /// 전체 개수를 기준으로 페이지 수와 조회 옵션을 계산합니다.
    pub fn window(&self, item_count: u64) -> PageWindow {
        let Some(limit) = self.limit else {
            return PageWindow {
                page_count: None,
                options: FindOptions::default(),
            };
        };

        let page_count = item_count.div_ceil(limit);
        let offset = if self.page > page_count {
            limit.saturating_mul(page_count.saturating_sub(1))
        } else {
            limit.saturating_mul(self.page - 1)
        };

        PageWindow {
            page_count: Some(page_count),
            options: FindOptions {
                limit: Some(limit),
                skip: Some(offset),
            },
        }
    }

    /// 응답에 실리는 페이지 메타데이터
    pub fn meta(&self, item_count: u64, page_count: Option<u64>) -> PageMeta {
        let page = self.page;
        let is_next = page_count.is_some_and(|count| page < count);
        let is_previous = page > 1;

        PageMeta {
            page_count,
            item_count,
            page,
            is_next,
            is_previous,
            next_page: is_next.then_some(page + 1),
            previous_page: is_previous.then_some(page - 1),
        }
    }
}

/// 페이지 계산 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page_count: Option<u64>,
    pub options: FindOptions,
}

/// 목록 응답의 페이지 메타데이터
///
/// `nextPage`/`previousPage`는 이동할 페이지가 없으면 `null`입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page_count: Option<u64>,
    pub item_count: u64,
    pub page: u64,
    pub is_next: bool,
    pub is_previous: bool,
    pub next_page: Option<u64>,
    pub previous_page: Option<u64>,
}
