//! # Data Transfer Objects (DTO) Module
//!
//! API 경계와 유스케이스 경계에서 데이터를 전달하기 위한 객체들을 정의하는 모듈입니다.
//!
//! | 구성 | 역할 |
//! |------|------|
//! | 요청 DTO | `validator` derive로 형식 검증, `serde`로 camelCase 역직렬화 |
//! | 쿼리 DTO | 원시 문자열로 받아 유스케이스에서 관대하게 해석 |
//! | 응답 DTO | 엔티티에서 만들어지며 비밀번호 해시를 노출하지 않음 |
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── pagination.rs    # 목록 조회 공통 페이지 계산
//! ├── users/           # 사용자 생성 입력, 목록 쿼리, 응답
//! ├── auths/           # 가입/로그인/갱신 요청, 토큰 응답
//! ├── products/        # 상품 등록/조회
//! └── categories/      # 카테고리 등록/조회
//! ```

pub mod pagination;
pub mod users;
pub mod auths;
pub mod products;
pub mod categories;

pub use pagination::{PageMeta, PageRequest, PageWindow};
pub use users::{CreateUserDto, GetUsersQuery, UserResponse, UserView, UsersPage};
pub use auths::{AuthResponse, LoginDto, RefreshTokenDto, RegisterUserDto};
pub use products::{CreateProductDto, GetProductsQuery, ProductResponse, ProductsPage};
pub use categories::{CategoriesPage, CategoryResponse, CreateCategoryDto, GetCategoriesQuery};
