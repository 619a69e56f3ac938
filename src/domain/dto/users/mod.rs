//! # User Data Transfer Objects Module
//!
//! 사용자 관련 유스케이스의 입력/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── create_user.rs       # 해시된 비밀번호를 가진 생성 입력
//! │   └── get_users_query.rs   # 목록 조회 쿼리
//! └── response/
//!     └── user_response.rs     # UserResponse, UserView, UsersPage
//! ```

pub mod request;
pub mod response;

pub use request::{CreateUserDto, GetUsersQuery};
pub use response::{UserResponse, UserView, UsersPage};
