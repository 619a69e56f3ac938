//! # Auth Data Transfer Objects

pub mod request;
pub mod response;

pub use request::{LoginDto, RefreshTokenDto, RegisterUserDto};
pub use response::AuthResponse;
