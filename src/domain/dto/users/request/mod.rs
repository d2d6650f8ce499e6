//! 사용자 관련 요청 DTO 모듈
//!
//! 가입/로그인/프로필 수정과 즐겨찾기·좋아요 대상 지정 요청을 포함합니다.

pub mod signup_request;
pub mod favorite_request;

pub use signup_request::{LoginRequest, SignupRequest, UpdateProfileRequest};
pub use favorite_request::RecipeRefRequest;
