//! 사용자 관련 응답 DTO 모듈
//!
//! 비즈니스 로직 처리 결과를 클라이언트에게 안전하고 일관된 형태로
//! 전달하는 역할을 담당합니다. 비밀번호 해시는 어떤 응답에도 포함되지
//! 않습니다.

pub mod user_response;

pub use user_response::{LoginResponse, SignupResponse, UserResponse, UserSummary};
