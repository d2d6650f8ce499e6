//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을
//! 제공합니다. 횡단 관심사(Cross-cutting concerns)를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - JWT 토큰 기반 인증 검증
//! - Bearer 토큰 추출 및 검증
//! - 사용자 정보를 request extension에 저장
//! - 선택적/강제 인증 모드 지원
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::AuthMiddleware;
//!
//! // 보호 라우트: 토큰 없으면 401
//! cfg.service(
//!     web::scope("/api/shoppingLista")
//!         .wrap(AuthMiddleware::required())
//!         .service(handlers::shopping::get_items)
//! );
//!
//! // 선택적 인증: 토큰이 있으면 검증, 없어도 진행
//! cfg.service(
//!     web::scope("/api/recepti")
//!         .wrap(AuthMiddleware::optional())
//!         .service(handlers::recipes::get_recipe)
//! );
//! ```

pub mod auth_middleware;
pub mod auth_inner;

pub use auth_middleware::AuthMiddleware;
