//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 인증, 레시피, 관계 집합(즐겨찾기/좋아요), 쇼핑 리스트 라우트와
//! 헬스체크 엔드포인트를 포함합니다.
//!
//! # Auth Middleware Usage
//!
//! 라우트 스코프에 따라 다른 인증 레벨을 적용합니다:
//!
//! - **Public**: 가입/로그인, 레시피 목록/검색/댓글 목록
//! - **Optional**: 레시피 단건 조회 (인증 시 즐겨찾기 주석 포함)
//! - **Required**: 레시피 생성/수정/삭제, 프로필, 관계 집합, 쇼핑 리스트
//!
//! `/api/recepti` 스코프는 선택적 인증으로 감싸고, 쓰기 핸들러의
//! `AuthenticatedUser` 추출자가 토큰 부재 시 401을 반환합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//!
//! let mut cfg = web::ServiceConfig::new();
//! configure_all_routes(&mut cfg);
//! ```

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_recipe_routes(cfg);
    configure_relation_routes(cfg);
    configure_shopping_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// # Route Groups
///
/// ## Public 라우트 (인증 불필요)
/// - `POST /api/auth/signup` - 계정 생성
/// - `POST /api/auth/login` - 토큰 발급
///
/// ## Protected 라우트 (인증 필요)
/// - `GET /api/auth/korisnici` - 프로필 조회
/// - `PUT /api/auth/korisnici` - 프로필 수정
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::signup)
            .service(handlers::auth::login)
            .service(
                web::scope("/korisnici")
                    .wrap(AuthMiddleware::required())
                    .service(handlers::auth::get_profile)
                    .service(handlers::auth::update_profile),
            ),
    );
}

/// 레시피 관련 라우트를 설정합니다
///
/// 전체 스코프를 선택적 인증으로 감싸서 단건 조회의 즐겨찾기 주석을
/// 지원하고, 쓰기 핸들러는 `AuthenticatedUser` 추출자로 인증을 강제합니다.
///
/// # Available Routes
///
/// - `GET /api/recepti` - 목록 (선택적 `naziv` 필터)
/// - `GET /api/recepti/pretraga` - 검색 (`naziv` 필수)
/// - `GET /api/recepti/{id}` - 단건 조회 (선택적 인증)
/// - `POST /api/recepti` - 생성 (인증 필요)
/// - `PUT/DELETE /api/recepti/{id}` - 수정/삭제 (소유자 전용)
/// - `POST/GET /api/recepti/{id}/komentari` - 댓글 작성/목록
/// - `DELETE /api/recepti/{id}/komentari/{comment_id}` - 댓글 삭제
/// - `GET /api/mojirecepti` - 내 레시피 (인증 필요)
fn configure_recipe_routes(cfg: &mut web::ServiceConfig) {
    // 고정 경로(/pretraga)는 동적 경로(/{id})보다 먼저 등록한다
    cfg.service(
        web::scope("/api/recepti")
            .wrap(AuthMiddleware::optional())
            .service(handlers::recipes::list_recipes)
            .service(handlers::recipes::search_recipes)
            .service(handlers::recipes::create_recipe)
            .service(handlers::comments::add_comment)
            .service(handlers::comments::list_comments)
            .service(handlers::comments::remove_comment)
            .service(handlers::recipes::get_recipe)
            .service(handlers::recipes::update_recipe)
            .service(handlers::recipes::delete_recipe),
    );

    cfg.service(
        web::scope("/api/mojirecepti")
            .wrap(AuthMiddleware::required())
            .service(handlers::recipes::my_recipes),
    );
}

/// 즐겨찾기/좋아요 관계 집합 라우트를 설정합니다
///
/// 모든 연산은 토큰에 실린 호출자 자신의 집합에만 적용됩니다.
///
/// # Available Routes
///
/// - `POST/DELETE/GET /api/korisnici/omiljeni` - 즐겨찾기 토글/목록
/// - `POST/DELETE/GET /api/korisnici/lajk` - 좋아요 토글/목록
fn configure_relation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/korisnici")
            .wrap(AuthMiddleware::required())
            .service(handlers::favorites::add_favorite)
            .service(handlers::favorites::remove_favorite)
            .service(handlers::favorites::list_favorites)
            .service(handlers::favorites::add_like)
            .service(handlers::favorites::remove_like)
            .service(handlers::favorites::list_likes),
    );
}

/// 쇼핑 리스트 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /api/shoppingLista` - 항목 목록
/// - `POST /api/shoppingLista` - 항목 추가
/// - `PUT /api/shoppingLista/{item_id}` - 완료 플래그 교체
/// - `DELETE /api/shoppingLista/{item_id}` - 항목 제거
/// - `DELETE /api/shoppingLista` - 완료된 항목 일괄 제거
fn configure_shopping_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/shoppingLista")
            .wrap(AuthMiddleware::required())
            .service(handlers::shopping::get_items)
            .service(handlers::shopping::add_item)
            .service(handlers::shopping::remove_completed)
            .service(handlers::shopping::update_item)
            .service(handlers::shopping::remove_item),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "recipe_service",
///   "version": "0.1.0",
///   "timestamp": "2025-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "auth": "JWT Bearer"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "recipe_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "auth": "JWT Bearer"
        }
    }))
}
