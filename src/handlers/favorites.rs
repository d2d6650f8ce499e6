//! Favorites & Likes HTTP Handlers
//!
//! 호출자의 즐겨찾기/좋아요 집합 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! # Endpoints
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/api/korisnici/omiljeni` | 즐겨찾기 추가 (중복 시 400) |
//! | `DELETE` | `/api/korisnici/omiljeni` | 즐겨찾기 제거 |
//! | `GET` | `/api/korisnici/omiljeni` | 즐겨찾기 레시피 전체 문서 조회 |
//! | `POST` | `/api/korisnici/lajk` | 좋아요 추가 (중복 시 멱등 성공) |
//! | `DELETE` | `/api/korisnici/lajk` | 좋아요 제거 |
//! | `GET` | `/api/korisnici/lajk` | 좋아요 레시피 전체 문서 조회 |
//!
//! 즐겨찾기는 중복 추가를 거부하고 좋아요는 멱등으로 받아들이는 비대칭은
//! 기존 API 계약의 일부로 유지됩니다.
use actix_web::{delete, get, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::auth::authenticated_user::AuthenticatedUser;
use crate::domain::dto::users::request::RecipeRefRequest;
use crate::services::users::user_service::UserService;

/// 즐겨찾기 추가 핸들러
///
/// 이미 즐겨찾기된 레시피를 다시 추가하면 400을 반환합니다.
///
/// # Endpoint
///
/// `POST /api/korisnici/omiljeni`
///
/// # 요청 본문
///
/// ```json
/// { "recipe_id": "507f1f77bcf86cd799439011" }
/// ```
#[post("/omiljeni")]
pub async fn add_favorite(
    user: AuthenticatedUser,
    payload: web::Json<RecipeRefRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    service
        .add_favorite(&user.object_id()?, &payload.recipe_id)
        .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "레시피가 즐겨찾기에 추가되었습니다"
    })))
}

/// 즐겨찾기 제거 핸들러
///
/// 즐겨찾기에 없는 레시피의 제거는 400을 반환합니다.
/// 제거 후에는 추가 이전 상태가 그대로 복원됩니다.
///
/// # Endpoint
///
/// `DELETE /api/korisnici/omiljeni`
#[delete("/omiljeni")]
pub async fn remove_favorite(
    user: AuthenticatedUser,
    payload: web::Json<RecipeRefRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    service
        .remove_favorite(&user.object_id()?, &payload.recipe_id)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "레시피가 즐겨찾기에서 제거되었습니다"
    })))
}

/// 즐겨찾기 목록 조회 핸들러
///
/// ID 집합을 전체 레시피 문서로 확장하여 반환합니다.
/// 빈 집합은 빈 목록입니다 (에러 아님).
///
/// # Endpoint
///
/// `GET /api/korisnici/omiljeni`
#[get("/omiljeni")]
pub async fn list_favorites(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let recipes = service.list_favorites(&user.object_id()?).await?;

    Ok(HttpResponse::Ok().json(recipes))
}

/// 좋아요 추가 핸들러
///
/// 즐겨찾기와 달리 이미 좋아요한 레시피의 재호출은 멱등 성공입니다.
/// 집합에 실제로 추가된 경우에만 레시피의 좋아요 수가 1 증가합니다.
///
/// # Endpoint
///
/// `POST /api/korisnici/lajk`
#[post("/lajk")]
pub async fn add_like(
    user: AuthenticatedUser,
    payload: web::Json<RecipeRefRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    service.add_like(&user.object_id()?, &payload.recipe_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "레시피에 좋아요를 남겼습니다"
    })))
}

/// 좋아요 제거 핸들러
///
/// 좋아요하지 않은 레시피의 제거는 400을 반환합니다.
///
/// # Endpoint
///
/// `DELETE /api/korisnici/lajk`
#[delete("/lajk")]
pub async fn remove_like(
    user: AuthenticatedUser,
    payload: web::Json<RecipeRefRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    service
        .remove_like(&user.object_id()?, &payload.recipe_id)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "좋아요가 취소되었습니다"
    })))
}

/// 좋아요 목록 조회 핸들러
///
/// # Endpoint
///
/// `GET /api/korisnici/lajk`
#[get("/lajk")]
pub async fn list_likes(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let recipes = service.list_likes(&user.object_id()?).await?;

    Ok(HttpResponse::Ok().json(recipes))
}
