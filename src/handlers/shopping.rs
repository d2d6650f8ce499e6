//! Shopping List HTTP Handlers
//!
//! 호출자의 쇼핑 리스트 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 모든 연산은 토큰에 실린 사용자의 리스트에만 적용됩니다.
//!
//! # Endpoints
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/api/shoppingLista` | 항목 목록 (리스트 없으면 빈 배열) |
//! | `POST` | `/api/shoppingLista` | 항목 추가 (첫 추가 시 리스트 생성) |
//! | `PUT` | `/api/shoppingLista/{item_id}` | 완료 플래그 교체 |
//! | `DELETE` | `/api/shoppingLista/{item_id}` | 항목 제거 |
//! | `DELETE` | `/api/shoppingLista` | 완료된 항목 일괄 제거 |
use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::auth::authenticated_user::AuthenticatedUser;
use crate::domain::dto::shopping::request::{AddItemRequest, UpdateItemRequest};
use crate::services::shopping::shopping_list_service::ShoppingListService;

/// 쇼핑 항목 목록 조회 핸들러
///
/// 아직 리스트를 만들지 않은 사용자는 404가 아니라 빈 배열을 받습니다.
///
/// # Endpoint
///
/// `GET /api/shoppingLista`
#[get("")]
pub async fn get_items(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = ShoppingListService::instance();
    let items = service.get_items(&user.object_id()?).await?;

    Ok(HttpResponse::Ok().json(items))
}

/// 쇼핑 항목 추가 핸들러
///
/// 첫 항목 추가 시 리스트가 자동 생성됩니다.
///
/// # Endpoint
///
/// `POST /api/shoppingLista`
///
/// # 요청 본문
///
/// ```json
/// { "name": "mlijeko", "completed": false }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// { "id": "0c0b9a4e-...", "name": "mlijeko", "completed": false }
/// ```
#[post("")]
pub async fn add_item(
    user: AuthenticatedUser,
    payload: web::Json<AddItemRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = ShoppingListService::instance();
    let item = service
        .add_item(&user.object_id()?, payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(item))
}

/// 쇼핑 항목 완료 상태 변경 핸들러
///
/// `pending ↔ completed` 양방향 전이가 허용됩니다.
///
/// # Endpoint
///
/// `PUT /api/shoppingLista/{item_id}`
///
/// 리스트 또는 항목이 없으면 404입니다.
#[put("/{item_id}")]
pub async fn update_item(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateItemRequest>,
) -> Result<HttpResponse, AppError> {
    let service = ShoppingListService::instance();
    service
        .update_item(&user.object_id()?, &path, payload.completed)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "항목이 갱신되었습니다"
    })))
}

/// 쇼핑 항목 제거 핸들러
///
/// # Endpoint
///
/// `DELETE /api/shoppingLista/{item_id}`
#[delete("/{item_id}")]
pub async fn remove_item(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let service = ShoppingListService::instance();
    service.remove_item(&user.object_id()?, &path).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "항목이 제거되었습니다"
    })))
}

/// 완료된 항목 일괄 제거 핸들러
///
/// 완료된 항목이 없어도 리스트가 존재하면 성공(no-op)입니다.
/// 리스트 자체가 없으면 404입니다.
///
/// # Endpoint
///
/// `DELETE /api/shoppingLista`
#[delete("")]
pub async fn remove_completed(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = ShoppingListService::instance();
    service.remove_completed(&user.object_id()?).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "완료된 항목이 제거되었습니다"
    })))
}
