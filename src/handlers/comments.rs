//! Comment HTTP Handlers
//!
//! 레시피 내장 댓글 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! # Endpoints
//!
//! | 메서드 | 경로 | 인증 | 설명 |
//! |--------|------|------|------|
//! | `POST` | `/api/recepti/{id}/komentari` | Bearer | 댓글 작성 |
//! | `GET` | `/api/recepti/{id}/komentari` | 불필요 | 댓글 목록 (작성자 이름 조인) |
//! | `DELETE` | `/api/recepti/{id}/komentari/{comment_id}` | Bearer | 댓글 삭제 (작성자 전용) |
use actix_web::{delete, get, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::auth::authenticated_user::AuthenticatedUser;
use crate::domain::dto::recipes::request::CommentRequest;
use crate::services::recipes::recipe_service::RecipeService;

/// 댓글 작성 핸들러
///
/// 인증된 사용자라면 누구나 댓글을 남길 수 있습니다.
/// 공백만으로 이루어진 본문은 400으로 거부됩니다.
///
/// # Endpoint
///
/// `POST /api/recepti/{id}/komentari`
#[post("/{id}/komentari")]
pub async fn add_comment(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<CommentRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = RecipeService::instance();
    service
        .add_comment(&path, &user.object_id()?, payload.into_inner().text)
        .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "댓글이 추가되었습니다"
    })))
}

/// 댓글 목록 조회 핸들러
///
/// 각 댓글의 작성자 ID를 표시 이름으로 조인하여 반환합니다.
/// 작성자가 더 이상 존재하지 않는 댓글은 자리표시자 레이블로 표시됩니다.
///
/// # Endpoint
///
/// `GET /api/recepti/{id}/komentari`
#[get("/{id}/komentari")]
pub async fn list_comments(
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = RecipeService::instance();
    let comments = service.list_comments(&path).await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// 댓글 삭제 핸들러 (작성자 전용)
///
/// 댓글 ID와 작성자가 동시에 일치하는 경우에만 제거됩니다.
/// 없는 댓글 ID와 남의 댓글은 같은 404 신호로 응답됩니다.
///
/// # Endpoint
///
/// `DELETE /api/recepti/{id}/komentari/{comment_id}`
#[delete("/{id}/komentari/{comment_id}")]
pub async fn remove_comment(
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (recipe_id, comment_id) = path.into_inner();

    let service = RecipeService::instance();
    service
        .remove_comment(&recipe_id, &comment_id, &user.object_id()?)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "댓글이 삭제되었습니다"
    })))
}
