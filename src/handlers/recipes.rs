//! Recipe HTTP Handlers
//!
//! 레시피 CRUD와 검색 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! # Endpoints
//!
//! | 메서드 | 경로 | 인증 | 설명 |
//! |--------|------|------|------|
//! | `GET` | `/api/recepti` | 불필요 | 목록 (선택적 `naziv` 필터) |
//! | `GET` | `/api/recepti/pretraga` | 불필요 | 검색 (`naziv` 필수) |
//! | `GET` | `/api/recepti/{id}` | 선택 | 단건 조회 (인증 시 즐겨찾기 주석) |
//! | `POST` | `/api/recepti` | Bearer | 생성 |
//! | `PUT` | `/api/recepti/{id}` | Bearer | 수정 (소유자 전용) |
//! | `DELETE` | `/api/recepti/{id}` | Bearer | 삭제 (소유자 전용) |
//! | `GET` | `/api/mojirecepti` | Bearer | 내 레시피 목록 |
use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::auth::authenticated_user::{AuthenticatedUser, OptionalUser};
use crate::domain::dto::recipes::request::{
    CreateRecipeRequest, RecipeListQuery, RecipeSearchQuery, UpdateRecipeRequest,
};
use crate::services::recipes::recipe_service::RecipeService;

/// 레시피 목록 조회 핸들러
///
/// `naziv` 쿼리 파라미터가 있으면 대소문자를 무시하는 부분 일치 필터를
/// 적용합니다. 필터가 없으면 전체 목록을 반환합니다.
///
/// # Endpoint
///
/// `GET /api/recepti?naziv=torta`
#[get("")]
pub async fn list_recipes(
    query: web::Query<RecipeListQuery>,
) -> Result<HttpResponse, AppError> {
    let service = RecipeService::instance();
    let recipes = service.list(query.naziv.as_deref()).await?;

    Ok(HttpResponse::Ok().json(recipes))
}

/// 레시피 검색 핸들러
///
/// 목록 조회와 달리 검색어가 없으면 400, 결과가 없으면 404를 반환합니다.
///
/// # Endpoint
///
/// `GET /api/recepti/pretraga?naziv=pita`
#[get("/pretraga")]
pub async fn search_recipes(
    query: web::Query<RecipeSearchQuery>,
) -> Result<HttpResponse, AppError> {
    let service = RecipeService::instance();
    let recipes = service.search(query.naziv.as_deref()).await?;

    Ok(HttpResponse::Ok().json(recipes))
}

/// 레시피 단건 조회 핸들러
///
/// 인증은 선택사항입니다. 유효한 토큰과 함께 호출되면 응답에
/// `is_favorite` 필드가 포함되어 호출자의 즐겨찾기 여부를 나타냅니다.
///
/// # Endpoint
///
/// `GET /api/recepti/{id}`
///
/// 잘못된 ID 형식은 400, 존재하지 않는 레시피는 404입니다.
#[get("/{id}")]
pub async fn get_recipe(
    path: web::Path<String>,
    viewer: OptionalUser,
) -> Result<HttpResponse, AppError> {
    let service = RecipeService::instance();

    let viewer_id = match viewer.0 {
        Some(user) => Some(user.object_id()?),
        None => None,
    };

    let recipe = service.get(&path, viewer_id.as_ref()).await?;

    Ok(HttpResponse::Ok().json(recipe))
}

/// 레시피 생성 핸들러
///
/// # Endpoint
///
/// `POST /api/recepti`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "Pita od jabuka",
///   "ingredients": ["jabuke", "brašno"],
///   "instructions": ["izmiješati", "peći 40 minuta"],
///   "image": "https://example.com/pita.jpg",
///   "servings": 6
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// 생성된 레시피 전체 (생성된 ID 포함, `servings=1`/`like_count=0`/
/// `comments=[]` 기본값 적용).
///
/// 이름/재료/조리 순서가 빠지거나 배열이 비어 있으면 400입니다.
#[post("")]
pub async fn create_recipe(
    user: AuthenticatedUser,
    payload: web::Json<CreateRecipeRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = RecipeService::instance();
    let recipe = service
        .create(&user.object_id()?, payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(recipe))
}

/// 레시피 수정 핸들러 (소유자 전용)
///
/// 제공된 필드만 얕은 병합으로 교체됩니다. 빈 본문은 400입니다.
///
/// # Endpoint
///
/// `PUT /api/recepti/{id}`
///
/// 존재하는 레시피에 대한 비소유자의 요청은 404가 아니라 403입니다.
#[put("/{id}")]
pub async fn update_recipe(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<UpdateRecipeRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = RecipeService::instance();
    let recipe = service
        .update(&path, &user.object_id()?, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(recipe))
}

/// 레시피 삭제 핸들러 (소유자 전용)
///
/// # Endpoint
///
/// `DELETE /api/recepti/{id}`
#[delete("/{id}")]
pub async fn delete_recipe(
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = RecipeService::instance();
    service.delete(&path, &user.object_id()?).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "레시피가 삭제되었습니다"
    })))
}

/// 내 레시피 목록 조회 핸들러
///
/// 호출자가 소유한 레시피만 반환합니다. 등록한 레시피가 하나도 없으면
/// 빈 목록이 아니라 404를 반환합니다.
///
/// # Endpoint
///
/// `GET /api/mojirecepti`
#[get("")]
pub async fn my_recipes(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = RecipeService::instance();
    let recipes = service.list_mine(&user.object_id()?).await?;

    Ok(HttpResponse::Ok().json(recipes))
}
