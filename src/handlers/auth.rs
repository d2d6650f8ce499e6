//! Authentication HTTP Handlers
//!
//! 사용자 인증과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 가입/로그인과 JWT 토큰 기반의 프로필 조회/수정을 구현합니다.
//!
//! # Endpoints
//!
//! | 메서드 | 경로 | 인증 | 설명 |
//! |--------|------|------|------|
//! | `POST` | `/api/auth/signup` | 불필요 | 계정 생성 |
//! | `POST` | `/api/auth/login` | 불필요 | 토큰 발급 |
//! | `GET` | `/api/auth/korisnici` | Bearer | 프로필 조회 |
//! | `PUT` | `/api/auth/korisnici` | Bearer | 프로필 수정 |
use actix_web::{get, post, put, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::auth::authenticated_user::AuthenticatedUser;
use crate::domain::dto::users::request::{LoginRequest, SignupRequest, UpdateProfileRequest};
use crate::domain::dto::users::response::LoginResponse;
use crate::services::auth::token_service::TokenService;
use crate::services::users::user_service::UserService;

/// 가입 핸들러
///
/// 새로운 사용자 계정을 생성합니다. 이메일의 고유성을 검증합니다.
///
/// # Endpoint
///
/// `POST /api/auth/signup`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "Ana Anić",
///   "email": "ana@example.com",
///   "password": "tajna123"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// 생성된 사용자 정보(비밀번호 해시 제외)와 완료 메시지.
///
/// ## 중복 이메일 (400 Bad Request)
/// ```json
/// { "error": "Conflict error: 이미 사용 중인 이메일입니다" }
/// ```
///
/// 같은 이메일로 두 번째 가입 시도는 항상 실패합니다.
#[post("/signup")]
pub async fn signup(
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let response = service.signup(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 로그인 핸들러
///
/// 이메일과 비밀번호를 검증하고 1시간 만료의 JWT 토큰을 발급합니다.
///
/// # Endpoint
///
/// `POST /api/auth/login`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIs...",
///   "user": { "id": "...", "name": "Ana Anić", "email": "ana@example.com" }
/// }
/// ```
///
/// ## 실패 사례
///
/// - 등록되지 않은 이메일: 404 Not Found
/// - 비밀번호 불일치: 401 Unauthorized
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user_service = UserService::instance();
    let token_service = TokenService::instance();

    // 사용자 인증
    let user = user_service
        .verify_password(&payload.email, &payload.password)
        .await?;

    // JWT 토큰 발급
    let token = token_service.generate_access_token(&user)?;

    log::info!(
        "로그인 성공 - 사용자: {}, ID: {}",
        user.email,
        user.id_string().unwrap_or_default()
    );

    Ok(HttpResponse::Ok().json(LoginResponse::new(&user, token)))
}

/// 프로필 조회 핸들러
///
/// 토큰에 실린 사용자의 최신 프로필을 반환합니다.
///
/// # Endpoint
///
/// `GET /api/auth/korisnici`
///
/// 토큰은 유효하지만 사용자가 사라진 경우 404를 반환합니다.
#[get("")]
pub async fn get_profile(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let response = service.get_profile(&user.object_id()?).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 프로필 수정 핸들러
///
/// 이름 변경은 무조건적으로, 비밀번호 변경은 현재 비밀번호 검증 후에만
/// 수행됩니다.
///
/// # Endpoint
///
/// `PUT /api/auth/korisnici`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "Nova Ana",
///   "current_password": "tajna123",
///   "new_password": "novaTajna456"
/// }
/// ```
///
/// 현재 비밀번호가 일치하지 않으면 401을 반환합니다.
#[put("")]
pub async fn update_profile(
    user: AuthenticatedUser,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let response = service
        .update_profile(&user.object_id()?, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
