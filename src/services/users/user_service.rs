//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 전체 생명주기를 관리하는 핵심 비즈니스 로직을 구현합니다.
//! 가입, 인증, 프로필 관리와 함께 사용자에 귀속되는 관계 집합
//! (즐겨찾기/좋아요)의 연산을 담당합니다.
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 환경별 cost 설정으로 보안 강도 조절, 솔트 자동 생성
//! - **민감 정보 제거**: DTO 변환 시 비밀번호 해시 제외
//! - **비밀번호 변경 보호**: 현재 비밀번호 검증 후에만 새 해시 저장
//!
//! ## 관계 집합 정책
//!
//! 즐겨찾기와 좋아요는 의도적으로 서로 다른 중복 정책을 가집니다:
//!
//! | 연산 | 중복 추가 | 없는 원소 제거 |
//! |------|-----------|----------------|
//! | 즐겨찾기 | `ConflictError` (400) | `ConflictError` (400) |
//! | 좋아요 | 멱등 성공 (no-op) | `ConflictError` (400) |
//!
//! 좋아요는 추가/제거가 실제로 일어난 경우에만 레시피의 `like_count`를
//! 증감시켜 카운터가 집합 크기와 어긋나지 않게 합니다.

use std::sync::Arc;
use async_trait::async_trait;
use bcrypt::{hash, verify};
use mongodb::bson::{doc, oid::ObjectId, DateTime};

use crate::config::PasswordConfig;
use crate::core::errors::AppError;
use crate::core::registry::{Service, ServiceLocator};
use crate::domain::dto::recipes::response::RecipeResponse;
use crate::domain::dto::users::request::{SignupRequest, UpdateProfileRequest};
use crate::domain::dto::users::response::{SignupResponse, UserResponse};
use crate::domain::entities::users::user::User;
use crate::repositories::recipes::recipe_repo::RecipeRepository;
use crate::repositories::users::user_repo::UserRepository;
use crate::utils::string_utils::{parse_object_id, validate_required_string};

/// 사용자 관리 비즈니스 로직 서비스
///
/// 사용자 등록, 인증, 프로필 관리와 즐겨찾기/좋아요 집합 연산을 담당합니다.
/// 레시피 확장 조회와 좋아요 수 동기화를 위해 레시피 리포지토리도 주입받습니다.
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: Arc<UserRepository>,
    /// 레시피 데이터 액세스 리포지토리 (집합 확장, like_count 동기화)
    recipe_repo: Arc<RecipeRepository>,
}

impl UserService {
    /// 새 서비스 인스턴스를 생성합니다.
    pub fn new(user_repo: Arc<UserRepository>, recipe_repo: Arc<RecipeRepository>) -> Self {
        Self {
            user_repo,
            recipe_repo,
        }
    }

    /// 등록된 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// 새 사용자 계정 생성
    ///
    /// # 처리 과정
    ///
    /// 1. **비밀번호 해싱**: bcrypt를 사용한 안전한 해싱 (환경별 cost)
    /// 2. **엔티티 생성**: 빈 관계 집합을 가진 사용자 생성
    /// 3. **영구 저장**: Repository를 통한 저장 (이메일 중복 시 Conflict)
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이메일 중복 (같은 이메일로 두 번째
    ///   가입 시도는 항상 실패)
    /// * `AppError::InternalError` - 비밀번호 해싱 실패
    pub async fn signup(&self, request: SignupRequest) -> Result<SignupResponse, AppError> {
        let start_time = std::time::Instant::now();

        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(request.name, request.email, password_hash);

        let created_user = self.user_repo.create(user).await?;

        log::info!("Total signup took: {:?}", start_time.elapsed());

        Ok(SignupResponse {
            user: UserResponse::from(created_user),
            message: "사용자가 성공적으로 생성되었습니다".to_string(),
        })
    }

    /// 이메일/비밀번호 인증
    ///
    /// 로그인 핸들러에서 토큰 발급 전에 호출됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 이메일의 사용자가 없음 (404)
    /// * `AppError::AuthenticationError` - 비밀번호 불일치 (401)
    pub async fn verify_password(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let matches = verify(password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !matches {
            log::warn!("로그인 실패 (비밀번호 불일치): {}", email);
            return Err(AppError::AuthenticationError(
                "비밀번호가 일치하지 않습니다".to_string(),
            ));
        }

        Ok(user)
    }

    /// 프로필 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 사용자가 더 이상 존재하지 않음
    pub async fn get_profile(&self, user_id: &ObjectId) -> Result<UserResponse, AppError> {
        let user = self
            .user_repo
            .find_by_oid(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 프로필 수정
    ///
    /// 이름 변경은 무조건적으로, 비밀번호 변경은 현재 비밀번호 검증 후에만
    /// 수행됩니다. 두 변경은 서로 독립적입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 변경할 필드가 없거나 현재 비밀번호 누락
    /// * `AppError::NotFound` - 사용자가 존재하지 않음
    /// * `AppError::AuthenticationError` - 현재 비밀번호 불일치
    pub async fn update_profile(
        &self,
        user_id: &ObjectId,
        request: UpdateProfileRequest,
    ) -> Result<UserResponse, AppError> {
        if request.is_empty() {
            return Err(AppError::ValidationError(
                "변경할 필드가 없습니다".to_string(),
            ));
        }

        let user = self
            .user_repo
            .find_by_oid(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let mut update = doc! {};

        if let Some(ref new_password) = request.new_password {
            let current_password = request.current_password.as_deref().ok_or_else(|| {
                AppError::ValidationError(
                    "비밀번호 변경 시 현재 비밀번호가 필요합니다".to_string(),
                )
            })?;

            let matches = verify(current_password, &user.password_hash)
                .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

            if !matches {
                return Err(AppError::AuthenticationError(
                    "현재 비밀번호가 일치하지 않습니다".to_string(),
                ));
            }

            let password_hash = hash(new_password, PasswordConfig::bcrypt_cost())
                .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

            update.insert("password_hash", password_hash);
        }

        if let Some(ref name) = request.name {
            let name = validate_required_string(name, "name")?;
            update.insert("name", name);
        }

        update.insert("updated_at", DateTime::now());

        let updated = self
            .user_repo
            .update_profile(user_id, update)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(updated))
    }

    /// 즐겨찾기 집합에 레시피 추가
    ///
    /// 이미 즐겨찾기된 레시피는 `ConflictError`로 거부됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 잘못된 레시피 ID 형식
    /// * `AppError::NotFound` - 사용자가 존재하지 않음
    /// * `AppError::ConflictError` - 이미 즐겨찾기에 존재
    pub async fn add_favorite(&self, user_id: &ObjectId, recipe_id: &str) -> Result<(), AppError> {
        let recipe_oid = parse_object_id(recipe_id)?;

        let user = self
            .user_repo
            .find_by_oid(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        if user.has_favorited(&recipe_oid) {
            return Err(AppError::ConflictError(
                "이미 즐겨찾기에 추가된 레시피입니다".to_string(),
            ));
        }

        self.user_repo.add_favorite(user_id, &recipe_oid).await?;

        Ok(())
    }

    /// 즐겨찾기 집합에서 레시피 제거
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 잘못된 레시피 ID 형식
    /// * `AppError::NotFound` - 사용자가 존재하지 않음
    /// * `AppError::ConflictError` - 즐겨찾기에 없는 레시피
    pub async fn remove_favorite(
        &self,
        user_id: &ObjectId,
        recipe_id: &str,
    ) -> Result<(), AppError> {
        let recipe_oid = parse_object_id(recipe_id)?;

        self.user_repo
            .find_by_oid(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let removed = self.user_repo.remove_favorite(user_id, &recipe_oid).await?;

        if !removed {
            return Err(AppError::ConflictError(
                "즐겨찾기에 없는 레시피입니다".to_string(),
            ));
        }

        Ok(())
    }

    /// 즐겨찾기 집합을 전체 레시피 문서로 확장 조회
    ///
    /// 빈 집합은 빈 목록을 반환합니다 (에러 아님).
    pub async fn list_favorites(
        &self,
        user_id: &ObjectId,
    ) -> Result<Vec<RecipeResponse>, AppError> {
        let user = self
            .user_repo
            .find_by_oid(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let recipes = self
            .recipe_repo
            .find_by_ids(&user.favorite_recipe_ids)
            .await?;

        Ok(recipes.into_iter().map(RecipeResponse::from).collect())
    }

    /// 좋아요 집합에 레시피 추가 (멱등)
    ///
    /// 이미 좋아요한 레시피에 대한 재호출은 성공으로 처리되며 아무 일도
    /// 일어나지 않습니다. 집합에 실제로 추가된 경우에만 대상 레시피의
    /// `like_count`가 1 증가합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 잘못된 레시피 ID 형식
    /// * `AppError::NotFound` - 사용자 또는 레시피가 존재하지 않음
    pub async fn add_like(&self, user_id: &ObjectId, recipe_id: &str) -> Result<(), AppError> {
        let recipe_oid = parse_object_id(recipe_id)?;

        self.user_repo
            .find_by_oid(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        self.recipe_repo
            .find_by_oid(&recipe_oid)
            .await?
            .ok_or_else(|| AppError::NotFound("레시피를 찾을 수 없습니다".to_string()))?;

        let newly_added = self.user_repo.add_like(user_id, &recipe_oid).await?;

        if newly_added {
            self.recipe_repo.inc_like_count(&recipe_oid, 1).await?;
        }

        Ok(())
    }

    /// 좋아요 집합에서 레시피 제거
    ///
    /// 집합에서 실제로 제거된 경우에만 `like_count`가 1 감소합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 잘못된 레시피 ID 형식
    /// * `AppError::NotFound` - 사용자가 존재하지 않음
    /// * `AppError::ConflictError` - 좋아요하지 않은 레시피
    pub async fn remove_like(&self, user_id: &ObjectId, recipe_id: &str) -> Result<(), AppError> {
        let recipe_oid = parse_object_id(recipe_id)?;

        self.user_repo
            .find_by_oid(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let removed = self.user_repo.remove_like(user_id, &recipe_oid).await?;

        if !removed {
            return Err(AppError::ConflictError(
                "좋아요하지 않은 레시피입니다".to_string(),
            ));
        }

        self.recipe_repo.inc_like_count(&recipe_oid, -1).await?;

        Ok(())
    }

    /// 좋아요 집합을 전체 레시피 문서로 확장 조회
    ///
    /// 빈 집합은 빈 목록을 반환합니다 (에러 아님).
    pub async fn list_likes(&self, user_id: &ObjectId) -> Result<Vec<RecipeResponse>, AppError> {
        let user = self
            .user_repo
            .find_by_oid(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let recipes = self.recipe_repo.find_by_ids(&user.liked_recipe_ids).await?;

        Ok(recipes.into_iter().map(RecipeResponse::from).collect())
    }
}

#[async_trait]
impl Service for UserService {
    fn name(&self) -> &str {
        "user"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}
