//! # 레시피 서비스 구현
//!
//! 레시피 CRUD, 검색, 댓글에 대한 비즈니스 규칙을 구현합니다.
//!
//! ## 소유권 검사 순서
//!
//! 수정/삭제는 항상 **존재 확인 → 소유권 확인** 순서로 진행됩니다.
//! 존재하는 레시피에 대한 비소유자의 요청은 404가 아니라 403을 받습니다.
//! 이 구분은 리소스 존재 여부가 곧 정보이기 때문에 의도된 설계입니다.
//!
//! ## 댓글 삭제 정책
//!
//! 댓글 삭제는 소유권 확인 후 제거가 아니라, 댓글 ID와 작성자 ID가
//! 동시에 일치하는 요소를 한 번의 `$pull`로 제거하는 필터 기반 연산입니다.
//! 없는 댓글과 남의 댓글은 같은 단일 신호(404)로 응답됩니다.

use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppError;
use crate::core::registry::{Service, ServiceLocator};
use crate::domain::auth::ownership::ensure_owner;
use crate::domain::dto::recipes::request::{CreateRecipeRequest, UpdateRecipeRequest};
use crate::domain::dto::recipes::response::{
    CommentWithAuthorResponse, RecipeResponse,
};
use crate::domain::entities::recipes::recipe::{Comment, Recipe};
use crate::repositories::recipes::recipe_repo::RecipeRepository;
use crate::repositories::users::user_repo::UserRepository;
use crate::utils::string_utils::{clean_optional_string, parse_object_id, validate_required_string};

/// 작성자가 더 이상 존재하지 않는 댓글의 표시 이름
const UNKNOWN_AUTHOR_LABEL: &str = "알 수 없는 사용자";

/// 레시피 비즈니스 로직 서비스
///
/// 레시피 CRUD/검색과 내장 댓글 연산을 담당합니다.
/// 즐겨찾기 주석과 댓글 작성자 이름 조인을 위해 사용자 리포지토리도
/// 주입받습니다.
pub struct RecipeService {
    /// 레시피 데이터 액세스 리포지토리
    recipe_repo: Arc<RecipeRepository>,
    /// 사용자 데이터 액세스 리포지토리 (즐겨찾기 주석, 작성자 조인)
    user_repo: Arc<UserRepository>,
}

impl RecipeService {
    /// 새 서비스 인스턴스를 생성합니다.
    pub fn new(recipe_repo: Arc<RecipeRepository>, user_repo: Arc<UserRepository>) -> Self {
        Self {
            recipe_repo,
            user_repo,
        }
    }

    /// 등록된 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// 레시피 목록 조회 (선택적 이름 필터)
    ///
    /// 필터가 없으면 전체를, 있으면 대소문자를 무시한 부분 일치 결과를
    /// 저장소 자연 순서대로 반환합니다. 빈 결과는 빈 목록입니다.
    pub async fn list(&self, name_contains: Option<&str>) -> Result<Vec<RecipeResponse>, AppError> {
        let recipes = self.recipe_repo.find_all(name_contains).await?;

        Ok(recipes.into_iter().map(RecipeResponse::from).collect())
    }

    /// 레시피 이름 검색
    ///
    /// 목록 조회와 달리 검색어가 없으면 400, 결과가 없으면 404입니다.
    /// "검색어 없음"과 "결과 없음"을 구분하기 위한 의도된 비대칭입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 검색어 누락 또는 공백
    /// * `AppError::NotFound` - 일치하는 레시피 없음
    pub async fn search(&self, query: Option<&str>) -> Result<Vec<RecipeResponse>, AppError> {
        let query = match query {
            Some(q) if !q.trim().is_empty() => q.trim(),
            _ => {
                return Err(AppError::ValidationError(
                    "검색어(naziv)가 필요합니다".to_string(),
                ))
            }
        };

        let recipes = self.recipe_repo.find_all(Some(query)).await?;

        if recipes.is_empty() {
            return Err(AppError::NotFound(
                "일치하는 레시피가 없습니다".to_string(),
            ));
        }

        Ok(recipes.into_iter().map(RecipeResponse::from).collect())
    }

    /// 레시피 단건 조회
    ///
    /// 인증된 호출자(`viewer`)가 있으면 해당 사용자의 즐겨찾기 집합을
    /// 기준으로 `is_favorite` 주석이 계산됩니다. 토큰은 유효하지만
    /// 사용자가 사라진 경우 주석은 `false`로 계산됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 잘못된 ID 형식
    /// * `AppError::NotFound` - 레시피 없음
    pub async fn get(
        &self,
        recipe_id: &str,
        viewer: Option<&ObjectId>,
    ) -> Result<RecipeResponse, AppError> {
        let recipe_oid = parse_object_id(recipe_id)?;

        let recipe = self
            .recipe_repo
            .find_by_oid(&recipe_oid)
            .await?
            .ok_or_else(|| AppError::NotFound("레시피를 찾을 수 없습니다".to_string()))?;

        let is_favorite = match viewer {
            Some(viewer_id) => {
                let favorited = self
                    .user_repo
                    .find_by_oid(viewer_id)
                    .await?
                    .map(|user| user.has_favorited(&recipe_oid))
                    .unwrap_or(false);
                Some(favorited)
            }
            None => None,
        };

        Ok(RecipeResponse::with_favorite(recipe, is_favorite))
    }

    /// 새 레시피 생성
    ///
    /// 요청 검증(이름/재료/조리 순서 필수)은 경계에서 수행된 상태로 호출됩니다.
    /// 생성 기본값: image="", servings=1, like_count=0, comments=[].
    pub async fn create(
        &self,
        owner_id: &ObjectId,
        request: CreateRecipeRequest,
    ) -> Result<RecipeResponse, AppError> {
        let recipe = Recipe::new(
            *owner_id,
            request.name,
            request.ingredients,
            request.instructions,
            clean_optional_string(request.image),
            request.servings,
        );

        let created = self.recipe_repo.insert(recipe).await?;

        log::info!(
            "레시피 생성: {} (소유자: {})",
            created.id_string().unwrap_or_default(),
            owner_id.to_hex()
        );

        Ok(RecipeResponse::from(created))
    }

    /// 레시피 부분 수정 (소유자 전용)
    ///
    /// 제공된 필드만 얕은 병합으로 교체됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 잘못된 ID 형식 또는 빈 수정 요청
    /// * `AppError::NotFound` - 레시피 없음
    /// * `AppError::AuthorizationError` - 호출자가 소유자가 아님
    pub async fn update(
        &self,
        recipe_id: &str,
        caller_id: &ObjectId,
        request: UpdateRecipeRequest,
    ) -> Result<RecipeResponse, AppError> {
        let recipe_oid = parse_object_id(recipe_id)?;

        if request.is_empty() {
            return Err(AppError::ValidationError(
                "변경할 필드가 없습니다".to_string(),
            ));
        }

        // 존재 확인이 소유권 확인보다 먼저다
        let recipe = self
            .recipe_repo
            .find_by_oid(&recipe_oid)
            .await?
            .ok_or_else(|| AppError::NotFound("레시피를 찾을 수 없습니다".to_string()))?;

        ensure_owner(&recipe.owner_id, caller_id)?;

        let updated = self
            .recipe_repo
            .update_fields(&recipe_oid, request.into_update_document())
            .await?
            .ok_or_else(|| AppError::NotFound("레시피를 찾을 수 없습니다".to_string()))?;

        Ok(RecipeResponse::from(updated))
    }

    /// 레시피 삭제 (소유자 전용)
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 잘못된 ID 형식
    /// * `AppError::NotFound` - 레시피 없음
    /// * `AppError::AuthorizationError` - 호출자가 소유자가 아님
    pub async fn delete(&self, recipe_id: &str, caller_id: &ObjectId) -> Result<(), AppError> {
        let recipe_oid = parse_object_id(recipe_id)?;

        let recipe = self
            .recipe_repo
            .find_by_oid(&recipe_oid)
            .await?
            .ok_or_else(|| AppError::NotFound("레시피를 찾을 수 없습니다".to_string()))?;

        ensure_owner(&recipe.owner_id, caller_id)?;

        self.recipe_repo.delete(&recipe_oid).await?;

        log::info!("레시피 삭제: {}", recipe_id);

        Ok(())
    }

    /// 호출자가 소유한 레시피 목록 조회
    ///
    /// 등록한 레시피가 하나도 없으면 빈 목록이 아니라 404를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 소유한 레시피 없음
    pub async fn list_mine(&self, owner_id: &ObjectId) -> Result<Vec<RecipeResponse>, AppError> {
        let recipes = self.recipe_repo.find_by_owner(owner_id).await?;

        if recipes.is_empty() {
            return Err(AppError::NotFound(
                "등록한 레시피가 없습니다".to_string(),
            ));
        }

        Ok(recipes.into_iter().map(RecipeResponse::from).collect())
    }

    /// 레시피에 댓글 추가
    ///
    /// 본문 검증(공백 거부)은 경계에서 수행된 상태로 호출됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 잘못된 ID 형식
    /// * `AppError::NotFound` - 레시피 없음
    pub async fn add_comment(
        &self,
        recipe_id: &str,
        author_id: &ObjectId,
        text: String,
    ) -> Result<(), AppError> {
        let recipe_oid = parse_object_id(recipe_id)?;
        let text = validate_required_string(&text, "text")?;

        let comment = Comment::new(*author_id, text);

        let pushed = self.recipe_repo.push_comment(&recipe_oid, &comment).await?;

        if !pushed {
            return Err(AppError::NotFound(
                "레시피를 찾을 수 없습니다".to_string(),
            ));
        }

        Ok(())
    }

    /// 레시피에서 댓글 제거 (작성자 전용)
    ///
    /// 댓글 ID와 작성자 ID가 동시에 일치하는 요소만 제거됩니다.
    /// 없는 댓글 ID와 작성자 불일치는 구분되지 않는 단일 신호입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 잘못된 ID 형식
    /// * `AppError::NotFound` - 레시피 없음, 또는 일치하는 댓글 없음
    ///   (존재하지 않는 댓글이거나 삭제 권한 없음)
    pub async fn remove_comment(
        &self,
        recipe_id: &str,
        comment_id: &str,
        author_id: &ObjectId,
    ) -> Result<(), AppError> {
        let recipe_oid = parse_object_id(recipe_id)?;
        let comment_oid = parse_object_id(comment_id)?;

        self.recipe_repo
            .find_by_oid(&recipe_oid)
            .await?
            .ok_or_else(|| AppError::NotFound("레시피를 찾을 수 없습니다".to_string()))?;

        let pulled = self
            .recipe_repo
            .pull_comment(&recipe_oid, &comment_oid, author_id)
            .await?;

        if !pulled {
            return Err(AppError::NotFound(
                "댓글이 없거나 삭제 권한이 없습니다".to_string(),
            ));
        }

        Ok(())
    }

    /// 레시피 댓글 목록 조회 (작성자 이름 조인)
    ///
    /// 댓글의 작성자 ID를 일괄 조회하여 표시 이름으로 변환합니다.
    /// 작성자가 더 이상 존재하지 않으면 자리표시자 레이블이 사용됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 잘못된 ID 형식
    /// * `AppError::NotFound` - 레시피 없음
    pub async fn list_comments(
        &self,
        recipe_id: &str,
    ) -> Result<Vec<CommentWithAuthorResponse>, AppError> {
        let recipe_oid = parse_object_id(recipe_id)?;

        let recipe = self
            .recipe_repo
            .find_by_oid(&recipe_oid)
            .await?
            .ok_or_else(|| AppError::NotFound("레시피를 찾을 수 없습니다".to_string()))?;

        let author_ids: Vec<ObjectId> = recipe
            .comments
            .iter()
            .map(|comment| comment.author_id)
            .collect();

        let authors = self.user_repo.find_by_ids(&author_ids).await?;
        let names_by_id: HashMap<ObjectId, String> = authors
            .into_iter()
            .filter_map(|user| user.id.map(|id| (id, user.name)))
            .collect();

        let comments = recipe
            .comments
            .iter()
            .map(|comment| CommentWithAuthorResponse {
                id: comment.id.to_hex(),
                author_id: comment.author_id.to_hex(),
                author_name: names_by_id
                    .get(&comment.author_id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_AUTHOR_LABEL.to_string()),
                text: comment.text.clone(),
                created_at: comment.created_at,
            })
            .collect();

        Ok(comments)
    }
}

#[async_trait]
impl Service for RecipeService {
    fn name(&self) -> &str {
        "recipe"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}
