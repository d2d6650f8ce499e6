//! 즐겨찾기/좋아요 요청 DTO
//!
//! 호출자의 관계 집합에 추가하거나 제거할 대상 레시피를 지정합니다.
use serde::Deserialize;
use validator::Validate;

/// 대상 레시피를 지정하는 요청 DTO
///
/// POST/DELETE `/api/korisnici/omiljeni`, `/api/korisnici/lajk` 공용.
/// ID 형식 검증(ObjectId)은 서비스 계층에서 수행되어 400으로 매핑됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecipeRefRequest {
    /// 대상 레시피 ID (ObjectId 16진수 문자열)
    #[validate(length(min = 1, message = "레시피 ID가 필요합니다"))]
    pub recipe_id: String,
}
