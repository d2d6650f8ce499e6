//! 리소스 소유권 검사
//!
//! 리소스 생성자만 해당 리소스를 수정/삭제할 수 있다는 규칙을 구현합니다.
//! 순수 판정 함수이므로 저장소 접근 없이 어디서든 호출할 수 있습니다.
//!
//! 검사 순서는 항상 존재 확인 → 소유권 확인입니다. 존재하는 리소스에 대한
//! 비소유자의 수정 시도는 404가 아니라 403으로 구분되어 응답됩니다.

use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppError;

/// 호출자가 리소스를 수정할 수 있는지 판정
///
/// 소유자 ID와 호출자 ID의 엄격한 동등 비교입니다.
pub fn can_mutate(owner_id: &ObjectId, caller_id: &ObjectId) -> bool {
    owner_id == caller_id
}

/// 소유권을 검사하고 위반 시 `AuthorizationError`(403)를 반환
///
/// # 예제
///
/// ```rust,ignore
/// let recipe = self.recipe_repo.find_by_id(&recipe_id).await?
///     .ok_or_else(|| AppError::NotFound("레시피를 찾을 수 없습니다".to_string()))?;
///
/// ensure_owner(&recipe.owner_id, caller_id)?;
/// ```
pub fn ensure_owner(owner_id: &ObjectId, caller_id: &ObjectId) -> Result<(), AppError> {
    if can_mutate(owner_id, caller_id) {
        Ok(())
    } else {
        Err(AppError::AuthorizationError(
            "리소스를 수정할 권한이 없습니다".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_can_mutate() {
        let owner = ObjectId::new();

        assert!(can_mutate(&owner, &owner));
        assert!(ensure_owner(&owner, &owner).is_ok());
    }

    #[test]
    fn test_non_owner_gets_forbidden_not_not_found() {
        let owner = ObjectId::new();
        let caller = ObjectId::new();

        assert!(!can_mutate(&owner, &caller));

        let result = ensure_owner(&owner, &caller);
        assert!(matches!(result, Err(AppError::AuthorizationError(_))));
    }
}
