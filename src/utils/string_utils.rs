//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.
//! 요청 경계에서의 필드 정리와 MongoDB ObjectId 파싱을 담당합니다.

use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 인자
/// * `value` - 검증할 문자열
/// * `field_name` - 필드명 (에러 메시지용)
///
/// # 반환값
/// * `Ok(String)` - 정리된 유효한 문자열
/// * `Err(AppError)` - 빈 문자열이거나 공백만 있는 경우
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// // 성공 케이스
/// assert_eq!(validate_required_string("  밀가루  ", "name").unwrap(), "밀가루");
///
/// // 실패 케이스
/// assert!(validate_required_string("   ", "name").is_err());
/// assert!(validate_required_string("", "name").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 문자열을 MongoDB ObjectId로 파싱
///
/// 경로 파라미터나 요청 본문으로 전달된 16진수 문자열을 ObjectId로 변환합니다.
/// 잘못된 형식은 요청 경계에서 ValidationError(400)로 매핑됩니다.
///
/// # 인자
/// * `id` - 24자리 16진수 ObjectId 문자열
///
/// # 반환값
/// * `Ok(ObjectId)` - 파싱된 ObjectId
/// * `Err(AppError::ValidationError)` - 잘못된 형식
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::parse_object_id;
///
/// let id = parse_object_id("507f1f77bcf86cd799439011")?;
/// assert!(parse_object_id("not-an-id").is_err());
/// ```
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string_trims() {
        assert_eq!(
            validate_required_string("  밀가루  ", "name").unwrap(),
            "밀가루"
        );
    }

    #[test]
    fn test_validate_required_string_rejects_blank() {
        assert!(validate_required_string("", "name").is_err());
        assert!(validate_required_string("   ", "name").is_err());

        if let Err(AppError::ValidationError(msg)) = validate_required_string("", "name") {
            assert!(msg.contains("name"));
        } else {
            panic!("Expected ValidationError");
        }
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(
            clean_optional_string(Some("  Hello  ".to_string())),
            Some("Hello".to_string())
        );
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_parse_object_id_roundtrip() {
        let original = ObjectId::new();
        let parsed = parse_object_id(&original.to_hex()).unwrap();

        assert_eq!(parsed, original);
    }

    #[test]
    fn test_parse_object_id_rejects_malformed() {
        let result = parse_object_id("not-an-id");

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
