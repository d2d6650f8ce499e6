use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
///
/// 비밀번호 해시 등 민감 정보를 제외한 사용자 정보입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    /// 즐겨찾기한 레시피 ID 목록 (16진수 문자열)
    pub favorite_recipe_ids: Vec<String>,
    /// 좋아요한 레시피 ID 목록 (16진수 문자열)
    pub liked_recipe_ids: Vec<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            favorite_recipe_ids,
            liked_recipe_ids,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            favorite_recipe_ids: favorite_recipe_ids.iter().map(|id| id.to_hex()).collect(),
            liked_recipe_ids: liked_recipe_ids.iter().map(|id| id.to_hex()).collect(),
            created_at,
            updated_at,
        }
    }
}

/// 가입 완료 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub user: UserResponse,
    pub message: String,
}

/// 로그인 응답에 실리는 사용자 요약 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// 로그인 응답 DTO (JWT 토큰 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserSummary,
}

impl LoginResponse {
    /// 새 로그인 응답 생성
    pub fn new(user: &User, token: String) -> Self {
        Self {
            token,
            user: UserSummary::from(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_user_response_excludes_password_hash() {
        let mut user = User::new(
            "Ana".to_string(),
            "ana@example.com".to_string(),
            "hash".to_string(),
        );
        user.id = Some(ObjectId::new());

        let response = UserResponse::from(user.clone());
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "ana@example.com");
        assert_eq!(json["id"], user.id_string().unwrap());
    }

    #[test]
    fn test_login_response_carries_user_summary() {
        let mut user = User::new(
            "Ana".to_string(),
            "ana@example.com".to_string(),
            "hash".to_string(),
        );
        user.id = Some(ObjectId::new());

        let response = LoginResponse::new(&user, "token-value".to_string());

        assert_eq!(response.token, "token-value");
        assert_eq!(response.user.name, "Ana");
        assert_eq!(response.user.id, user.id_string().unwrap());
    }
}
