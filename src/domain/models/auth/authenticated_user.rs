use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppError;
use crate::utils::string_utils::parse_object_id;

/// JWT 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (ObjectId 16진수 문자열)
    pub user_id: String,
}

impl AuthenticatedUser {
    /// 사용자 ID를 ObjectId로 파싱
    ///
    /// 토큰이 정상 발급되었다면 항상 유효한 형식이지만,
    /// 방어적으로 ValidationError로 매핑합니다.
    pub fn object_id(&self) -> Result<ObjectId, AppError> {
        parse_object_id(&self.user_id)
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}

/// 선택적 인증 사용자 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_parses_valid_hex() {
        let oid = ObjectId::new();
        let user = AuthenticatedUser {
            user_id: oid.to_hex(),
        };

        assert_eq!(user.object_id().unwrap(), oid);
    }

    #[test]
    fn test_object_id_rejects_malformed() {
        let user = AuthenticatedUser {
            user_id: "not-an-id".to_string(),
        };

        assert!(user.object_id().is_err());
    }
}
