//! 레시피 관련 응답 DTO 모듈

pub mod recipe_response;

pub use recipe_response::{CommentResponse, CommentWithAuthorResponse, RecipeResponse};
