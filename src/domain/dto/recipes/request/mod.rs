//! 레시피 관련 요청 DTO 모듈

pub mod recipe_request;

pub use recipe_request::{
    CommentRequest, CreateRecipeRequest, RecipeListQuery, RecipeSearchQuery, UpdateRecipeRequest,
};
