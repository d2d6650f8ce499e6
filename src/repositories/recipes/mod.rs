//! 레시피 리포지토리 모듈

pub mod recipe_repo;

pub use recipe_repo::RecipeRepository;
