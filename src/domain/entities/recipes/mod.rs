//! 레시피 엔티티 모듈

pub mod recipe;

pub use recipe::{Comment, Recipe};
