//! 쇼핑 리스트 리포지토리 모듈

pub mod shopping_list_repo;

pub use shopping_list_repo::ShoppingListRepository;
