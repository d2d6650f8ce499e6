//! 쇼핑 리스트 서비스 모듈

pub mod shopping_list_service;

pub use shopping_list_service::ShoppingListService;
