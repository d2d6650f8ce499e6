//! 쇼핑 리스트 엔티티 모듈

pub mod shopping_list;

pub use shopping_list::{ShoppingItem, ShoppingList};
