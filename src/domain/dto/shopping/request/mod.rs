//! 쇼핑 리스트 관련 요청 DTO 모듈

pub mod shopping_item_request;

pub use shopping_item_request::{AddItemRequest, UpdateItemRequest};
