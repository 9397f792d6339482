pub mod authorizer;
pub mod credentials;
pub mod data_stores;
pub mod hashmap_session_store;
pub mod hashmap_user_store;
pub mod passport_service;
pub mod token_codec;

pub use authorizer::*;
pub use data_stores::*;
pub use hashmap_session_store::*;
pub use hashmap_user_store::*;
pub use passport_service::*;
pub use token_codec::*;
