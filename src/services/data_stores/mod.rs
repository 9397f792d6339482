pub mod sql_session_store;
pub mod sql_user_store;

pub use sql_session_store::*;
pub use sql_user_store::*;
