pub mod admin_token_response;
pub mod claims;
pub mod data_stores;
pub mod email;
pub mod passport;
pub mod password;
pub mod refresh_request;
pub mod register_request;
pub mod signin_request;
pub mod signout_request;
pub mod signout_response;
mod user;

pub use admin_token_response::*;
pub use claims::*;
pub use data_stores::*;
pub use email::*;
pub use passport::*;
pub use password::*;
pub use refresh_request::*;
pub use register_request::*;
pub use signin_request::*;
pub use signout_request::*;
pub use signout_response::*;
pub use user::*;
