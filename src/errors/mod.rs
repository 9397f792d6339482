mod admin_token;
mod auth;
mod profile;
mod refresh;
mod signin;
mod signout;
mod signup;

pub use admin_token::*;
pub use auth::*;
pub use profile::*;
pub use refresh::*;
pub use signin::*;
pub use signout::*;
pub use signup::*;
