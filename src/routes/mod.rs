pub mod admin_token;
pub mod monitor;
pub mod profile;
pub mod refresh;
pub mod signin;
pub mod signout;
pub mod signup;
