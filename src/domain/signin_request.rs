use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct SignInRequestBody {
    pub email_or_username: String,
    pub password: String,
}
