use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct AdminTokenResponse {
    pub token: String,
}
