use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct SignOutRequestBody {
    pub session_id: String,
}
